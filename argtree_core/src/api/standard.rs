use bitflags::bitflags;

use crate::constant::*;

bitflags! {
    /// Selects the conventional flags added by [`CommandLineSpecification::standard_flags`](crate::CommandLineSpecification::standard_flags).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StandardFlags: u8 {
        /// `DryRun`, via `--dry-run` or `-n`.
        const DRY_RUN = 0b0001;
        /// `Help`, via `--help` or `-h`.
        const HELP = 0b0010;
        /// `Quiet`, via `--quiet` or `-q`.
        const QUIET = 0b0100;
        /// `Verbose`, via `--verbose` or `-v`.
        const VERBOSE = 0b1000;
    }
}

impl StandardFlags {
    /// The name, long name, and short name of each selected standard flag.
    pub(crate) fn selected(&self) -> impl Iterator<Item = (&'static str, &'static str, char)> {
        let selection = *self;
        [
            (StandardFlags::DRY_RUN, DRY_RUN_NAME, DRY_RUN_LONG, DRY_RUN_SHORT),
            (StandardFlags::HELP, HELP_NAME, HELP_LONG, HELP_SHORT),
            (StandardFlags::QUIET, QUIET_NAME, QUIET_LONG, QUIET_SHORT),
            (StandardFlags::VERBOSE, VERBOSE_NAME, VERBOSE_LONG, VERBOSE_SHORT),
        ]
        .into_iter()
        .filter(move |(flag, ..)| selection.contains(*flag))
        .map(|(_, name, long, short)| (name, long, short))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StandardFlags::empty(), vec![])]
    #[case(StandardFlags::HELP, vec!["Help"])]
    #[case(StandardFlags::VERBOSE | StandardFlags::DRY_RUN, vec!["DryRun", "Verbose"])]
    #[case(StandardFlags::all(), vec!["DryRun", "Help", "Quiet", "Verbose"])]
    fn selected(#[case] flags: StandardFlags, #[case] expected: Vec<&str>) {
        assert_eq!(
            flags
                .selected()
                .map(|(name, ..)| name)
                .collect::<Vec<&str>>(),
            expected
        );
    }
}
