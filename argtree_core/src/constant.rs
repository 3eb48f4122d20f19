pub(crate) const KEY_SEPARATOR: &str = ":";
pub(crate) const SENTINEL: &str = "--";
pub(crate) const DEFAULT_FLAG_VALUE: &str = "True";
pub(crate) const NO_ALTERNATIVE: &str = "No successful alternative";

pub(crate) const DRY_RUN_NAME: &str = "DryRun";
pub(crate) const DRY_RUN_LONG: &str = "dry-run";
pub(crate) const DRY_RUN_SHORT: char = 'n';
pub(crate) const HELP_NAME: &str = "Help";
pub(crate) const HELP_LONG: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const QUIET_NAME: &str = "Quiet";
pub(crate) const QUIET_LONG: &str = "quiet";
pub(crate) const QUIET_SHORT: char = 'q';
pub(crate) const VERBOSE_NAME: &str = "Verbose";
pub(crate) const VERBOSE_LONG: &str = "verbose";
pub(crate) const VERBOSE_SHORT: char = 'v';
