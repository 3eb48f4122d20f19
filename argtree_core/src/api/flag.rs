use crate::api::{SpecificationError, SpecificationName};
use crate::constant::DEFAULT_FLAG_VALUE;
use crate::model::NameComparison;
use crate::tokens::{is_long_key, is_short_flag};

/// What a flag produces when it is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagKind {
    /// A boolean flag: its presence produces the fixed value.
    Switch(String),
    /// The flag consumes the following bare argument as its value.
    Valued,
}

impl Default for FlagKind {
    fn default() -> Self {
        FlagKind::Switch(DEFAULT_FLAG_VALUE.to_string())
    }
}

/// A flag parameter, matched via `--long_name` (or `/long_name`) and optionally `-s`.
///
/// ### Example
/// ```
/// # use argtree_core as argtree;
/// use argtree::{FlagKind, FlagSpecification};
///
/// let verbose = FlagSpecification::switch("Verbose", "verbose", Some('v')).unwrap();
/// let output = FlagSpecification::valued("Output", "output", Some('o')).unwrap();
/// let color = FlagSpecification::new("Color", "no-color", None, FlagKind::Switch("never".into())).unwrap();
///
/// assert_eq!(verbose.kind(), &FlagKind::Switch("True".to_string()));
/// assert_eq!(output.kind(), &FlagKind::Valued);
/// assert_eq!(color.long_name(), "no-color");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpecification {
    name: SpecificationName,
    long_name: String,
    short_name: Option<char>,
    kind: FlagKind,
}

impl FlagSpecification {
    /// Create a flag.
    ///
    /// The `long_name` must be producible on the command line (ex: `dry-run`, `section:key`).
    /// The `short_name`, if specified, must be a letter or digit.
    pub fn new(
        name: impl Into<String>,
        long_name: impl Into<String>,
        short_name: Option<char>,
        kind: FlagKind,
    ) -> Result<Self, SpecificationError> {
        let name = SpecificationName::new(name, NameComparison::default())?;
        let long_name = long_name.into();

        if !is_long_key(&long_name) {
            return Err(SpecificationError::InvalidLongName(long_name));
        }

        if let Some(short) = short_name {
            if !is_short_flag(short) {
                return Err(SpecificationError::InvalidShortName(short));
            }
        }

        Ok(Self {
            name,
            long_name,
            short_name,
            kind,
        })
    }

    /// Create a boolean flag, which produces `"True"` when present.
    pub fn switch(
        name: impl Into<String>,
        long_name: impl Into<String>,
        short_name: Option<char>,
    ) -> Result<Self, SpecificationError> {
        Self::new(name, long_name, short_name, FlagKind::default())
    }

    /// Create a flag which takes the following argument as its value.
    pub fn valued(
        name: impl Into<String>,
        long_name: impl Into<String>,
        short_name: Option<char>,
    ) -> Result<Self, SpecificationError> {
        Self::new(name, long_name, short_name, FlagKind::Valued)
    }

    /// The name of the flag, used as its configuration key.
    pub fn name(&self) -> &SpecificationName {
        &self.name
    }

    /// The long name, matched as `--long_name`.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// The short name, matched as `-s`.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// What this flag produces.
    pub fn kind(&self) -> &FlagKind {
        &self.kind
    }

    /// Whether the long flag `key` selects this flag.
    pub fn matches_long(&self, key: &str) -> bool {
        self.name.comparison().equals(&self.long_name, key)
    }

    /// Whether the short flag `flag` selects this flag.
    /// Short flags are always case sensitive.
    pub fn matches_short(&self, flag: char) -> bool {
        self.short_name == Some(flag)
    }

    pub(crate) fn with_comparison(self, comparison: NameComparison) -> Self {
        Self {
            name: self.name.with_comparison(comparison),
            ..self
        }
    }
}
