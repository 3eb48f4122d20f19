use std::collections::HashSet;
use thiserror::Error;

use crate::api::{
    ArgumentSpecification, FlagSpecification, MultiArgumentSpecification, Positional,
    SpecificationName, StandardFlags, VerbSpecification,
};
use crate::model::NameComparison;

/// A grammar definition error, raised by the offending builder call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecificationError {
    /// The name is empty or contains the key separator `:`.
    #[error("Specification error: '{0}' is not a valid name.")]
    InvalidName(String),

    /// The long name could never appear as a long flag on the command line.
    #[error("Specification error: '{0}' is not a valid long name.")]
    InvalidLongName(String),

    /// The short name could never appear as a short flag on the command line.
    #[error("Specification error: '{0}' is not a valid short name.")]
    InvalidShortName(char),

    /// The name is already used by a flag, verb, or argument of the same specification.
    #[error("Specification error: cannot duplicate the name '{0}'.")]
    DuplicateName(String),

    /// Verbs and arguments are mutually exclusive.
    #[error("Specification error: cannot add the verb '{0}' to a specification with arguments.")]
    VerbWithArguments(String),

    /// Verbs and arguments are mutually exclusive.
    #[error("Specification error: cannot add the argument '{0}' to a specification with verbs.")]
    ArgumentWithVerbs(String),

    /// A multi-argument must be the final positional parameter.
    #[error("Specification error: cannot add the argument '{0}' after the multi-argument '{1}'.")]
    ArgumentAfterMultiArgument(String, String),
}

/// What may follow the flags of a [`CommandLineSpecification`].
///
/// Verbs and arguments are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Commands {
    /// Nothing follows the flags.
    #[default]
    None,
    /// At most one of these verbs follows the flags.
    Verbs(Vec<VerbSpecification>),
    /// These positional parameters follow the flags, in order.
    Arguments(Vec<Positional>),
}

/// The grammar of a command line (or of the remainder of a command line, following a verb).
///
/// Specifications are immutable; each builder call consumes the specification and returns a new one.
/// Invalid additions are rejected immediately.
///
/// ### Example
/// ```
/// # use argtree_core as argtree;
/// use argtree::{CommandLineSpecification, FlagSpecification, VerbSpecification};
///
/// # fn main() -> Result<(), argtree::SpecificationError> {
/// let specification = CommandLineSpecification::new()
///     .flag(FlagSpecification::switch("Verbose", "verbose", Some('v'))?)?
///     .verb(VerbSpecification::new(
///         "Add",
///         CommandLineSpecification::new()
///             .argument("Source")?
///             .multi_argument("Targets")?,
///     )?)?;
///
/// assert!(specification.can_add_verb());
/// assert!(!specification.can_add_argument());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineSpecification {
    comparison: NameComparison,
    flags: Vec<FlagSpecification>,
    commands: Commands,
    names: HashSet<String>,
}

impl CommandLineSpecification {
    /// Create an empty specification, with case insensitive names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty specification, with names compared per `comparison`.
    pub fn with_comparison(comparison: NameComparison) -> Self {
        Self {
            comparison,
            ..Self::default()
        }
    }

    /// How the names of this specification are compared.
    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    /// The flags, in the order they were added.
    pub fn flags(&self) -> &[FlagSpecification] {
        &self.flags
    }

    /// The verbs or arguments following the flags.
    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    /// Whether a verb may be added (no arguments have been).
    pub fn can_add_verb(&self) -> bool {
        !matches!(self.commands, Commands::Arguments(_))
    }

    /// Whether an argument may be added (no verbs have been, and the final positional is not a multi-argument).
    pub fn can_add_argument(&self) -> bool {
        match &self.commands {
            Commands::None => true,
            Commands::Verbs(_) => false,
            Commands::Arguments(positionals) => {
                !matches!(positionals.last(), Some(Positional::Multi(_)))
            }
        }
    }

    /// Add a flag.
    ///
    /// Flags may appear in any order on the command line, before the verb or arguments.
    /// The flag's names are compared per this specification.
    pub fn flag(mut self, flag: FlagSpecification) -> Result<Self, SpecificationError> {
        let flag = flag.with_comparison(self.comparison);
        self.claim(flag.name())?;
        self.flags.push(flag);
        Ok(self)
    }

    /// Add a verb.
    ///
    /// Fails if this specification has arguments.
    pub fn verb(mut self, verb: VerbSpecification) -> Result<Self, SpecificationError> {
        if !self.can_add_verb() {
            return Err(SpecificationError::VerbWithArguments(
                verb.name().to_string(),
            ));
        }

        self.claim(verb.name())?;

        match self.commands {
            Commands::None => self.commands = Commands::Verbs(vec![verb]),
            Commands::Verbs(ref mut verbs) => verbs.push(verb),
            Commands::Arguments(_) => {
                unreachable!("internal error - verbs cannot be added alongside arguments")
            }
        };

        Ok(self)
    }

    /// Add an argument, matched positionally after any previously added arguments.
    ///
    /// Fails if this specification has verbs, or already ends with a multi-argument.
    pub fn argument(self, name: impl Into<String>) -> Result<Self, SpecificationError> {
        let argument = ArgumentSpecification::new(name)?;
        self.positional(Positional::Single(argument))
    }

    /// Add a multi-argument, matching every remaining bare argument.
    ///
    /// No further arguments may be added after it.
    pub fn multi_argument(self, name: impl Into<String>) -> Result<Self, SpecificationError> {
        let multi_argument = MultiArgumentSpecification::new(name)?;
        self.positional(Positional::Multi(multi_argument))
    }

    /// Add the selected conventional flags: `--dry-run/-n`, `--help/-h`, `--quiet/-q`, `--verbose/-v`.
    ///
    /// ### Example
    /// ```
    /// # use argtree_core as argtree;
    /// use argtree::{CommandLineSpecification, StandardFlags};
    ///
    /// let specification = CommandLineSpecification::new()
    ///     .standard_flags(StandardFlags::HELP | StandardFlags::VERBOSE)
    ///     .unwrap();
    ///
    /// assert_eq!(specification.flags().len(), 2);
    /// ```
    pub fn standard_flags(self, selection: StandardFlags) -> Result<Self, SpecificationError> {
        selection
            .selected()
            .try_fold(self, |specification, (name, long_name, short_name)| {
                specification.flag(FlagSpecification::switch(
                    name,
                    long_name,
                    Some(short_name),
                )?)
            })
    }

    fn positional(mut self, positional: Positional) -> Result<Self, SpecificationError> {
        let name = positional.name().to_string();

        match &self.commands {
            Commands::Verbs(_) => return Err(SpecificationError::ArgumentWithVerbs(name)),
            Commands::Arguments(positionals) => {
                if let Some(Positional::Multi(multi_argument)) = positionals.last() {
                    return Err(SpecificationError::ArgumentAfterMultiArgument(
                        name,
                        multi_argument.name().to_string(),
                    ));
                }
            }
            Commands::None => {}
        };

        self.claim(positional.name())?;

        match self.commands {
            Commands::None => self.commands = Commands::Arguments(vec![positional]),
            Commands::Arguments(ref mut positionals) => positionals.push(positional),
            Commands::Verbs(_) => {
                unreachable!("internal error - arguments cannot be added alongside verbs")
            }
        };

        Ok(self)
    }

    fn claim(&mut self, name: &SpecificationName) -> Result<(), SpecificationError> {
        if self
            .names
            .insert(self.comparison.normalize(name.as_str()))
        {
            Ok(())
        } else {
            Err(SpecificationError::DuplicateName(name.to_string()))
        }
    }
}
