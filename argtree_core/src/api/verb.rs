use crate::api::{CommandLineSpecification, SpecificationError, SpecificationName};
use crate::model::NameComparison;

/// A sub-command: a name matched as a literal argument, followed by its own nested command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbSpecification {
    name: SpecificationName,
    specification: CommandLineSpecification,
}

impl VerbSpecification {
    /// Create a verb, whose `name` is matched according to the `specification`'s [`NameComparison`].
    ///
    /// ### Example
    /// ```
    /// # use argtree_core as argtree;
    /// use argtree::{CommandLineSpecification, VerbSpecification};
    ///
    /// let verb = VerbSpecification::new(
    ///     "Remove",
    ///     CommandLineSpecification::new().argument("Path").unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert!(verb.name().matches("remove"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        specification: CommandLineSpecification,
    ) -> Result<Self, SpecificationError> {
        let comparison = specification.comparison();
        Ok(Self {
            name: SpecificationName::new(name, comparison)?,
            specification,
        })
    }

    /// The name of the verb, matched on the command line and used as a configuration key segment.
    pub fn name(&self) -> &SpecificationName {
        &self.name
    }

    /// The flags and commands following the verb's name.
    pub fn specification(&self) -> &CommandLineSpecification {
        &self.specification
    }

    /// How the verb's name is matched.
    pub fn comparison(&self) -> NameComparison {
        self.name.comparison()
    }
}
