use crate::api::{SpecificationError, SpecificationName};
use crate::model::NameComparison;

/// A positional parameter matching exactly one bare argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpecification {
    name: SpecificationName,
}

impl ArgumentSpecification {
    /// Create an argument.
    pub fn new(name: impl Into<String>) -> Result<Self, SpecificationError> {
        Ok(Self {
            name: SpecificationName::new(name, NameComparison::default())?,
        })
    }

    /// The name of the argument, used as its configuration key.
    pub fn name(&self) -> &SpecificationName {
        &self.name
    }
}

/// A positional parameter matching all (zero or more) of the trailing bare arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiArgumentSpecification {
    name: SpecificationName,
}

impl MultiArgumentSpecification {
    /// Create a multi-argument.
    pub fn new(name: impl Into<String>) -> Result<Self, SpecificationError> {
        Ok(Self {
            name: SpecificationName::new(name, NameComparison::default())?,
        })
    }

    /// The name of the multi-argument, used as the configuration key of each of its values.
    pub fn name(&self) -> &SpecificationName {
        &self.name
    }
}

/// Either kind of positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Positional {
    /// See [`ArgumentSpecification`].
    Single(ArgumentSpecification),
    /// See [`MultiArgumentSpecification`]; only ever the final positional.
    Multi(MultiArgumentSpecification),
}

impl Positional {
    /// The name of the positional parameter.
    pub fn name(&self) -> &SpecificationName {
        match self {
            Positional::Single(argument) => argument.name(),
            Positional::Multi(multi_argument) => multi_argument.name(),
        }
    }
}
