use crate::api::SpecificationError;
use crate::constant::KEY_SEPARATOR;
use crate::model::NameComparison;

/// The name of a flag, verb, or argument.
///
/// Names become segments of the configuration keys, so they may neither be empty nor contain `:`.
/// Two names are equal when they share a [`NameComparison`] and match under it.
#[derive(Debug, Clone)]
pub struct SpecificationName {
    value: String,
    comparison: NameComparison,
}

impl SpecificationName {
    /// Create a name, compared per `comparison`.
    pub fn new(
        value: impl Into<String>,
        comparison: NameComparison,
    ) -> Result<Self, SpecificationError> {
        let value = value.into();

        if value.is_empty() || value.contains(KEY_SEPARATOR) {
            return Err(SpecificationError::InvalidName(value));
        }

        Ok(Self { value, comparison })
    }

    /// The name, as specified.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// How this name is compared.
    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }

    /// Whether `candidate` (ex: a command line value) matches this name.
    pub fn matches(&self, candidate: &str) -> bool {
        self.comparison.equals(&self.value, candidate)
    }

    pub(crate) fn with_comparison(self, comparison: NameComparison) -> Self {
        Self {
            value: self.value,
            comparison,
        }
    }
}

impl PartialEq for SpecificationName {
    fn eq(&self, other: &Self) -> bool {
        self.comparison == other.comparison && self.matches(&other.value)
    }
}

impl Eq for SpecificationName {}

impl std::fmt::Display for SpecificationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
