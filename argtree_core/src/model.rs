/// How names are compared, both against each other and against the command line.
///
/// Case insensitive comparison folds via [`char::to_lowercase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NameComparison {
    /// `Noun` matches `noun`, `NOUN`, etc.
    #[default]
    CaseInsensitive,
    /// `Noun` only matches `Noun`.
    CaseSensitive,
}

impl NameComparison {
    /// Whether the two names are considered equal.
    pub fn equals(&self, left: &str, right: &str) -> bool {
        match self {
            NameComparison::CaseInsensitive => left
                .chars()
                .flat_map(char::to_lowercase)
                .eq(right.chars().flat_map(char::to_lowercase)),
            NameComparison::CaseSensitive => left == right,
        }
    }

    /// The canonical form of a name, such that `equals(a, b)` iff `normalize(a) == normalize(b)`.
    pub fn normalize(&self, name: &str) -> String {
        match self {
            NameComparison::CaseInsensitive => {
                name.chars().flat_map(char::to_lowercase).collect()
            }
            NameComparison::CaseSensitive => name.to_string(),
        }
    }
}

impl std::fmt::Display for NameComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
