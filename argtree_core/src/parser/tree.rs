/// A matched flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagNode {
    /// A boolean flag, carrying its fixed value.
    Switch {
        /// The flag's name.
        name: String,
        /// The flag's fixed value.
        value: String,
    },
    /// A flag which consumed the following argument.
    Valued {
        /// The flag's name.
        name: String,
        /// The consumed argument.
        value: String,
    },
}

impl FlagNode {
    /// The flag's name.
    pub fn name(&self) -> &str {
        match self {
            FlagNode::Switch { name, .. } | FlagNode::Valued { name, .. } => name,
        }
    }

    /// The flag's value.
    pub fn value(&self) -> &str {
        match self {
            FlagNode::Switch { value, .. } | FlagNode::Valued { value, .. } => value,
        }
    }
}

/// A matched positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentNode {
    /// A value matched by an argument.
    Single {
        /// The argument's name.
        name: String,
        /// The matched value.
        value: String,
    },
    /// One of the values matched by a multi-argument.
    Multi {
        /// The multi-argument's name.
        name: String,
        /// The zero-based position of this value among the multi-argument's values.
        index: usize,
        /// The matched value.
        value: String,
    },
}

impl ArgumentNode {
    /// The argument's name.
    pub fn name(&self) -> &str {
        match self {
            ArgumentNode::Single { name, .. } | ArgumentNode::Multi { name, .. } => name,
        }
    }

    /// The matched value.
    pub fn value(&self) -> &str {
        match self {
            ArgumentNode::Single { value, .. } | ArgumentNode::Multi { value, .. } => value,
        }
    }

    /// The position among a multi-argument's values.
    pub fn index(&self) -> Option<usize> {
        match self {
            ArgumentNode::Single { .. } => None,
            ArgumentNode::Multi { index, .. } => Some(*index),
        }
    }

    pub(crate) fn indexed(self, index: usize) -> Self {
        match self {
            ArgumentNode::Single { name, value } | ArgumentNode::Multi { name, value, .. } => {
                ArgumentNode::Multi { name, index, value }
            }
        }
    }
}

/// What followed the flags of a verb or command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Body {
    /// Nothing.
    #[default]
    Empty,
    /// A verb.
    Verb(Box<VerbNode>),
    /// Positional arguments, in order.
    Arguments(Vec<ArgumentNode>),
}

impl Body {
    /// Whether nothing (or an empty list of arguments) followed the flags.
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Empty => true,
            Body::Verb(_) => false,
            Body::Arguments(arguments) => arguments.is_empty(),
        }
    }
}

/// A matched verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbNode {
    /// The verb's name, as specified (not as typed).
    pub name: String,
    /// The flags following the verb, in the order they were matched.
    pub flags: Vec<FlagNode>,
    /// What followed the verb's flags.
    pub body: Body,
}

impl VerbNode {
    /// Whether the verb was matched by itself, without any flags, sub-verb, or arguments.
    pub fn is_bare(&self) -> bool {
        self.flags.is_empty() && self.body.is_empty()
    }
}

/// A matched command line: the root of a parse tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineNode {
    /// The flags, in the order they were matched.
    pub flags: Vec<FlagNode>,
    /// What followed the flags.
    pub body: Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_indexed() {
        let node = ArgumentNode::Single {
            name: "Items".to_string(),
            value: "a".to_string(),
        };
        assert_eq!(node.index(), None);

        let node = node.indexed(3);
        assert_eq!(node.name(), "Items");
        assert_eq!(node.value(), "a");
        assert_eq!(node.index(), Some(3));
    }

    #[test]
    fn verb_is_bare() {
        let mut verb = VerbNode {
            name: "Noun".to_string(),
            flags: Vec::default(),
            body: Body::Arguments(Vec::default()),
        };
        assert!(verb.is_bare());

        verb.flags.push(FlagNode::Switch {
            name: "Verbose".to_string(),
            value: "True".to_string(),
        });
        assert!(!verb.is_bare());
    }

    #[test]
    fn structural_equality() {
        let node = |values: &[&str]| CommandLineNode {
            flags: Vec::default(),
            body: Body::Arguments(
                values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| ArgumentNode::Multi {
                        name: "Items".to_string(),
                        index,
                        value: value.to_string(),
                    })
                    .collect(),
            ),
        };
        assert_eq!(node(&["a", "b"]), node(&["a", "b"]));
        assert_ne!(node(&["a", "b"]), node(&["b", "a"]));
    }
}
