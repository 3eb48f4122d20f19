use crate::constant::{DEFAULT_FLAG_VALUE, KEY_SEPARATOR};
use crate::parser::{ArgumentNode, Body, CommandLineNode, FlagNode, VerbNode};

/// Flatten a parse tree into `(key, value)` pairs, in the order the tree was matched.
///
/// Keys are the names along the path of verbs leading to each flag or argument, joined by `:`.
/// A verb matched without any flags, sub-verb, or arguments yields its own path with the value `"True"`.
/// The values of a multi-argument all share the same key.
///
/// ### Example
/// ```
/// # use argtree_core as argtree;
/// use argtree::{collect, grammar, combinator::ParseState, tokenize};
/// use argtree::{CommandLineSpecification, VerbSpecification};
///
/// let specification = CommandLineSpecification::new()
///     .verb(
///         VerbSpecification::new(
///             "Remote",
///             CommandLineSpecification::new().argument("Name").unwrap(),
///         )
///         .unwrap(),
///     )
///     .unwrap();
/// let state = ParseState::new(tokenize(&["remote", "origin"]));
/// let result = grammar::command_line(&specification).parse(&state);
///
/// assert_eq!(
///     collect(&result.successes()[0].value),
///     vec![("Remote:Name".to_string(), "origin".to_string())]
/// );
/// ```
pub fn collect(node: &CommandLineNode) -> Vec<(String, String)> {
    let mut pairs = Vec::default();
    let mut path = Vec::default();
    collect_flags(&node.flags, &path, &mut pairs);
    collect_body(&node.body, &mut path, &mut pairs);
    pairs
}

fn key(path: &[&str], name: &str) -> String {
    path.iter()
        .copied()
        .chain(std::iter::once(name))
        .collect::<Vec<&str>>()
        .join(KEY_SEPARATOR)
}

fn collect_flags(flags: &[FlagNode], path: &[&str], pairs: &mut Vec<(String, String)>) {
    for flag in flags {
        pairs.push((key(path, flag.name()), flag.value().to_string()));
    }
}

fn collect_arguments(
    arguments: &[ArgumentNode],
    path: &[&str],
    pairs: &mut Vec<(String, String)>,
) {
    for argument in arguments {
        pairs.push((key(path, argument.name()), argument.value().to_string()));
    }
}

fn collect_body<'a>(body: &'a Body, path: &mut Vec<&'a str>, pairs: &mut Vec<(String, String)>) {
    match body {
        Body::Empty => {}
        Body::Verb(verb) => collect_verb(verb, path, pairs),
        Body::Arguments(arguments) => collect_arguments(arguments, path, pairs),
    }
}

fn collect_verb<'a>(verb: &'a VerbNode, path: &mut Vec<&'a str>, pairs: &mut Vec<(String, String)>) {
    if verb.is_bare() {
        pairs.push((key(path, &verb.name), DEFAULT_FLAG_VALUE.to_string()));
        return;
    }

    path.push(&verb.name);
    collect_flags(&verb.flags, path, pairs);
    collect_body(&verb.body, path, pairs);
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn switch(name: &str, value: &str) -> FlagNode {
        FlagNode::Switch {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn single(name: &str, value: &str) -> ArgumentNode {
        ArgumentNode::Single {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn verb(name: &str, flags: Vec<FlagNode>, body: Body) -> VerbNode {
        VerbNode {
            name: name.to_string(),
            flags,
            body,
        }
    }

    #[test]
    fn empty() {
        assert!(collect(&CommandLineNode::default()).is_empty());
    }

    #[test]
    fn flags_and_arguments() {
        let node = CommandLineNode {
            flags: vec![
                switch("Aflag", "True"),
                FlagNode::Valued {
                    name: "Cflag".to_string(),
                    value: "Cval".to_string(),
                },
            ],
            body: Body::Arguments(vec![single("Argument", "arg")]),
        };
        assert_eq!(
            collect(&node),
            pairs(&[("Aflag", "True"), ("Cflag", "Cval"), ("Argument", "arg")])
        );
    }

    #[test]
    fn multi_argument_shares_key() {
        let node = CommandLineNode {
            flags: vec![],
            body: Body::Arguments(vec![
                single("First", "a"),
                ArgumentNode::Multi {
                    name: "Rest".to_string(),
                    index: 0,
                    value: "b".to_string(),
                },
                ArgumentNode::Multi {
                    name: "Rest".to_string(),
                    index: 1,
                    value: "c".to_string(),
                },
            ]),
        };
        assert_eq!(
            collect(&node),
            pairs(&[("First", "a"), ("Rest", "b"), ("Rest", "c")])
        );
    }

    #[test]
    fn nested_verbs() {
        let node = CommandLineNode {
            flags: vec![switch("Verbose", "True")],
            body: Body::Verb(Box::new(verb(
                "Noun",
                vec![switch("Force", "True")],
                Body::Verb(Box::new(verb(
                    "Verb",
                    vec![],
                    Body::Arguments(vec![single("Argument", "arg")]),
                ))),
            ))),
        };
        assert_eq!(
            collect(&node),
            pairs(&[
                ("Verbose", "True"),
                ("Noun:Force", "True"),
                ("Noun:Verb:Argument", "arg"),
            ])
        );
    }

    #[test]
    fn bare_verb() {
        let node = CommandLineNode {
            flags: vec![],
            body: Body::Verb(Box::new(verb(
                "Noun",
                vec![],
                Body::Verb(Box::new(verb("Verb", vec![], Body::Empty))),
            ))),
        };
        assert_eq!(collect(&node), pairs(&[("Noun:Verb", "True")]));

        let node = CommandLineNode {
            flags: vec![],
            body: Body::Verb(Box::new(verb("Noun", vec![], Body::Empty))),
        };
        assert_eq!(collect(&node), pairs(&[("Noun", "True")]));
    }

    #[test]
    fn verb_with_empty_arguments() {
        let node = CommandLineNode {
            flags: vec![],
            body: Body::Verb(Box::new(verb("Noun", vec![], Body::Arguments(vec![])))),
        };
        assert_eq!(collect(&node), pairs(&[("Noun", "True")]));
    }
}
