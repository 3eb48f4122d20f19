//! Parsers recognizing the elements of a [`CommandLineSpecification`].
//!
//! Each function builds a [`Parser`] from (part of) a specification.
//! Parsers for a single flag, argument, or verb consume at least one token whenever they succeed.
use crate::api::{
    ArgumentSpecification, Commands, CommandLineSpecification, FlagKind, FlagSpecification,
    MultiArgumentSpecification, Positional, VerbSpecification,
};
use crate::combinator::{all, any, zero_or_more, zero_or_one, ParseResult, Parser};
use crate::model::NameComparison;
use crate::parser::{ArgumentNode, Body, CommandLineNode, FlagNode, VerbNode};
use crate::tokens::TokenKind;

fn bare_argument(expected: String) -> Parser<String> {
    Parser::new(move |state| match state.accept(TokenKind::Argument, |_| true) {
        Some((token, next)) => {
            ParseResult::success(token.value().unwrap_or_default().to_string(), next)
        }
        None => ParseResult::failure(format!("Expected {expected}."), state.clone()),
    })
}

/// Match one bare argument, as the value of `specification`.
pub fn argument(specification: &ArgumentSpecification) -> Parser<ArgumentNode> {
    let name = specification.name().to_string();
    bare_argument(format!("argument '{name}'")).map(move |value| ArgumentNode::Single {
        name: name.clone(),
        value,
    })
}

/// Match one bare argument equal to `literal`.
pub fn literal_argument(literal: impl Into<String>, comparison: NameComparison) -> Parser<String> {
    let literal = literal.into();
    Parser::new(move |state| {
        match state.accept(TokenKind::Argument, |token| {
            token
                .value()
                .is_some_and(|value| comparison.equals(&literal, value))
        }) {
            Some((token, next)) => {
                ParseResult::success(token.value().unwrap_or_default().to_string(), next)
            }
            None => ParseResult::failure(format!("Expected '{literal}'."), state.clone()),
        }
    })
}

/// Match every remaining bare argument (possibly none), as the indexed values of `specification`.
pub fn multi_argument(specification: &MultiArgumentSpecification) -> Parser<Vec<ArgumentNode>> {
    let name = specification.name().to_string();
    let single = bare_argument(format!("argument '{name}'")).map(move |value| {
        ArgumentNode::Single {
            name: name.clone(),
            value,
        }
    });
    zero_or_more(single).map(|nodes| {
        nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| node.indexed(index))
            .collect()
    })
}

/// Match each of the `positionals` in order.
///
/// A multi-argument is only permitted as the final positional; anywhere else it never matches.
pub fn argument_list(positionals: &[Positional]) -> Parser<Vec<ArgumentNode>> {
    let single = |positional: &Positional| match positional {
        Positional::Single(specification) => argument(specification),
        Positional::Multi(specification) => Parser::fail(format!(
            "Multi-argument '{}' must be the final argument.",
            specification.name()
        )),
    };

    match positionals.split_last() {
        Some((Positional::Multi(specification), leading)) => {
            let trailing = multi_argument(specification);
            all(leading.iter().map(single)).bind_map(
                move |_| trailing.clone(),
                |leading, trailing| leading.iter().cloned().chain(trailing).collect(),
            )
        }
        _ => all(positionals.iter().map(single)),
    }
}

/// Match `specification` via its long name or short name.
///
/// Flags which take a value also match the following bare argument.
pub fn flag(specification: &FlagSpecification) -> Parser<FlagNode> {
    let name = specification.name().to_string();
    let long = {
        let specification = specification.clone();
        Parser::new(move |state| {
            match state.accept(TokenKind::LongFlag, |token| {
                token
                    .key()
                    .is_some_and(|key| specification.matches_long(key))
            }) {
                Some((_, next)) => ParseResult::success((), next),
                None => ParseResult::failure(
                    format!("Expected flag '--{}'.", specification.long_name()),
                    state.clone(),
                ),
            }
        })
    };
    let marker = match specification.short_name() {
        Some(short) => long.or(Parser::new(move |state| {
            match state.accept(TokenKind::ShortFlag, |token| token.flag() == Some(short)) {
                Some((_, next)) => ParseResult::success((), next),
                None => ParseResult::failure(format!("Expected flag '-{short}'."), state.clone()),
            }
        })),
        None => long,
    };

    match specification.kind() {
        FlagKind::Switch(value) => {
            let value = value.clone();
            marker.map(move |_| FlagNode::Switch {
                name: name.clone(),
                value: value.clone(),
            })
        }
        FlagKind::Valued => {
            let value = bare_argument(format!("a value for flag '{name}'"));
            marker.bind_map(
                move |_| value.clone(),
                move |_, value| FlagNode::Valued {
                    name: name.clone(),
                    value,
                },
            )
        }
    }
}

/// Match any of the `specifications`, in any order, any number of times.
pub fn flags(specifications: &[FlagSpecification]) -> Parser<Vec<FlagNode>> {
    zero_or_more(any(specifications.iter().map(flag)))
}

/// Match the verb's name, followed by its flags and then its verb or arguments (if any).
pub fn verb(specification: &VerbSpecification) -> Parser<VerbNode> {
    let name = specification.name().to_string();
    let flags = flags(specification.specification().flags());
    let body = body(specification.specification().commands());

    literal_argument(name.clone(), specification.comparison())
        .bind(move |_| flags.clone())
        .bind_map(
            move |_| body.clone(),
            move |flags, body| VerbNode {
                name: name.clone(),
                flags: flags.clone(),
                body,
            },
        )
}

/// Match at most one of the `specifications`.
pub fn verbs(specifications: &[VerbSpecification]) -> Parser<Vec<VerbNode>> {
    zero_or_one(any(specifications.iter().map(verb)))
}

fn body(commands: &Commands) -> Parser<Body> {
    match commands {
        Commands::None => Parser::succeed(Body::Empty),
        Commands::Verbs(specifications) => verbs(specifications).map(|selected| {
            match selected.into_iter().next() {
                Some(verb) => Body::Verb(Box::new(verb)),
                None => Body::Empty,
            }
        }),
        Commands::Arguments(positionals) => argument_list(positionals).map(Body::Arguments),
    }
}

/// Match the end of the input, or the `--` sentinel (which is consumed).
pub fn end_of_input() -> Parser<()> {
    Parser::new(|state| match state.accept(TokenKind::Sentinel, |_| true) {
        Some((_, next)) => ParseResult::success((), next),
        None => match state.peek() {
            None => ParseResult::success((), state.clone()),
            Some(token) => {
                ParseResult::failure(format!("Unexpected token '{token}'."), state.clone())
            }
        },
    })
}

/// Match a whole command line: its flags, its verb or arguments (if any), and then the end of input.
pub fn command_line(specification: &CommandLineSpecification) -> Parser<CommandLineNode> {
    let body = body(specification.commands());
    let end = end_of_input();

    flags(specification.flags())
        .bind_map(
            move |_| body.clone(),
            |flags, body| CommandLineNode {
                flags: flags.clone(),
                body,
            },
        )
        .bind_map(move |_| end.clone(), |node, _| node.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{ParseState, Success};
    use crate::tokens::tokenize;
    use rstest::rstest;

    fn state(arguments: &[&str]) -> ParseState {
        ParseState::new(tokenize(arguments))
    }

    fn messages<T>(result: &ParseResult<T>) -> Vec<&str> {
        result
            .failures()
            .iter()
            .map(|f| f.message.as_str())
            .collect()
    }

    fn values<T: Clone>(result: &ParseResult<T>) -> Vec<T> {
        result.successes().iter().map(|s| s.value.clone()).collect()
    }

    fn single(name: &str, value: &str) -> ArgumentNode {
        ArgumentNode::Single {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn multi(name: &str, index: usize, value: &str) -> ArgumentNode {
        ArgumentNode::Multi {
            name: name.to_string(),
            index,
            value: value.to_string(),
        }
    }

    fn switch(name: &str, value: &str) -> FlagNode {
        FlagNode::Switch {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn valued(name: &str, value: &str) -> FlagNode {
        FlagNode::Valued {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn argument_match() {
        let specification = ArgumentSpecification::new("Argument").unwrap();
        let result = argument(&specification).parse(&state(&["value", "rest"]));
        assert_eq!(values(&result), vec![single("Argument", "value")]);
        assert_eq!(result.successes()[0].state.position(), 1);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["--flag"])]
    #[case(vec!["-f"])]
    #[case(vec!["--"])]
    fn argument_mismatch(#[case] arguments: Vec<&str>) {
        let specification = ArgumentSpecification::new("Argument").unwrap();
        let result = argument(&specification).parse(&state(&arguments));
        assert_eq!(messages(&result), vec!["Expected argument 'Argument'."]);
    }

    #[rstest]
    #[case(NameComparison::CaseInsensitive, "noun", true)]
    #[case(NameComparison::CaseInsensitive, "NOUN", true)]
    #[case(NameComparison::CaseSensitive, "Noun", true)]
    #[case(NameComparison::CaseSensitive, "noun", false)]
    #[case(NameComparison::CaseInsensitive, "verb", false)]
    fn literal(#[case] comparison: NameComparison, #[case] input: &str, #[case] expected: bool) {
        let result = literal_argument("Noun", comparison).parse(&state(&[input]));
        assert_eq!(result.is_success(), expected);

        if !expected {
            assert_eq!(messages(&result), vec!["Expected 'Noun'."]);
        }
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["a"], vec!["a"])]
    #[case(vec!["a", "b", "c"], vec!["a", "b", "c"])]
    #[case(vec!["a", "--flag", "c"], vec!["a"])]
    fn multi_argument_match(#[case] arguments: Vec<&str>, #[case] expected: Vec<&str>) {
        let specification = MultiArgumentSpecification::new("Items").unwrap();
        let result = multi_argument(&specification).parse(&state(&arguments));
        assert_eq!(
            values(&result),
            vec![expected
                .iter()
                .enumerate()
                .map(|(index, value)| multi("Items", index, value))
                .collect::<Vec<ArgumentNode>>()]
        );
    }

    #[test]
    fn argument_list_empty() {
        let input = state(&["a"]);
        let result = argument_list(&[]).parse(&input);
        assert_eq!(result.successes(), &[Success::new(vec![], input.clone())]);
    }

    #[test]
    fn argument_list_singles() {
        let positionals = vec![
            Positional::Single(ArgumentSpecification::new("First").unwrap()),
            Positional::Single(ArgumentSpecification::new("Second").unwrap()),
        ];
        let result = argument_list(&positionals).parse(&state(&["a", "b", "c"]));
        assert_eq!(
            values(&result),
            vec![vec![single("First", "a"), single("Second", "b")]]
        );

        let result = argument_list(&positionals).parse(&state(&["a"]));
        assert_eq!(messages(&result), vec!["Expected argument 'Second'."]);
    }

    #[test]
    fn argument_list_multi_not_last() {
        let positionals = vec![
            Positional::Multi(MultiArgumentSpecification::new("Rest").unwrap()),
            Positional::Single(ArgumentSpecification::new("Last").unwrap()),
        ];
        let result = argument_list(&positionals).parse(&state(&["a", "b"]));
        assert!(!result.is_success());
        assert_eq!(
            messages(&result),
            vec!["Multi-argument 'Rest' must be the final argument."]
        );
    }

    #[rstest]
    #[case(vec!["a"], vec![])]
    #[case(vec!["a", "b"], vec!["b"])]
    #[case(vec!["a", "b", "c"], vec!["b", "c"])]
    fn argument_list_trailing_multi(#[case] arguments: Vec<&str>, #[case] trailing: Vec<&str>) {
        let positionals = vec![
            Positional::Single(ArgumentSpecification::new("First").unwrap()),
            Positional::Multi(MultiArgumentSpecification::new("Rest").unwrap()),
        ];
        let result = argument_list(&positionals).parse(&state(&arguments));
        let mut expected = vec![single("First", "a")];
        expected.extend(
            trailing
                .iter()
                .enumerate()
                .map(|(index, value)| multi("Rest", index, value)),
        );
        assert_eq!(values(&result), vec![expected]);
    }

    #[rstest]
    #[case(vec!["--verbose"])]
    #[case(vec!["--VERBOSE"])]
    #[case(vec!["/verbose"])]
    #[case(vec!["-v"])]
    fn flag_switch(#[case] arguments: Vec<&str>) {
        let specification = FlagSpecification::switch("Verbose", "verbose", Some('v')).unwrap();
        let result = flag(&specification).parse(&state(&arguments));
        assert_eq!(values(&result), vec![switch("Verbose", "True")]);
        assert!(result.successes()[0].state.is_empty());
    }

    #[test]
    fn flag_switch_fixed_value() {
        let specification =
            FlagSpecification::new("Bflag", "bflag", Some('b'), FlagKind::Switch("Bval".into()))
                .unwrap();
        let result = flag(&specification).parse(&state(&["-b"]));
        assert_eq!(values(&result), vec![switch("Bflag", "Bval")]);
    }

    #[rstest]
    #[case(vec!["--output", "file"])]
    #[case(vec!["-o", "file"])]
    #[case(vec!["output=file"])]
    fn flag_valued(#[case] arguments: Vec<&str>) {
        let specification = FlagSpecification::valued("Output", "output", Some('o')).unwrap();
        let result = flag(&specification).parse(&state(&arguments));
        assert_eq!(values(&result), vec![valued("Output", "file")]);
    }

    #[test]
    fn flag_valued_missing_value() {
        let specification = FlagSpecification::valued("Output", "output", Some('o')).unwrap();
        let result = flag(&specification).parse(&state(&["--output", "--verbose"]));
        assert_eq!(
            messages(&result),
            vec!["Expected a value for flag 'Output'."]
        );
    }

    #[test]
    fn flag_mismatch() {
        let specification = FlagSpecification::switch("Verbose", "verbose", Some('v')).unwrap();
        let result = flag(&specification).parse(&state(&["-x"]));
        assert_eq!(
            messages(&result),
            vec!["Expected flag '--verbose'.", "Expected flag '-v'."]
        );

        let specification = FlagSpecification::switch("Verbose", "verbose", None).unwrap();
        let result = flag(&specification).parse(&state(&["-v"]));
        assert_eq!(messages(&result), vec!["Expected flag '--verbose'."]);
    }

    #[test]
    fn flags_any_order_repeated() {
        let specifications = vec![
            FlagSpecification::switch("Aflag", "aflag", Some('a')).unwrap(),
            FlagSpecification::valued("Cflag", "cflag", Some('c')).unwrap(),
        ];
        let result =
            flags(&specifications).parse(&state(&["-c", "1", "-a", "--cflag", "2", "rest"]));
        assert_eq!(
            values(&result),
            vec![vec![
                valued("Cflag", "1"),
                switch("Aflag", "True"),
                valued("Cflag", "2"),
            ]]
        );
        assert_eq!(result.successes()[0].state.position(), 5);
    }

    #[test]
    fn flags_ambiguous() {
        let specifications = vec![
            FlagSpecification::switch("First", "first", Some('x')).unwrap(),
            FlagSpecification::switch("Second", "second", Some('x')).unwrap(),
        ];
        let result = flags(&specifications).parse(&state(&["-x"]));
        assert_eq!(
            values(&result),
            vec![
                vec![switch("First", "True")],
                vec![switch("Second", "True")]
            ]
        );
    }

    #[test]
    fn verb_nested() {
        let specification = VerbSpecification::new(
            "Noun",
            CommandLineSpecification::new()
                .verb(
                    VerbSpecification::new(
                        "Verb",
                        CommandLineSpecification::new().argument("Argument").unwrap(),
                    )
                    .unwrap(),
                )
                .unwrap(),
        )
        .unwrap();
        let result = verb(&specification).parse(&state(&["noun", "verb", "arg"]));
        let expected = VerbNode {
            name: "Noun".to_string(),
            flags: vec![],
            body: Body::Verb(Box::new(VerbNode {
                name: "Verb".to_string(),
                flags: vec![],
                body: Body::Arguments(vec![single("Argument", "arg")]),
            })),
        };
        // The nested verb is optional, so the bare 'noun' is also a (shorter) success.
        assert_eq!(
            values(&result),
            vec![
                expected,
                VerbNode {
                    name: "Noun".to_string(),
                    flags: vec![],
                    body: Body::Empty,
                }
            ]
        );
    }

    #[test]
    fn verb_flags() {
        let specification = VerbSpecification::new(
            "Build",
            CommandLineSpecification::new()
                .flag(FlagSpecification::switch("Release", "release", Some('r')).unwrap())
                .unwrap(),
        )
        .unwrap();
        let result = verb(&specification).parse(&state(&["build", "-r"]));
        assert_eq!(
            values(&result),
            vec![VerbNode {
                name: "Build".to_string(),
                flags: vec![switch("Release", "True")],
                body: Body::Empty,
            }]
        );
    }

    #[test]
    fn verbs_none() {
        let input = state(&["other"]);
        let specifications =
            vec![VerbSpecification::new("Noun", CommandLineSpecification::new()).unwrap()];
        let result = verbs(&specifications).parse(&input);
        assert_eq!(result.successes(), &[Success::new(vec![], input.clone())]);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec!["--"], 1)]
    #[case(vec!["--", "rest"], 1)]
    fn end_of_input_match(#[case] arguments: Vec<&str>, #[case] position: usize) {
        let result = end_of_input().parse(&state(&arguments));
        assert_eq!(result.successes().len(), 1);
        assert_eq!(result.successes()[0].state.position(), position);
    }

    #[rstest]
    #[case(vec!["leftover"], "Unexpected token 'leftover'.")]
    #[case(vec!["-x"], "Unexpected token '-x'.")]
    #[case(vec!["--option"], "Unexpected token '--option'.")]
    fn end_of_input_leftover(#[case] arguments: Vec<&str>, #[case] expected: &str) {
        let result = end_of_input().parse(&state(&arguments));
        assert_eq!(messages(&result), vec![expected]);
    }

    #[test]
    fn command_line_arguments() {
        let specification = CommandLineSpecification::new()
            .flag(FlagSpecification::switch("Verbose", "verbose", Some('v')).unwrap())
            .unwrap()
            .argument("Argument")
            .unwrap();
        let result = command_line(&specification).parse(&state(&["-v", "arg"]));
        assert_eq!(
            values(&result),
            vec![CommandLineNode {
                flags: vec![switch("Verbose", "True")],
                body: Body::Arguments(vec![single("Argument", "arg")]),
            }]
        );
    }

    #[test]
    fn command_line_verbs_disambiguated() {
        let specification = CommandLineSpecification::new()
            .verb(VerbSpecification::new("Noun", CommandLineSpecification::new()).unwrap())
            .unwrap();
        let result = command_line(&specification).parse(&state(&["noun"]));
        assert_eq!(
            values(&result),
            vec![CommandLineNode {
                flags: vec![],
                body: Body::Verb(Box::new(VerbNode {
                    name: "Noun".to_string(),
                    flags: vec![],
                    body: Body::Empty,
                })),
            }]
        );

        let result = command_line(&specification).parse(&state(&[]));
        assert_eq!(values(&result), vec![CommandLineNode::default()]);
    }

    #[test]
    fn command_line_leftover() {
        let specification = CommandLineSpecification::new().argument("Argument").unwrap();
        let result = command_line(&specification).parse(&state(&["a", "b"]));
        assert!(!result.is_success());
        assert_eq!(messages(&result), vec!["Unexpected token 'b'."]);
        assert_eq!(result.failures()[0].state.position(), 1);
    }

    #[test]
    fn command_line_sentinel() {
        let specification = CommandLineSpecification::new().multi_argument("Items").unwrap();
        let result = command_line(&specification).parse(&state(&["a", "--", "-b", "c"]));
        assert_eq!(
            values(&result),
            vec![CommandLineNode {
                flags: vec![],
                body: Body::Arguments(vec![multi("Items", 0, "a")]),
            }]
        );
        assert_eq!(result.successes()[0].state.position(), 2);
    }
}
