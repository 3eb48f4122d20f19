use crate::tokens::Token;

/// A rendering of the raw command line, with a caret pointing at where parsing went wrong.
///
/// The raw arguments are projected onto a single line separated by spaces.
/// The caret points at the offending token, or just past the end of the projection when the input ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    arguments: Vec<String>,
    position: Option<(usize, usize)>,
}

impl ErrorContext {
    /// Point at the offending `token` within `arguments`.
    pub(crate) fn at(arguments: &[impl AsRef<str>], token: &Token) -> Self {
        Self {
            arguments: arguments.iter().map(|a| a.as_ref().to_string()).collect(),
            position: Some((token.origin().argument(), token.offset())),
        }
    }

    /// Point past the last of the `arguments`.
    pub(crate) fn end(arguments: &[impl AsRef<str>]) -> Self {
        Self {
            arguments: arguments.iter().map(|a| a.as_ref().to_string()).collect(),
            position: None,
        }
    }

    fn column(&self) -> usize {
        match self.position {
            Some((argument, offset)) if argument < self.arguments.len() => {
                let preceding: usize = self.arguments[..argument]
                    .iter()
                    .map(|a| a.chars().count() + 1)
                    .sum();
                let text = &self.arguments[argument];
                // The offset is in bytes; the caret column is in characters.
                let within = text
                    .char_indices()
                    .take_while(|(i, _)| *i < offset)
                    .count();
                preceding + within
            }
            _ => {
                let projection: usize = self.arguments.iter().map(|a| a.chars().count()).sum();
                projection + self.arguments.len().saturating_sub(1)
            }
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{:width$}^",
            self.arguments.join(" "),
            "",
            width = self.column()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::tokenize;

    fn at(arguments: &[&str], token: usize) -> ErrorContext {
        let tokens = tokenize(arguments);
        ErrorContext::at(arguments, &tokens[token])
    }

    #[test]
    fn error_context_end_empty() {
        let arguments: &[&str] = &[];
        assert_eq!(
            ErrorContext::end(arguments).to_string(),
            r#"
^"#
        );
    }

    #[test]
    fn error_context_end() {
        assert_eq!(
            ErrorContext::end(&["abc"]).to_string(),
            r#"abc
   ^"#
        );
        assert_eq!(
            ErrorContext::end(&["abc", "123"]).to_string(),
            r#"abc 123
       ^"#
        );
    }

    #[test]
    fn error_context_arguments() {
        assert_eq!(
            at(&["abc", "123"], 0).to_string(),
            r#"abc 123
^"#
        );
        assert_eq!(
            at(&["abc", "123"], 1).to_string(),
            r#"abc 123
    ^"#
        );
    }

    #[test]
    fn error_context_within_argument() {
        // -a -b -c
        assert_eq!(
            at(&["x", "-abc"], 3).to_string(),
            r#"x -abc
     ^"#
        );
        // --key, then value
        assert_eq!(
            at(&["key=value"], 1).to_string(),
            r#"key=value
    ^"#
        );
        assert_eq!(
            at(&["--key"], 0).to_string(),
            r#"--key
  ^"#
        );
    }

    #[test]
    fn error_context_multibyte() {
        assert_eq!(
            at(&["é=x"], 1).to_string(),
            r#"é=x
  ^"#
        );
    }
}
