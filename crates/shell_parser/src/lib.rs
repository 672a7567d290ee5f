//! Line tokenizer for the portfolio terminal.
//!
//! Only the small subset a portfolio prompt needs is implemented: whitespace splitting and
//! single/double quoting. There is no escaping and no failure mode; an unterminated quote simply
//! runs to the end of the line.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use shell_contract::ParsedCommand;

/// Splits `line` into tokens, honoring quoted substrings.
///
/// A `"` or `'` opens a quote that only the same character closes; the other quote character is
/// literal inside it. Quote characters are stripped from the token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote = None::<char>;

    for ch in line.chars() {
        match quote {
            Some(active) if ch == active => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Parses one input line into a lowercased command name and case-preserved arguments.
pub fn parse_command(line: &str) -> ParsedCommand {
    let mut tokens = tokenize(line).into_iter();
    let Some(first) = tokens.next() else {
        return ParsedCommand::default();
    };
    ParsedCommand {
        name: first.to_lowercase(),
        args: tokens.collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(
            tokenize("projects   list\tnow"),
            vec!["projects", "list", "now"]
        );
    }

    #[test]
    fn tokenizes_quoted_segments() {
        assert_eq!(tokenize("project \"my app\""), vec!["project", "my app"]);
        assert_eq!(tokenize("project 'my app'"), vec!["project", "my app"]);
    }

    #[test]
    fn other_quote_is_literal_inside_active_quote() {
        assert_eq!(tokenize("say \"it's fine\""), vec!["say", "it's fine"]);
    }

    #[test]
    fn quotes_join_adjacent_text() {
        assert_eq!(tokenize("a\"b c\"d"), vec!["ab cd"]);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        assert_eq!(tokenize("open \"unterminated  text"), vec!["open", "unterminated  text"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn parses_command_name_and_args() {
        assert_eq!(
            parse_command("Projects List now"),
            ParsedCommand {
                name: "projects".to_string(),
                args: vec!["List".to_string(), "now".to_string()],
            }
        );
    }

    #[test]
    fn parse_supports_quoted_args() {
        assert_eq!(
            parse_command("project \"my app\""),
            ParsedCommand {
                name: "project".to_string(),
                args: vec!["my app".to_string()],
            }
        );
    }

    #[test]
    fn parse_returns_empty_for_whitespace() {
        assert_eq!(parse_command("   "), ParsedCommand::default());
    }
}
