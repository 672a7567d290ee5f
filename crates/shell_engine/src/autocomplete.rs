//! First-token autocomplete with longest-common-prefix partial completion.

/// Maximum number of suggestions surfaced for an ambiguous prefix.
pub const MAX_SUGGESTIONS: usize = 6;

/// Result of completing the prompt input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completion {
    /// New prompt value.
    pub value: String,
    /// Candidates to display. Empty unless the prefix is ambiguous.
    pub suggestions: Vec<String>,
}

impl Completion {
    fn unchanged(input: &str) -> Self {
        Self {
            value: input.to_string(),
            suggestions: Vec::new(),
        }
    }
}

/// Completes the command token in `input` against `targets`.
///
/// Only the first token completes: blank input or input containing whitespace after trimming is
/// returned unchanged. A unique match gains a trailing space; several matches complete to their
/// common prefix when that prefix is longer than what was typed.
pub fn complete(input: &str, targets: &[&str]) -> Completion {
    let token = input.trim();
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Completion::unchanged(input);
    }

    let query = token.to_lowercase();
    let matches = targets
        .iter()
        .copied()
        .filter(|target| target.starts_with(&query))
        .collect::<Vec<_>>();

    match matches.as_slice() {
        [] => Completion::unchanged(input),
        [only] => Completion {
            value: format!("{only} "),
            suggestions: Vec::new(),
        },
        _ => {
            let prefix = longest_common_prefix(&matches);
            let value = if prefix.chars().count() > token.chars().count() {
                prefix
            } else {
                input.to_string()
            };
            Completion {
                value,
                suggestions: matches
                    .iter()
                    .take(MAX_SUGGESTIONS)
                    .map(|item| item.to_string())
                    .collect(),
            }
        }
    }
}

/// Longest prefix shared by every value, shrinking the first value one character at a time.
pub fn longest_common_prefix(values: &[&str]) -> String {
    let Some((first, rest)) = values.split_first() else {
        return String::new();
    };
    let mut prefix = first.to_string();
    for value in rest {
        while !value.starts_with(prefix.as_str()) {
            prefix.pop();
        }
    }
    prefix
}
