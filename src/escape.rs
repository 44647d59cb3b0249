use deunicode::deunicode_with_tofu;

/// Escaping strategy used by a [`SlugStage`](crate::SlugStage). The default
/// implementation covers the usual case; hosts with bespoke normalization
/// rules can swap in their own.
pub trait SlugEscaper: Send + Sync {
    fn escape(&self, input: &str) -> String;
}

#[derive(Default, Clone)]
pub struct DefaultSlugEscaper;

impl SlugEscaper for DefaultSlugEscaper {
    fn escape(&self, input: &str) -> String {
        escape(input)
    }
}

/// Normalize `input` into URL-safe form: transliterate to ASCII (characters
/// with no approximation are dropped), collapse each run of non-word
/// characters to a single separator, trim, lowercase, and hyphenate.
///
/// The result matches `[a-z0-9_-]*` and carries no leading or trailing
/// hyphen. An empty result is possible and valid.
pub fn escape(input: &str) -> String {
    let ascii = deunicode_with_tofu(input, "");

    let mut spaced = String::with_capacity(ascii.len());
    let mut in_separator = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            spaced.push(ch.to_ascii_lowercase());
            in_separator = false;
        } else if !in_separator {
            // Separator runs are collapsed here, so trimming below only ever
            // sees a single space at either edge.
            spaced.push(' ');
            in_separator = true;
        }
    }

    spaced
        .trim()
        .chars()
        .map(|ch| if ch == ' ' { '-' } else { ch })
        .collect()
}
