use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming style applied to file and directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Upper,
    Lower,
    Pascal,
    Camel,
    Snake,
    Kebab,
    Title,
    Screaming,
}

impl Style {
    /// Transform `input` into this style: split it into words, adjust the
    /// case of each word, and re-join with the style's separator.
    ///
    /// If no words can be extracted (empty input, or delimiters only), the
    /// input is returned unchanged so callers can detect a no-op rename by
    /// simple equality.
    pub fn transform(self, input: &str) -> String {
        let words = split_words(input);
        if words.is_empty() {
            return input.to_string();
        }

        match self {
            Self::Upper => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join(" "),

            Self::Lower => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join(" "),

            Self::Pascal => words.iter().map(|w| capitalize_first(w)).collect::<String>(),

            Self::Camel => {
                let mut result = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        // An all-uppercase leading word is an acronym and
                        // keeps its casing ("XML parser" -> "XMLParser").
                        if word.chars().all(char::is_uppercase) {
                            result.push_str(word);
                        } else {
                            result.push_str(&lower_first(word));
                        }
                    } else {
                        result.push_str(&capitalize_first(word));
                    }
                }
                result
            },

            Self::Snake => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),

            Self::Kebab => words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("-"),

            Self::Title => words
                .iter()
                .map(|w| capitalize_first(w))
                .collect::<Vec<_>>()
                .join(" "),

            Self::Screaming => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Pascal => "pascal",
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Title => "title",
            Self::Screaming => "screaming",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a name into its semantic words.
///
/// Delimiters (`_`, `-`, `.`, `/`, `\` and whitespace) separate words and are
/// discarded. Between two non-delimiter characters a word boundary is
/// inserted on a digit transition ("file123" -> "file", "123"), at the end of
/// an acronym run ("HTTPServer" -> "HTTP", "Server"), or on a lower-to-upper
/// case change ("helloWorld" -> "hello", "World").
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_delimiter(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // A delimiter always flushes the buffer, so when the buffer is
        // non-empty the previous char is the buffer's last char.
        if !current.is_empty() && is_word_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | '/' | '\\') || c.is_whitespace()
}

fn is_word_boundary(prev: char, curr: char, next: Option<char>) -> bool {
    // Digit transition in either direction.
    if prev.is_ascii_digit() != curr.is_ascii_digit() {
        return true;
    }

    // Last letter of an acronym run starts the next word: the boundary sits
    // before an uppercase char that is followed by a lowercase one.
    if prev.is_uppercase() && curr.is_uppercase() && next.is_some_and(char::is_lowercase) {
        return true;
    }

    // Plain camelCase transition, restricted to the Latin script so names in
    // caseless or non-Latin alphabets pass through whole.
    prev.is_ascii_lowercase() && curr.is_ascii_uppercase()
}

/// Uppercase the first char of `s`, leaving the rest untouched ("NASA" stays
/// "NASA", never "Nasa").
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lowercase the first char of `s`, leaving the rest untouched.
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
