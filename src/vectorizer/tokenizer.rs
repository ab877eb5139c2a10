use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::TokenizeError;

/// Splits raw text into an ordered sequence of normalized tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same sequence. The model may call `tokenize` from many threads at once.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;
}

/// Any matching closure can be injected as a tokenizer.
impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<String>, TokenizeError> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        self(text)
    }
}

/// Default tokenizer
/// Every char that is not a letter (`L*`) or decimal digit (`Nd`) is a
/// boundary. Letters are lowercased one char to one char. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut token = String::new();
        for c in text.chars() {
            if is_token_char(c) {
                token.push(lower_char(c));
            } else if !token.is_empty() {
                tokens.push(std::mem::take(&mut token));
            }
        }
        if !token.is_empty() {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[inline]
fn is_token_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// first char of the full lowercase mapping, e.g. 'İ' -> 'i'
#[inline]
fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        DefaultTokenizer.tokenize(text).unwrap()
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(tok("hello, world! world?"), vec!["hello", "world", "world"]);
        assert_eq!(tok("Go! GO! go!"), vec!["go", "go", "go"]);
    }

    #[test]
    fn empty_and_separator_only_input() {
        assert!(tok("").is_empty());
        assert!(tok("     ").is_empty());
        assert!(tok("!@#$%^&*()_+=-{}[]:;<>,.?/").is_empty());
    }

    #[test]
    fn whitespace_and_control_chars_are_boundaries() {
        assert_eq!(tok("tab\tseparated\nwords"), vec!["tab", "separated", "words"]);
        assert_eq!(tok("NULL\x00BYTE"), vec!["null", "byte"]);
        assert_eq!(tok("\x01\x02\x03Test\x04\x05"), vec!["test"]);
    }

    #[test]
    fn unicode_letters_and_digits_are_kept() {
        assert_eq!(tok("こんにちは 世界"), vec!["こんにちは", "世界"]);
        assert_eq!(tok("Straße 12345"), vec!["straße", "12345"]);
        assert_eq!(tok("Emoji 🚀🔥💡"), vec!["emoji"]);
        assert_eq!(tok("٣٤ Ωμέγα"), vec!["٣٤", "ωμέγα"]);
    }

    #[test]
    fn non_decimal_numbers_are_boundaries() {
        assert_eq!(tok("x² ½ Ⅻ"), vec!["x"]);
        assert_eq!(tok("area5²cm"), vec!["area5", "cm"]);
    }

    #[test]
    fn lowercasing_keeps_one_char_per_char() {
        assert_eq!(tok("İ"), vec!["i"]);
        assert_eq!(tok("x² ½ Ⅻ İ"), vec!["x", "i"]);
        assert_eq!(tok("İSTANBUL").join("").chars().count(), 8);
    }

    #[test]
    fn deterministic_and_input_untouched() {
        let text = String::from("Same INPUT, same output.");
        let first = tok(&text);
        let second = tok(&text);
        assert_eq!(first, second);
        assert_eq!(text, "Same INPUT, same output.");
    }

    #[test]
    fn closure_is_a_tokenizer() {
        let split = |text: &str| -> Result<Vec<String>, TokenizeError> {
            Ok(text.split(',').map(str::to_owned).collect())
        };
        assert_eq!(split.tokenize("a,b").unwrap(), vec!["a", "b"]);
    }
}
