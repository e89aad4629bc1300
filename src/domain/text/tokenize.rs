/// A maximal run of word characters (letters and digits) or of anything
/// else. Tokens concatenate, in order, back to the exact original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token within the original string.
    pub start: usize,
    pub is_word: bool,
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Lossless word/separator tokenization.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_word = false;

    for (idx, ch) in text.char_indices() {
        let word = is_word_char(ch);
        if idx > 0 && word != in_word {
            tokens.push(Token {
                text: &text[start..idx],
                start,
                is_word: in_word,
            });
            start = idx;
        }
        in_word = word;
    }

    if !text.is_empty() {
        tokens.push(Token {
            text: &text[start..],
            start,
            is_word: in_word,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_words_and_separators() {
        let tokens = tokenize("ghbdtn rfr, ltkf");
        assert_eq!(texts(&tokens), ["ghbdtn", " ", "rfr", ", ", "ltkf"]);
        let words: Vec<bool> = tokens.iter().map(|t| t.is_word).collect();
        assert_eq!(words, [true, false, true, false, true]);
    }

    #[test]
    fn digits_count_as_word_characters() {
        let tokens = tokenize("abc123 456");
        assert_eq!(texts(&tokens), ["abc123", " ", "456"]);
        assert!(tokens[2].is_word);
    }

    #[test]
    fn join_reconstructs_the_original_exactly() {
        for text in [
            "",
            "   ",
            "ghbdtn",
            "Как дел? Сказал John b gjdtcbk",
            "- ghbdtn!",
            "тест,test.123",
        ] {
            let joined: String = tokenize(text).iter().map(|t| t.text).collect();
            assert_eq!(joined, text);
        }
    }

    #[test]
    fn offsets_point_into_the_original() {
        let text = "привет world";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.start + token.text.len()], token.text);
        }
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
