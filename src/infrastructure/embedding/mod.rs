mod hashing;
mod openai;

pub use hashing::HashingEmbedding;
pub use openai::OpenAiEmbedding;

/// Cuts `text` after `max_words` whitespace-separated words.
///
/// Remote embedding models reject inputs past their context window; whole
/// words are kept so the tail is not a dangling fragment.
pub(crate) fn truncate_words(text: &str, max_words: usize) -> &str {
    if max_words == 0 {
        return "";
    }

    let mut words = 0;
    let mut in_word = false;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if in_word {
                words += 1;
                if words >= max_words {
                    return &text[..i];
                }
            }
            in_word = false;
        } else {
            in_word = true;
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_words_short_text_unchanged() {
        assert_eq!(truncate_words("one two three", 5), "one two three");
    }

    #[test]
    fn test_truncate_words_cuts_at_boundary() {
        assert_eq!(truncate_words("one  two\nthree four", 2), "one  two");
    }

    #[test]
    fn test_truncate_words_multibyte() {
        assert_eq!(truncate_words("café résumé naïve", 2), "café résumé");
    }

    #[test]
    fn test_truncate_words_zero() {
        assert_eq!(truncate_words("anything", 0), "");
    }
}
