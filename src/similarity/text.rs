// Script-aware normalization and tokenization.
//
// All three similarity algorithms consume text through this module. The
// normalizer keeps CJK ideographs, ASCII letters, and ASCII digits, drops
// everything else, and collapses whitespace. The tokenizer splits on
// whitespace and treats CJK runs specially: a run contributes both the
// whole run and each individual ideograph, so "机器学习" can still match a
// text that reuses "学习" inside a different phrase.

use std::collections::HashSet;

/// Whether a code point falls in the CJK unified ideograph range the
/// tokenizer recognizes (U+4E00..U+9FA5).
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Strip a text down to CJK ideographs, ASCII letters, ASCII digits, and
/// single spaces.
///
/// Punctuation, symbols, and non-CJK scripts are dropped entirely rather
/// than replaced, so "Hello, World!" and "Hello World" normalize to the
/// same string. Whitespace runs collapse to one ASCII space and the result
/// carries no leading or trailing space. No case folding happens here;
/// callers that need it fold during tokenization.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !out.is_empty() {
                pending_space = true;
            }
        } else if is_cjk(c) || c.is_ascii_alphanumeric() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

/// Emit every token occurrence in a normalized text, in order, duplicates
/// kept.
///
/// A whitespace-delimited word with no CJK content becomes one lower-cased
/// token. A word containing at least one CJK ideograph becomes the word
/// itself (verbatim, no folding) plus one token per ideograph in it;
/// embedded Latin letters or digits are not re-emitted on their own.
/// Cosine scoring counts term frequencies from this stream.
pub fn token_stream(normalized: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in normalized.split_whitespace() {
        if word.chars().any(is_cjk) {
            tokens.push(word.to_string());
            for c in word.chars().filter(|c| is_cjk(*c)) {
                tokens.push(c.to_string());
            }
        } else {
            tokens.push(word.to_ascii_lowercase());
        }
    }
    tokens
}

/// Deduplicated token set for one normalized text.
pub fn tokenize(normalized: &str) -> HashSet<String> {
    token_stream(normalized).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_punctuation_and_symbols() {
        assert_eq!(normalize("Hello, World!"), "Hello World");
        assert_eq!(normalize("a+b=c; (d)"), "abc d");
    }

    #[test]
    fn normalize_drops_non_cjk_scripts() {
        // Accented Latin and Cyrillic are outside the retained ranges.
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("привет abc"), "abc");
    }

    #[test]
    fn normalize_collapses_and_trims_whitespace() {
        assert_eq!(normalize("  a \t b \n\n c  "), "a b c");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn normalize_keeps_cjk_and_digits() {
        assert_eq!(normalize("第1章：机器学习"), "第1章机器学习");
    }

    #[test]
    fn token_stream_lowercases_latin_words() {
        assert_eq!(token_stream("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn token_stream_expands_cjk_runs() {
        assert_eq!(token_stream("机器学习"), vec!["机器学习", "机", "器", "学", "习"]);
    }

    #[test]
    fn token_stream_keeps_mixed_tokens_verbatim() {
        // The mixed token is emitted as-is (no folding) and only its CJK
        // characters are re-emitted individually.
        assert_eq!(token_stream("AB第3章"), vec!["AB第3章", "第", "章"]);
    }

    #[test]
    fn token_stream_keeps_duplicate_occurrences() {
        assert_eq!(token_stream("a a b"), vec!["a", "a", "b"]);
    }

    #[test]
    fn tokenize_deduplicates() {
        let tokens = tokenize("word word 学习 学习");
        assert_eq!(tokens.len(), 4); // word, 学习, 学, 习
        assert!(tokens.contains("word"));
        assert!(tokens.contains("学习"));
        assert!(tokens.contains("学"));
        assert!(tokens.contains("习"));
    }
}
