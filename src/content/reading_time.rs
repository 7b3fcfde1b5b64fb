//! Reading-time estimation

use serde::{Deserialize, Serialize};

/// Default reading speed in words per minute
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time of a post body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub minutes: f64,
    pub words: usize,
    pub text: String,
}

impl ReadingTime {
    /// Estimate the reading time of `body` at `words_per_minute`
    pub fn estimate(body: &str, words_per_minute: usize) -> Self {
        let words = count_words(body);
        let minutes = words as f64 / words_per_minute.max(1) as f64;
        let text = format!("{} min read", display_minutes(minutes));
        Self {
            minutes,
            words,
            text,
        }
    }

    /// Whole minutes for display, rounded up
    pub fn rounded_minutes(&self) -> u64 {
        display_minutes(self.minutes)
    }
}

// Round to hundredths first so 2.0000001 does not display as 3
fn display_minutes(minutes: f64) -> u64 {
    ((minutes * 100.0).round() / 100.0).ceil() as u64
}

/// Count words: runs of alphanumerics (with inner apostrophes), plus one word
/// per CJK character.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if in_word && (c == '\'' || c == '’') {
            // Keep "don't" as a single word
            in_word = chars.peek().is_some_and(|n| n.is_alphanumeric() && !is_cjk(*n));
        } else {
            in_word = false;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}' // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}' // Hangul syllables
        | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("Hello, world!"), 2);
        assert_eq!(count_words("don't stop"), 2);
        assert_eq!(count_words("# Heading\n\n- item one\n- item two"), 5);
        assert_eq!(count_words("vibe coding 写代码"), 5);
    }

    #[test]
    fn test_estimate() {
        let body = "word ".repeat(450);
        let rt = ReadingTime::estimate(&body, 200);
        assert_eq!(rt.words, 450);
        assert!((rt.minutes - 2.25).abs() < f64::EPSILON);
        assert_eq!(rt.rounded_minutes(), 3);
        assert_eq!(rt.text, "3 min read");
    }

    #[test]
    fn test_empty_body() {
        let rt = ReadingTime::estimate("", DEFAULT_WORDS_PER_MINUTE);
        assert_eq!(rt.words, 0);
        assert_eq!(rt.text, "0 min read");
    }

    #[test]
    fn test_rounding_tolerance() {
        let rt = ReadingTime {
            minutes: 2.000_000_1,
            words: 400,
            text: String::new(),
        };
        assert_eq!(rt.rounded_minutes(), 2);
    }
}
