// Frequency-based keyword extraction
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());
// \d is the Unicode decimal digit class (Nd), so Roman numerals are words
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Common English words that never count as keywords.
pub const STOPWORDS: [&str; 36] = [
    "the", "and", "of", "to", "in", "a", "is", "for", "with", "on",
    "that", "by", "as", "are", "at", "from", "this", "it", "or", "an",
    "be", "was", "which", "you", "not", "have", "has", "but", "we",
    "can", "all", "will", "if", "they", "your", "their",
];

fn is_candidate(word: &str) -> bool {
    word.chars().count() > 2
        && !DIGITS.is_match(word)
        && !STOPWORDS.contains(&word)
}

/// Return the `top_n` most frequent non-stopword tokens of `text`.
///
/// Tokens are lowercased `\w+` runs. Ties keep the order in which the
/// tokens first appeared.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
        if !is_candidate(word) {
            continue;
        }
        match index.get(word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(top_n)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_stopwords_and_short_words() {
        assert_eq!(extract_keywords("cat cat dog the a", 2), vec!["cat", "dog"]);
    }

    #[test]
    fn test_drops_numbers() {
        let keywords = extract_keywords("2024 2024 2024 report report q3", 5);
        assert_eq!(keywords, vec!["report"]);
    }

    #[test]
    fn test_only_decimal_digit_tokens_are_numbers() {
        // Arabic-Indic 2024 is dropped, Roman numeral XII stays
        let text = "\u{0662}\u{0660}\u{0662}\u{0664} \u{216B}\u{216B}\u{216B} report";
        let keywords = extract_keywords(text, 5);
        assert_eq!(keywords, vec!["\u{217B}\u{217B}\u{217B}", "report"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let keywords = extract_keywords("zebra apple mango apple zebra mango kiwi", 4);
        assert_eq!(keywords, vec!["zebra", "apple", "mango", "kiwi"]);
    }

    #[test]
    fn test_case_insensitive_counts() {
        let keywords = extract_keywords("Rust rust RUST python Python", 2);
        assert_eq!(keywords, vec!["rust", "python"]);
    }

    #[test]
    fn test_zero_top_n() {
        assert!(extract_keywords("plenty of words here", 0).is_empty());
    }

    #[test]
    fn test_unicode_words() {
        let keywords = extract_keywords("café café naïve", 2);
        assert_eq!(keywords, vec!["café", "naïve"]);
    }
}
