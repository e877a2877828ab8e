// Keyword-matched highlight sentences
use unicode_segmentation::UnicodeSegmentation;

/// Split text on Unicode sentence boundaries, trimming each sentence and
/// dropping the empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Pick up to `max_highlights` sentences, in document order, that contain any
/// of `keywords` (case-insensitive substring match).
pub fn highlight_sentences(text: &str, keywords: &[String], max_highlights: usize) -> Vec<String> {
    if max_highlights == 0 || keywords.is_empty() {
        return Vec::new();
    }

    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut highlights = Vec::new();

    for sentence in split_sentences(text) {
        let lowered = sentence.to_lowercase();
        if needles.iter().any(|kw| lowered.contains(kw.as_str())) {
            highlights.push(sentence.to_string());
            if highlights.len() >= max_highlights {
                break;
            }
        }
    }

    highlights
}
