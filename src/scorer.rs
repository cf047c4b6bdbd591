// ===== moodzone/src/scorer.rs =====
use crate::keywords::KeywordTable;
use crate::posts::Post;

/// Happiness of a single text: the arithmetic mean of the sentiment values
/// of recognized words, or `None` when no word is recognized.
///
/// Words are whitespace-separated tokens with leading and trailing ASCII
/// punctuation stripped (interior punctuation stays) and are lowercased
/// before lookup, so `"Happy!"`, `"happy"` and `"HAPPY,"` all hit a stored
/// `"happy"` key.
pub fn score_text(text: &str, keywords: &KeywordTable) -> Option<f64> {
    let mut total: i64 = 0;
    let mut recognized: u32 = 0;

    for token in text.split_whitespace() {
        let word = token
            .trim_matches(|c: char| c.is_ascii_punctuation())
            .to_lowercase();
        if let Some(value) = keywords.sentiment(&word) {
            total += i64::from(value);
            recognized += 1;
        }
    }

    if recognized > 0 {
        Some(total as f64 / f64::from(recognized))
    } else {
        None
    }
}

/// Scores every post, preserving order. `scores[i]` always belongs to
/// `posts[i]`; position is the join key for the region aggregation.
pub fn score_posts(posts: &[Post], keywords: &KeywordTable) -> Vec<Option<f64>> {
    posts
        .iter()
        .map(|post| score_text(&post.text, keywords))
        .collect()
}
