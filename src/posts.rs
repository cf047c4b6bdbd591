use crate::consts::MIN_POST_FIELDS;
use crate::error::{MoodZoneError, MzResult};

/// One geotagged post: where it was sent from, and what it said.
///
/// Coordinates come from the first two space-separated tokens of the raw
/// line with their `[`, `]` and `,` decoration stripped; the text is
/// everything after the fifth token.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
}

/// Parses every raw line into a [`Post`], index-aligned with the input.
///
/// A line with fewer than [`MIN_POST_FIELDS`] fields, or a non-numeric
/// coordinate, aborts the whole run. Strict abort keeps the output 1:1 with
/// the input file, so downstream stages can join on position.
pub fn extract_posts(lines: &[String]) -> MzResult<Vec<Post>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_post(idx + 1, line))
        .collect()
}

fn parse_post(line_no: usize, line: &str) -> MzResult<Post> {
    // Split on single spaces, not runs: consecutive spaces produce empty
    // fields and count toward the minimum, exactly like the input format.
    let fields: Vec<&str> = line.splitn(MIN_POST_FIELDS, ' ').collect();
    if fields.len() < MIN_POST_FIELDS {
        return Err(MoodZoneError::Malformed {
            line: line_no,
            reason: format!(
                "expected at least {} space-separated fields, found {}",
                MIN_POST_FIELDS,
                fields.len()
            ),
        });
    }

    let latitude = parse_coordinate(line_no, fields[0], &['[', ','], "latitude")?;
    let longitude = parse_coordinate(line_no, fields[1], &[']', ','], "longitude")?;

    Ok(Post {
        latitude,
        longitude,
        text: fields[MIN_POST_FIELDS - 1].trim().to_string(),
    })
}

fn parse_coordinate(line_no: usize, raw: &str, decoration: &[char], which: &str) -> MzResult<f64> {
    raw.trim_matches(decoration).parse::<f64>().map_err(|_| {
        MoodZoneError::Validation(format!(
            "line {}: {} field '{}' is not a number",
            line_no, which, raw
        ))
    })
}
