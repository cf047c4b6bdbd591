use crate::error::{MoodZoneError, MzResult};
use std::collections::HashMap;
use tracing::debug;

/// Sentiment lookup table built from `word,value` records.
///
/// Keys are stored exactly as written; case folding happens on the candidate
/// word at lookup time, in the scorer. Duplicate keywords overwrite earlier
/// entries (last write wins).
#[derive(Debug, Default, Clone)]
pub struct KeywordTable {
    entries: HashMap<String, i32>,
}

impl KeywordTable {
    /// Builds the table from already-loaded lines. Any record that is not
    /// exactly `<word>,<integer>` fails the whole stage; no partial table is
    /// ever returned.
    pub fn from_lines(lines: &[String]) -> MzResult<Self> {
        let joined = lines.join("\n");
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(joined.as_bytes());

        let mut entries = HashMap::new();
        for result in rdr.records() {
            let record = result?;
            if record.len() != 2 {
                return Err(MoodZoneError::Validation(format!(
                    "keyword record must be <word>,<value>, found {} fields in '{}'",
                    record.len(),
                    record.iter().collect::<Vec<_>>().join(",")
                )));
            }

            let keyword = record[0].to_string();
            let value: i32 = record[1].trim().parse().map_err(|_| {
                MoodZoneError::Validation(format!(
                    "sentiment value for '{}' is not an integer: '{}'",
                    keyword, &record[1]
                ))
            })?;
            entries.insert(keyword, value);
        }

        debug!("Keyword table built: {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Exact lookup on the stored key. Callers are expected to lowercase and
    /// punctuation-strip the candidate first.
    pub fn sentiment(&self, word: &str) -> Option<i32> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
