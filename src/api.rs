// ===== moodzone/src/api.rs =====
use crate::error::{MoodZoneError, MzResult};
use crate::keywords::KeywordTable;
use crate::regions::{self, RegionResult, ALL_REGIONS};
use crate::{posts, reader, scorer};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Runs the four pipeline stages once, in order, over freshly loaded files.
///
/// Each stage fully materializes before the next begins. On success the
/// result holds exactly one entry per region, in Eastern, Central, Mountain,
/// Pacific order; on any stage error nothing partial escapes.
pub fn run_pipeline(tweet_path: &Path, keyword_path: &Path) -> MzResult<Vec<RegionResult>> {
    let tweet_lines = reader::load_lines(tweet_path)?;
    let keyword_lines = reader::load_lines(keyword_path)?;

    let keywords = KeywordTable::from_lines(&keyword_lines)?;
    info!("📚 Keyword table: {} entries", keywords.len());

    let posts = posts::extract_posts(&tweet_lines)?;
    let scores = scorer::score_posts(&posts, &keywords);
    debug!(
        "Scored {} posts, {} carry at least one recognized keyword",
        posts.len(),
        scores.iter().filter(|s| s.is_some()).count()
    );

    Ok(ALL_REGIONS
        .iter()
        .map(|region| regions::aggregate(region, &posts, &scores))
        .collect())
}

/// Bounded retry loop around [`run_pipeline`].
///
/// A missing input file aborts immediately with an empty result and is never
/// retried. Content errors (bad sentiment value, bad coordinate, short post
/// line) re-run the whole pipeline, re-reading both files, until
/// `max_attempts` is spent; the last error then propagates.
pub fn run_with_retry(
    tweet_path: &Path,
    keyword_path: &Path,
    max_attempts: usize,
) -> MzResult<Vec<RegionResult>> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match run_pipeline(tweet_path, keyword_path) {
            Ok(results) => return Ok(results),
            Err(MoodZoneError::NotFound(path)) => {
                error!("❌ File not found: {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                warn!(
                    "⚠️  Attempt {}/{} failed: {}. Re-reading input files.",
                    attempt, max_attempts, e
                );
            }
            Err(e) => return Err(e),
        }
    }
}
