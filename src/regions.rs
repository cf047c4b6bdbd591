// ===== moodzone/src/regions.rs =====
use crate::consts::{
    ALL_LAT_MAX, ALL_LAT_MIN, CENTRAL_LONG_MAX, CENTRAL_LONG_MIN, EASTERN_LONG_MAX,
    EASTERN_LONG_MIN, MOUNTAIN_LONG_MAX, MOUNTAIN_LONG_MIN, PACIFIC_LONG_MAX, PACIFIC_LONG_MIN,
};
use crate::posts::Post;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Timezone {
    Eastern,
    Central,
    Mountain,
    Pacific,
}

/// A fixed rectangular coordinate band approximating one US timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub timezone: Timezone,
    pub lat_min: f64,
    pub lat_max: f64,
    pub long_min: f64,
    pub long_max: f64,
}

impl Region {
    /// Min bounds inclusive, max bounds exclusive. Adjacent bands share a
    /// boundary value, so a post sitting exactly on it lands in exactly one
    /// region.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.lat_min
            && latitude < self.lat_max
            && longitude >= self.long_min
            && longitude < self.long_max
    }
}

/// The four timezone regions, in presentation order.
pub static ALL_REGIONS: [Region; 4] = [
    Region {
        timezone: Timezone::Eastern,
        lat_min: ALL_LAT_MIN,
        lat_max: ALL_LAT_MAX,
        long_min: EASTERN_LONG_MIN,
        long_max: EASTERN_LONG_MAX,
    },
    Region {
        timezone: Timezone::Central,
        lat_min: ALL_LAT_MIN,
        lat_max: ALL_LAT_MAX,
        long_min: CENTRAL_LONG_MIN,
        long_max: CENTRAL_LONG_MAX,
    },
    Region {
        timezone: Timezone::Mountain,
        lat_min: ALL_LAT_MIN,
        lat_max: ALL_LAT_MAX,
        long_min: MOUNTAIN_LONG_MIN,
        long_max: MOUNTAIN_LONG_MAX,
    },
    Region {
        timezone: Timezone::Pacific,
        lat_min: ALL_LAT_MIN,
        lat_max: ALL_LAT_MAX,
        long_min: PACIFIC_LONG_MIN,
        long_max: PACIFIC_LONG_MAX,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResult {
    pub timezone: Timezone,
    pub average_happiness: Option<f64>,
    pub tweet_count: usize,
}

/// Averages the scored, in-region posts for one region.
///
/// An in-region post with no score contributes to neither the sum nor the
/// count; a region with zero contributing posts reports `(None, 0)`.
pub fn aggregate(region: &Region, posts: &[Post], scores: &[Option<f64>]) -> RegionResult {
    debug_assert_eq!(posts.len(), scores.len());

    let mut total = 0.0;
    let mut count = 0usize;

    for (post, score) in posts.iter().zip(scores.iter()) {
        if !region.contains(post.latitude, post.longitude) {
            continue;
        }
        if let Some(value) = score {
            total += value;
            count += 1;
        }
    }

    let average_happiness = if count > 0 {
        Some(total / count as f64)
    } else {
        None
    };

    RegionResult {
        timezone: region.timezone,
        average_happiness,
        tweet_count: count,
    }
}
