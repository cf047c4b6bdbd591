// ===== moodzone/src/consts.rs =====
/// Shared latitude band for all four timezone regions (continental US).
/// Min is inclusive, max is exclusive.
pub const ALL_LAT_MIN: f64 = 24.660845;
pub const ALL_LAT_MAX: f64 = 49.189787;

/// Longitude bands, west-to-east: Pacific, Mountain, Central, Eastern.
/// Each band's max equals the next band's min, so the four bands tile the
/// tested latitude strip without gaps or overlap.
pub const EASTERN_LONG_MIN: f64 = -87.518395;
pub const EASTERN_LONG_MAX: f64 = -67.444574;
pub const CENTRAL_LONG_MIN: f64 = -101.998892;
pub const CENTRAL_LONG_MAX: f64 = -87.518395;
pub const MOUNTAIN_LONG_MIN: f64 = -115.236428;
pub const MOUNTAIN_LONG_MAX: f64 = -101.998892;
pub const PACIFIC_LONG_MIN: f64 = -125.242264;
pub const PACIFIC_LONG_MAX: f64 = -115.236428;

/// Minimum number of single-space-separated fields in a post line:
/// two coordinate tokens, three metadata tokens, then the text.
pub const MIN_POST_FIELDS: usize = 6;

/// Default total pipeline attempts before a content error becomes fatal.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
