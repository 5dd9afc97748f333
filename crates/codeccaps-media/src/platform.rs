//! Platform feature availability.

use serde::{Deserialize, Serialize};

/// First API level whose capability records answer feature-flag queries.
pub const FEATURE_QUERY_MIN_API_LEVEL: u32 = 19;

/// First API level on which the video size/rate and audio predicates are valid.
pub const SIZE_AND_RATE_QUERY_MIN_API_LEVEL: u32 = 21;

/// Describes what the host media API can be asked.
///
/// Passed into descriptor construction instead of consulting a global
/// platform version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    pub api_level: u32,
}

impl PlatformConfig {
    pub const fn new(api_level: u32) -> Self {
        Self { api_level }
    }

    pub const fn supports_feature_queries(&self) -> bool {
        self.api_level >= FEATURE_QUERY_MIN_API_LEVEL
    }

    /// Whether callers may use the size, rate and channel predicates.
    ///
    /// Descriptors do not check this themselves.
    pub const fn supports_size_and_rate_queries(&self) -> bool {
        self.api_level >= SIZE_AND_RATE_QUERY_MIN_API_LEVEL
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::new(SIZE_AND_RATE_QUERY_MIN_API_LEVEL)
    }
}
