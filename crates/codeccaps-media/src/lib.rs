//! Decoder capability descriptors over platform codec-enumeration data.
//!
//! The platform side is expressed as the [`CodecCapabilities`] trait family so
//! that real bindings and in-memory records ([`CapabilityRecord`]) can be used
//! interchangeably behind a [`DecoderInfo`].

#![forbid(unsafe_code)]

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A profile/level pair a decoder declares support for.
///
/// Both values are the platform's integer constants (for example the AVC
/// profile and level bit flags), kept opaque here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProfileLevel {
    pub profile: u32,
    pub level: u32,
}

impl ProfileLevel {
    pub const fn new(profile: u32, level: u32) -> Self {
        Self { profile, level }
    }
}

impl fmt::Display for ProfileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile={:#x} level={:#x}", self.profile, self.level)
    }
}

/// Optional decoder features reported through the platform feature-flag query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CodecFeature {
    /// Resolution changes without reinitializing the decoder.
    AdaptivePlayback,
    SecurePlayback,
    TunneledPlayback,
}

impl CodecFeature {
    pub const fn as_str(self) -> &'static str {
        match self {
            CodecFeature::AdaptivePlayback => "adaptive-playback",
            CodecFeature::SecurePlayback => "secure-playback",
            CodecFeature::TunneledPlayback => "tunneled-playback",
        }
    }
}

impl fmt::Display for CodecFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability data the platform supplies for a single decoder.
pub trait CodecCapabilities: Send + Sync + fmt::Debug {
    /// Supported profile/level pairs, or `None` if the platform exposes none.
    fn profile_levels(&self) -> Option<&[ProfileLevel]>;

    fn is_feature_supported(&self, feature: CodecFeature) -> bool;

    /// Present only for video decoders.
    fn video_capabilities(&self) -> Option<&dyn VideoCapabilities>;

    /// Present only for audio decoders.
    fn audio_capabilities(&self) -> Option<&dyn AudioCapabilities>;
}

pub trait VideoCapabilities: Send + Sync + fmt::Debug {
    fn is_size_supported(&self, width: u32, height: u32) -> bool;
    fn are_size_and_rate_supported(&self, width: u32, height: u32, frame_rate: f64) -> bool;
}

pub trait AudioCapabilities: Send + Sync + fmt::Debug {
    fn is_sample_rate_supported(&self, sample_rate: u32) -> bool;
    fn max_input_channel_count(&self) -> u32;
}

/// Enumerates the decoders available on a platform.
///
/// Implementations only list what exists; choosing between decoders is left
/// to the caller.
pub trait DecoderProbe: Send + Sync {
    fn decoders(&self) -> Result<Vec<DecoderInfo>>;

    fn decoder(&self, name: &str) -> Result<Option<DecoderInfo>> {
        let decoders = self.decoders()?;
        Ok(decoders.into_iter().find(|decoder| decoder.name() == name))
    }
}

pub struct NullProbe;

impl DecoderProbe for NullProbe {
    fn decoders(&self) -> Result<Vec<DecoderInfo>> {
        Ok(vec![])
    }
}

pub mod platform;
pub use platform::{PlatformConfig, FEATURE_QUERY_MIN_API_LEVEL, SIZE_AND_RATE_QUERY_MIN_API_LEVEL};

pub mod decoder_info;
pub use decoder_info::DecoderInfo;

pub mod record;
pub use record::{AudioRanges, CapabilityRecord, FrameRateRange, IntRange, VideoRanges};

pub mod catalog;
pub use catalog::{CatalogProbe, DecoderCatalog, DecoderEntry};
