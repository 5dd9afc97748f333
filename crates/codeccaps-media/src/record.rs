//! In-memory capability records.
//!
//! [`CapabilityRecord`] implements the platform capability traits from plain
//! data, so it can stand in for a real platform record in tests and is what
//! catalog files deserialize into.

use crate::{AudioCapabilities, CodecCapabilities, CodecFeature, ProfileLevel, VideoCapabilities};
use codeccaps_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range containing exactly one value.
    pub const fn single(value: u32) -> Self {
        Self::new(value, value)
    }

    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    fn validate(&self, what: &str) -> Result<()> {
        if self.min > self.max {
            let msg = format!("{what} range is inverted: {} > {}", self.min, self.max);
            return Err(Error::config(msg));
        }
        Ok(())
    }
}

/// Inclusive frame-rate range in frames per second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FrameRateRange {
    pub min: f64,
    pub max: f64,
}

impl FrameRateRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, frame_rate: f64) -> bool {
        frame_rate.is_finite() && self.min <= frame_rate && frame_rate <= self.max
    }
}

fn default_alignment() -> u32 {
    2
}

/// Video limits of a decoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VideoRanges {
    pub widths: IntRange,
    pub heights: IntRange,
    #[serde(default = "default_alignment")]
    pub width_alignment: u32,
    #[serde(default = "default_alignment")]
    pub height_alignment: u32,
    /// Upper bound on `width * height`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pixels: Option<u64>,
    pub frame_rates: FrameRateRange,
    /// Upper bound on pixels decoded per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pixel_rate: Option<u64>,
}

impl VideoRanges {
    pub fn validate(&self) -> Result<()> {
        self.widths.validate("width")?;
        self.heights.validate("height")?;
        if self.width_alignment == 0 || self.height_alignment == 0 {
            return Err(Error::config("video alignment must be non-zero"));
        }
        let FrameRateRange { min, max } = self.frame_rates;
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            let msg = format!("invalid frame rate bounds: {min}..={max}");
            return Err(Error::config(msg));
        }
        if min > max {
            let msg = format!("frame rate range is inverted: {min} > {max}");
            return Err(Error::config(msg));
        }
        Ok(())
    }
}

impl VideoCapabilities for VideoRanges {
    fn is_size_supported(&self, width: u32, height: u32) -> bool {
        if !self.widths.contains(width) || !self.heights.contains(height) {
            return false;
        }
        if width % self.width_alignment.max(1) != 0 || height % self.height_alignment.max(1) != 0 {
            return false;
        }
        match self.max_pixels {
            Some(max) => u64::from(width) * u64::from(height) <= max,
            None => true,
        }
    }

    fn are_size_and_rate_supported(&self, width: u32, height: u32, frame_rate: f64) -> bool {
        if !self.is_size_supported(width, height) || !self.frame_rates.contains(frame_rate) {
            return false;
        }
        match self.max_pixel_rate {
            Some(max) => (u64::from(width) * u64::from(height)) as f64 * frame_rate <= max as f64,
            None => true,
        }
    }
}

/// Audio limits of a decoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AudioRanges {
    /// Supported sample rates in Hz. Discrete rates are single-value ranges.
    pub sample_rates: Vec<IntRange>,
    pub max_input_channel_count: u32,
}

impl AudioRanges {
    pub fn validate(&self) -> Result<()> {
        for range in &self.sample_rates {
            range.validate("sample rate")?;
        }
        Ok(())
    }
}

impl AudioCapabilities for AudioRanges {
    fn is_sample_rate_supported(&self, sample_rate: u32) -> bool {
        self.sample_rates
            .iter()
            .any(|range| range.contains(sample_rate))
    }

    fn max_input_channel_count(&self) -> u32 {
        self.max_input_channel_count
    }
}

/// Capability data for one decoder held in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CapabilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_levels: Option<Vec<ProfileLevel>>,
    #[serde(default)]
    pub features: Vec<CodecFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoRanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioRanges>,
}

impl CapabilityRecord {
    pub fn with_profile_levels(mut self, profile_levels: Vec<ProfileLevel>) -> Self {
        self.profile_levels = Some(profile_levels);
        self
    }

    pub fn with_feature(mut self, feature: CodecFeature) -> Self {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
        self
    }

    pub fn with_video(mut self, video: VideoRanges) -> Self {
        self.video = Some(video);
        self
    }

    pub fn with_audio(mut self, audio: AudioRanges) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(video) = &self.video {
            video.validate()?;
        }
        if let Some(audio) = &self.audio {
            audio.validate()?;
        }
        Ok(())
    }
}

impl CodecCapabilities for CapabilityRecord {
    fn profile_levels(&self) -> Option<&[ProfileLevel]> {
        self.profile_levels.as_deref()
    }

    fn is_feature_supported(&self, feature: CodecFeature) -> bool {
        self.features.contains(&feature)
    }

    fn video_capabilities(&self) -> Option<&dyn VideoCapabilities> {
        self.video
            .as_ref()
            .map(|video| video as &dyn VideoCapabilities)
    }

    fn audio_capabilities(&self) -> Option<&dyn AudioCapabilities> {
        self.audio
            .as_ref()
            .map(|audio| audio as &dyn AudioCapabilities)
    }
}
