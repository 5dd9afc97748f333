//! Immutable description of a single media decoder.

use crate::{CodecCapabilities, CodecFeature, PlatformConfig, ProfileLevel};

/// Information about a media decoder.
///
/// Built once from the decoder's name and, when the platform provides it, its
/// capability record. Every query degrades to "unsupported" (or an empty list)
/// when the data it needs is missing.
#[derive(Debug)]
pub struct DecoderInfo {
    name: String,
    adaptive: bool,
    capabilities: Option<Box<dyn CodecCapabilities>>,
}

impl DecoderInfo {
    /// A decoder with no capability record.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(decoder = %name, "decoder info without capabilities");
        Self {
            name,
            adaptive: false,
            capabilities: None,
        }
    }

    /// A decoder backed by a platform capability record.
    ///
    /// Adaptive playback is only read from the record when `platform` can
    /// answer feature-flag queries.
    pub fn with_capabilities(
        name: impl Into<String>,
        capabilities: Box<dyn CodecCapabilities>,
        platform: &PlatformConfig,
    ) -> Self {
        let name = name.into();
        let adaptive = platform.supports_feature_queries()
            && capabilities.is_feature_supported(CodecFeature::AdaptivePlayback);
        tracing::debug!(
            decoder = %name,
            adaptive,
            api_level = platform.api_level,
            "decoder info with capabilities"
        );
        Self {
            name,
            adaptive,
            capabilities: Some(capabilities),
        }
    }

    /// The name used to instantiate the decoder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the decoder supports seamless resolution switches.
    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    pub fn has_capabilities(&self) -> bool {
        self.capabilities.is_some()
    }

    /// The profile levels supported by the decoder, in platform order.
    pub fn profile_levels(&self) -> &[ProfileLevel] {
        self.capabilities
            .as_deref()
            .and_then(|caps| caps.profile_levels())
            .unwrap_or(&[])
    }

    /// Whether the decoder supports video with the given width and height.
    ///
    /// Only meaningful when [`PlatformConfig::supports_size_and_rate_queries`]
    /// holds; not checked here.
    pub fn is_video_size_supported(&self, width: u32, height: u32) -> bool {
        self.capabilities
            .as_deref()
            .and_then(|caps| caps.video_capabilities())
            .is_some_and(|video| video.is_size_supported(width, height))
    }

    /// Whether the decoder supports video with the given size and frame rate
    /// (frames per second).
    pub fn is_video_size_and_rate_supported(
        &self,
        width: u32,
        height: u32,
        frame_rate: f64,
    ) -> bool {
        self.capabilities
            .as_deref()
            .and_then(|caps| caps.video_capabilities())
            .is_some_and(|v| v.are_size_and_rate_supported(width, height, frame_rate))
    }

    /// Whether the decoder supports audio at `sample_rate` Hz.
    pub fn is_audio_sample_rate_supported(&self, sample_rate: u32) -> bool {
        self.capabilities
            .as_deref()
            .and_then(|caps| caps.audio_capabilities())
            .is_some_and(|audio| audio.is_sample_rate_supported(sample_rate))
    }

    pub fn is_audio_channel_count_supported(&self, channel_count: u32) -> bool {
        self.capabilities
            .as_deref()
            .and_then(|caps| caps.audio_capabilities())
            .is_some_and(|audio| audio.max_input_channel_count() >= channel_count)
    }
}
