//! codeccaps CLI: list and query decoder capabilities from a catalog.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use codeccaps_media::{DecoderCatalog, DecoderInfo, PlatformConfig};

#[derive(Parser, Debug)]
#[command(name = "codeccaps")]
#[command(about = "Query media decoder capabilities")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct CatalogArgs {
    /// Decoder catalog file (JSON)
    #[arg(short, long, env = "CODECCAPS_CATALOG")]
    catalog: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List decoders in the catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Only decoders advertising this MIME type
        #[arg(short, long)]
        mime: Option<String>,
    },

    /// Show the profile levels of a decoder
    Profiles {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Decoder name
        #[arg(short, long)]
        decoder: String,
    },

    /// Check whether a decoder handles a video size (and frame rate)
    Video {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Decoder name
        #[arg(short, long)]
        decoder: String,

        /// Width in pixels
        #[arg(long)]
        width: u32,

        /// Height in pixels
        #[arg(long)]
        height: u32,

        /// Frame rate in frames per second
        #[arg(long)]
        fps: Option<f64>,
    },

    /// Check whether a decoder handles an audio sample rate and/or channel count
    #[command(group(
        ArgGroup::new("audio_query")
            .required(true)
            .multiple(true)
            .args(["sample_rate", "channels"])
    ))]
    Audio {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Decoder name
        #[arg(short, long)]
        decoder: String,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Channel count
        #[arg(long)]
        channels: Option<u32>,
    },

    /// Show version information
    Version,
}

fn load_catalog(args: &CatalogArgs) -> Result<DecoderCatalog> {
    let path = &args.catalog;
    DecoderCatalog::load(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))
}

fn load_decoder(args: &CatalogArgs, name: &str) -> Result<(PlatformConfig, DecoderInfo)> {
    let catalog = load_catalog(args)?;
    let decoder = catalog.decoder(name)?;
    Ok((catalog.platform, decoder))
}

fn warn_if_unqueryable(platform: &PlatformConfig) {
    if !platform.supports_size_and_rate_queries() {
        tracing::warn!(
            api_level = platform.api_level,
            "catalog platform predates size and rate queries; answers may be meaningless"
        );
    }
}

/// Every requested audio property must be supported.
fn audio_supported(decoder: &DecoderInfo, sample_rate: Option<u32>, channels: Option<u32>) -> bool {
    let rate_ok = match sample_rate {
        Some(rate) => decoder.is_audio_sample_rate_supported(rate),
        None => true,
    };
    let channels_ok = match channels {
        Some(count) => decoder.is_audio_channel_count_supported(count),
        None => true,
    };
    rate_ok && channels_ok
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn main() -> Result<()> {
    codeccaps_common::init_tracing_with_default("warn");

    let args = Args::parse();

    match args.command {
        Command::List { catalog, mime } => {
            let catalog = load_catalog(&catalog)?;
            let decoders = match mime.as_deref() {
                Some(mime) => catalog.decoders_for_mime(mime),
                None => catalog.decoders(),
            };
            for decoder in &decoders {
                println!(
                    "{}\tadaptive={}\tprofile_levels={}",
                    decoder.name(),
                    yes_no(decoder.is_adaptive()),
                    decoder.profile_levels().len()
                );
            }
        }
        Command::Profiles { catalog, decoder } => {
            let (_, decoder) = load_decoder(&catalog, &decoder)?;
            for profile_level in decoder.profile_levels() {
                println!("{}", profile_level);
            }
        }
        Command::Video {
            catalog,
            decoder,
            width,
            height,
            fps,
        } => {
            let (platform, decoder) = load_decoder(&catalog, &decoder)?;
            warn_if_unqueryable(&platform);
            let supported = match fps {
                Some(fps) => decoder.is_video_size_and_rate_supported(width, height, fps),
                None => decoder.is_video_size_supported(width, height),
            };
            println!("{}", yes_no(supported));
        }
        Command::Audio {
            catalog,
            decoder,
            sample_rate,
            channels,
        } => {
            let (platform, decoder) = load_decoder(&catalog, &decoder)?;
            warn_if_unqueryable(&platform);
            let supported = audio_supported(&decoder, sample_rate, channels);
            println!("{}", yes_no(supported));
        }
        Command::Version => {
            println!("codeccaps {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeccaps_media::{AudioRanges, CapabilityRecord, IntRange};

    #[test]
    fn test_parse_video_command() {
        let args = Args::try_parse_from([
            "codeccaps",
            "video",
            "--catalog",
            "caps.json",
            "--decoder",
            "c2.avc",
            "--width",
            "1920",
            "--height",
            "1080",
            "--fps",
            "59.94",
        ])
        .unwrap();
        match args.command {
            Command::Video {
                catalog,
                decoder,
                width,
                height,
                fps,
            } => {
                assert_eq!(catalog.catalog, PathBuf::from("caps.json"));
                assert_eq!(decoder, "c2.avc");
                assert_eq!((width, height), (1920, 1080));
                assert_eq!(fps, Some(59.94));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_video_requires_dimensions() {
        let result = Args::try_parse_from([
            "codeccaps",
            "video",
            "--catalog",
            "caps.json",
            "--decoder",
            "c2.avc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_path_from_env() {
        std::env::set_var("CODECCAPS_CATALOG", "env-caps.json");

        let args = Args::try_parse_from(["codeccaps", "list"]).unwrap();
        match args.command {
            Command::List { catalog, mime } => {
                assert_eq!(catalog.catalog, PathBuf::from("env-caps.json"));
                assert_eq!(mime, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::try_parse_from([
            "codeccaps",
            "profiles",
            "--catalog",
            "flag-caps.json",
            "--decoder",
            "c2.avc",
        ])
        .unwrap();
        match args.command {
            Command::Profiles { catalog, .. } => {
                assert_eq!(catalog.catalog, PathBuf::from("flag-caps.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_audio_requires_rate_or_channels() {
        let err = Args::try_parse_from([
            "codeccaps",
            "audio",
            "--catalog",
            "caps.json",
            "--decoder",
            "c2.aac",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let args = Args::try_parse_from([
            "codeccaps",
            "audio",
            "--catalog",
            "caps.json",
            "--decoder",
            "c2.aac",
            "--sample-rate",
            "44100",
            "--channels",
            "2",
        ])
        .unwrap();
        match args.command {
            Command::Audio {
                sample_rate,
                channels,
                ..
            } => {
                assert_eq!(sample_rate, Some(44_100));
                assert_eq!(channels, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_audio_supported_needs_every_property() {
        let audio = AudioRanges {
            sample_rates: vec![IntRange::single(44_100), IntRange::single(48_000)],
            max_input_channel_count: 6,
        };
        let record = CapabilityRecord::default().with_audio(audio);
        let platform = PlatformConfig::default();
        let decoder = DecoderInfo::with_capabilities("c2.aac", Box::new(record), &platform);

        assert!(audio_supported(&decoder, Some(48_000), None));
        assert!(audio_supported(&decoder, None, Some(6)));
        assert!(audio_supported(&decoder, Some(44_100), Some(2)));
        assert!(!audio_supported(&decoder, Some(44_100), Some(7)));
        assert!(!audio_supported(&decoder, Some(22_050), Some(2)));

        let bare = DecoderInfo::new("c2.bare");
        assert!(!audio_supported(&bare, None, Some(1)));
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
