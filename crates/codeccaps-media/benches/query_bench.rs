use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codeccaps_media::{
    AudioRanges, CapabilityRecord, CodecFeature, DecoderInfo, FrameRateRange, IntRange,
    PlatformConfig, ProfileLevel, VideoRanges,
};

fn av_decoder() -> DecoderInfo {
    let video = VideoRanges {
        widths: IntRange::new(16, 3840),
        heights: IntRange::new(16, 2160),
        width_alignment: 2,
        height_alignment: 2,
        max_pixels: Some(3840 * 2160),
        frame_rates: FrameRateRange::new(0.0, 120.0),
        max_pixel_rate: Some(3840 * 2160 * 60),
    };
    let audio = AudioRanges {
        sample_rates: vec![IntRange::new(8_000, 96_000)],
        max_input_channel_count: 8,
    };
    let profile_levels = vec![
        ProfileLevel::new(0x01, 0x800),
        ProfileLevel::new(0x08, 0x800),
    ];
    let record = CapabilityRecord::default()
        .with_feature(CodecFeature::AdaptivePlayback)
        .with_profile_levels(profile_levels)
        .with_video(video)
        .with_audio(audio);
    let platform = PlatformConfig::default();
    DecoderInfo::with_capabilities("c2.bench.decoder", Box::new(record), &platform)
}

fn bench_queries(c: &mut Criterion) {
    let info = av_decoder();

    c.bench_function("video_size_and_rate_query", |b| {
        b.iter(|| {
            let (width, height) = (black_box(1920), black_box(1080));
            info.is_video_size_and_rate_supported(width, height, black_box(60.0))
        })
    });

    c.bench_function("audio_sample_rate_query", |b| {
        b.iter(|| info.is_audio_sample_rate_supported(black_box(44_100)))
    });

    let empty = DecoderInfo::new("c2.bench.empty");
    c.bench_function("absent_record_query", |b| {
        b.iter(|| {
            let (width, height) = (black_box(1920), black_box(1080));
            empty.is_video_size_supported(width, height)
        })
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
