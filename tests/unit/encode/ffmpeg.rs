use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps { num: 60, den: 1 },
    }
}

#[test]
fn transparent_pixels_become_background() {
    let mut dst = vec![0u8; 4];
    flatten_onto_background(&mut dst, &[0, 0, 0, 0], [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixels_pass_through() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_onto_background(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn half_covered_black_over_white_is_mid_gray() {
    let mut dst = vec![0u8; 4];
    flatten_onto_background(&mut dst, &[0, 0, 0, 128], [255, 255, 255, 255]).unwrap();
    assert_eq!(dst, vec![127, 127, 127, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_onto_background(&mut dst, &[0u8; 4], [0, 0, 0, 255]).is_err());
}

#[test]
fn premultiply_scales_color_by_alpha() {
    assert_eq!(premultiply(&[255, 128, 0, 128]), vec![128, 64, 0, 128]);
    assert_eq!(premultiply(&[9, 9, 9, 255]), vec![9, 9, 9, 255]);
}

#[test]
fn args_describe_raw_rgba_input_and_mp4_output() {
    let opts = FfmpegSinkOpts::new("target/ffmpeg_unit/out.mp4");
    let args: Vec<String> = ffmpeg_args(&opts, cfg(48, 32))
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    assert_eq!(args[0], "-y");
    let pos = |flag: &str| args.iter().position(|a| a == flag).unwrap();
    assert_eq!(args[pos("-s") + 1], "48x32");
    assert_eq!(args[pos("-r") + 1], "60/1");
    assert!(pos("-r") < pos("-i"));
    assert_eq!(args[pos("-c:v") + 1], "libx264");
    assert_eq!(args.last().unwrap(), "target/ffmpeg_unit/out.mp4");

    let keep = FfmpegSinkOpts {
        overwrite: false,
        ..opts
    };
    assert_eq!(ffmpeg_args(&keep, cfg(48, 32))[0], "-n");
}

#[test]
fn begin_rejects_odd_dimensions() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/out.mp4"));
    let err = sink.begin(cfg(511, 512)).unwrap_err();
    assert!(err.to_string().contains("even"));
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/out.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn begin_refuses_existing_output_without_overwrite() {
    let out = PathBuf::from("target").join("ffmpeg_unit").join("existing.mp4");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"keep").unwrap();

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        overwrite: false,
        ..FfmpegSinkOpts::new(&out)
    });
    let err = sink.begin(cfg(48, 32)).unwrap_err();
    assert!(matches!(err, HourwaveError::Validation(_)), "{err}");
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read(&out).unwrap(), b"keep");
}

#[test]
fn abort_without_begin_is_a_no_op() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/out.mp4"));
    sink.abort();
    assert!(sink.end().is_err());
}
