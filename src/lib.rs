//! hourwave renders an animated grid of noise-displaced lines whose wave amplitude follows the
//! time of day: flat at midnight, strongest at noon.
//!
//! # Pipeline overview
//!
//! 1. **Modulate**: wall-clock hour -> amplitude multiplier (`Modulation`)
//! 2. **Compose**: `FrameContext` + `SketchConfig` -> one `LineSpec` per guide line
//! 3. **Displace**: sample a 3D `NoiseField` along each line -> `Polyline`
//! 4. **Draw**: clear, then stroke rows top to bottom and columns left to right on a
//!    `DrawingSurface` (`CpuSurface` rasterizes with `vello_cpu`)
//! 5. **Host** (optional): `AnimationSession` maps frame indices to elapsed time and streams
//!    frames into a `FrameSink` (PNG sequence or MP4 through the system `ffmpeg`)
//!
//! Steps 1–3 are pure: for a fixed noise seed, canvas, elapsed time and hour, the polylines are
//! bit-identical across calls. The noise field and the hour source are injected, so tests can pin
//! both.
#![forbid(unsafe_code)]

mod encode;
mod foundation;
mod render;
mod session;
mod sketch;

pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use encode::png::{PngSequenceSink, ensure_parent_dir, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, Fps, FrameContext, FrameIndex, FrameRange, Point};
pub use foundation::error::{HourwaveError, HourwaveResult};
pub use foundation::math::{derive_seed, normalized_position};
pub use render::backend::FrameRGBA;
pub use render::cpu::CpuSurface;
pub use render::renderer::{FramePlan, FrameRenderer};
pub use render::surface::{DrawingSurface, RecordingSurface, StrokeStyle, SurfaceCommand};
pub use session::animation::{AnimationSession, RenderStats};
pub use sketch::clock::{FixedHour, HourSource, SystemClock};
pub use sketch::config::{LineCap, LineJoin, ParamRange, SketchConfig, StrokeConfig};
pub use sketch::grid::{GridParams, compose_grid, grid_line_specs};
pub use sketch::line::{LineSpec, Orientation, Polyline, displace_line};
pub use sketch::modulate::{Modulation, time_of_day_multiplier};
pub use sketch::noise::{NoiseField, SimplexField};

/// Title of the piece, used as the CLI description.
pub const TITLE: &str = "Perceived Activity at Certain Time";
