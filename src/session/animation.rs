use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameContext, FrameIndex, FrameRange};
use crate::foundation::error::{HourwaveError, HourwaveResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::renderer::FrameRenderer;

/// Counters returned by [`AnimationSession::render_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_rendered: u64,
}

/// Offline animation host: turns frame indices into elapsed time at a fixed rate and drives a
/// [`FrameRenderer`] once per tick.
#[derive(Debug)]
pub struct AnimationSession {
    renderer: FrameRenderer,
    canvas: Canvas,
    fps: Fps,
}

impl AnimationSession {
    /// Use the canvas and frame rate from the renderer's config.
    pub fn new(renderer: FrameRenderer) -> Self {
        let canvas = renderer.config().canvas;
        let fps = renderer.config().fps;
        Self {
            renderer,
            canvas,
            fps,
        }
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> HourwaveResult<Self> {
        canvas.validate()?;
        self.canvas = canvas;
        Ok(self)
    }

    pub fn with_fps(mut self, fps: Fps) -> HourwaveResult<Self> {
        self.fps = Fps::new(fps.num, fps.den)?;
        Ok(self)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn elapsed_secs(&self, frame: FrameIndex) -> f64 {
        self.fps.frames_to_secs(frame.0)
    }

    pub fn frame_context(&self, frame: FrameIndex) -> HourwaveResult<FrameContext> {
        FrameContext::new(self.canvas, self.elapsed_secs(frame))
    }

    pub fn render_frame(&self, frame: FrameIndex) -> HourwaveResult<FrameRGBA> {
        self.renderer.render_rgba(self.frame_context(frame)?)
    }

    /// Render `range` in order into `sink`, calling `begin` and `end` once each.
    ///
    /// A failed frame calls `abort` on the sink instead of `end`.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> HourwaveResult<RenderStats> {
        if range.is_empty() {
            return Err(HourwaveError::validation("render range must be non-empty"));
        }

        tracing::info!(
            frames = range.len_frames(),
            width = self.canvas.width,
            height = self.canvas.height,
            fps = self.fps.as_f64(),
            "rendering frame range"
        );

        let mut surface = CpuSurface::new(self.canvas)?;
        let mut stats = RenderStats::default();

        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        })?;
        for f in range.start.0..range.end.0 {
            let idx = FrameIndex(f);
            if let Err(e) = self.push_one(idx, &mut surface, sink) {
                tracing::warn!(frame = f, error = %e, "aborting frame range");
                sink.abort();
                return Err(e);
            }
            stats.frames_rendered += 1;
        }
        sink.end()?;

        tracing::info!(frames = stats.frames_rendered, "finished frame range");
        Ok(stats)
    }

    fn push_one(
        &self,
        idx: FrameIndex,
        surface: &mut CpuSurface,
        sink: &mut dyn FrameSink,
    ) -> HourwaveResult<()> {
        self.renderer.render(self.frame_context(idx)?, surface)?;
        let frame = surface.finish();
        sink.push_frame(idx, &frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/animation.rs"]
mod tests;
