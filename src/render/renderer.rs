use crate::foundation::core::{Canvas, FrameContext};
use crate::foundation::error::HourwaveResult;
use crate::foundation::math::derive_seed;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::surface::{DrawingSurface, StrokeStyle};
use crate::sketch::clock::{HourSource, SystemClock, checked_hour};
use crate::sketch::config::SketchConfig;
use crate::sketch::grid::{GridParams, compose_grid};
use crate::sketch::line::Polyline;
use crate::sketch::modulate::Modulation;
use crate::sketch::noise::{NoiseField, SimplexField};

/// Everything drawn for one frame, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub canvas: Canvas,
    pub modulation: Modulation,
    /// Elapsed seconds after `time_scale`, as fed to the noise field.
    pub noise_time: f64,
    pub background: [u8; 4],
    pub stroke: StrokeStyle,
    /// Horizontal lines top to bottom, then vertical lines left to right.
    pub lines: Vec<Polyline>,
}

/// Maps a [`FrameContext`] to stroked polylines on a [`DrawingSurface`].
///
/// The noise field and hour source are injected so frames are reproducible in tests.
pub struct FrameRenderer {
    config: SketchConfig,
    noise: Box<dyn NoiseField>,
    clock: Box<dyn HourSource>,
}

impl FrameRenderer {
    /// Validate `config` and seed a simplex noise field, reading hours from the local clock.
    pub fn new(config: SketchConfig) -> HourwaveResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(derive_seed);
        tracing::debug!(seed, "seeded simplex noise field");
        Ok(Self {
            config,
            noise: Box::new(SimplexField::new(seed)),
            clock: Box::new(SystemClock),
        })
    }

    pub fn with_noise(mut self, noise: impl NoiseField + 'static) -> Self {
        self.noise = Box::new(noise);
        self
    }

    pub fn with_clock(mut self, clock: impl HourSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Compute the frame without drawing it. The hour is read fresh on every call.
    pub fn plan_frame(&self, ctx: FrameContext) -> HourwaveResult<FramePlan> {
        let ctx = FrameContext::new(ctx.canvas, ctx.elapsed_secs)?;
        let hour = checked_hour(self.clock.hour())?;
        let modulation = Modulation::for_hour(&self.config, hour);
        let noise_time = ctx.elapsed_secs * self.config.time_scale;

        let params = GridParams {
            rows: self.config.rows,
            cols: self.config.cols,
            steps: self.config.steps,
            amplitude: modulation.amplitude,
            frequency: modulation.frequency,
            time: noise_time,
        };
        let lines = compose_grid(ctx.canvas, &params, self.noise.as_ref());

        Ok(FramePlan {
            canvas: ctx.canvas,
            modulation,
            noise_time,
            background: self.config.background,
            stroke: StrokeStyle::from_config(&self.config.stroke, ctx.canvas.min_dim()),
            lines,
        })
    }

    /// Clear the surface and stroke every guide line.
    #[tracing::instrument(
        skip(self, surface),
        fields(width = ctx.canvas.width, height = ctx.canvas.height, t = ctx.elapsed_secs)
    )]
    pub fn render(
        &self,
        ctx: FrameContext,
        surface: &mut dyn DrawingSurface,
    ) -> HourwaveResult<Modulation> {
        let plan = self.plan_frame(ctx)?;
        tracing::debug!(
            hour = plan.modulation.hour,
            multiplier = plan.modulation.multiplier,
            amplitude = plan.modulation.amplitude,
            "time-of-day modulation"
        );

        surface.clear(plan.background)?;
        for line in &plan.lines {
            surface.stroke_polyline(line, &plan.stroke)?;
        }
        Ok(plan.modulation)
    }

    /// Render onto a fresh [`CpuSurface`] and read the pixels back.
    pub fn render_rgba(&self, ctx: FrameContext) -> HourwaveResult<FrameRGBA> {
        let mut surface = CpuSurface::new(ctx.canvas)?;
        self.render(ctx, &mut surface)?;
        Ok(surface.finish())
    }
}

impl std::fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
