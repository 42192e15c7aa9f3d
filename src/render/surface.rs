use crate::foundation::core::Point;
use crate::foundation::error::HourwaveResult;
use crate::sketch::config::{LineCap, LineJoin, StrokeConfig};
use crate::sketch::line::Polyline;

/// Resolved stroke parameters for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Straight-alpha RGBA8.
    pub color: [u8; 4],
    /// Line width in pixels.
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Width is `width_factor` of the shorter canvas side.
    pub fn from_config(cfg: &StrokeConfig, min_dim: f64) -> Self {
        Self {
            color: cfg.color,
            width: min_dim * cfg.width_factor,
            cap: cfg.cap,
            join: cfg.join,
        }
    }
}

/// Canvas-style path sink the frame renderer draws into.
///
/// Calls arrive in a fixed order per frame: one `clear`, then one path per guide line.
pub trait DrawingSurface {
    /// Fill the whole surface with a straight-alpha RGBA8 color.
    fn clear(&mut self, rgba: [u8; 4]) -> HourwaveResult<()>;

    /// Start a new, empty path.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Stroke the current path.
    fn stroke(&mut self, style: &StrokeStyle) -> HourwaveResult<()>;

    /// Issue the path commands for `line` in point order and stroke it.
    fn stroke_polyline(&mut self, line: &Polyline, style: &StrokeStyle) -> HourwaveResult<()> {
        let Some((&first, rest)) = line.points.split_first() else {
            return Ok(());
        };
        self.begin_path();
        self.move_to(first);
        for &p in rest {
            self.line_to(p);
        }
        self.stroke(style)
    }
}

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    Clear([u8; 4]),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke(StrokeStyle),
}

/// Surface that only records the commands it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Number of `stroke` calls seen so far.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::Stroke(_)))
            .count()
    }

    pub fn take(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, rgba: [u8; 4]) -> HourwaveResult<()> {
        self.commands.push(SurfaceCommand::Clear(rgba));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(SurfaceCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(SurfaceCommand::LineTo(p));
    }

    fn stroke(&mut self, style: &StrokeStyle) -> HourwaveResult<()> {
        self.commands.push(SurfaceCommand::Stroke(*style));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
