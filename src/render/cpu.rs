use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{HourwaveError, HourwaveResult};
use crate::render::backend::FrameRGBA;
use crate::render::surface::{DrawingSurface, StrokeStyle};
use crate::sketch::config::{LineCap, LineJoin};

/// Drawing surface rasterized on the CPU with `vello_cpu`.
///
/// Commands accumulate in a render context; [`CpuSurface::finish`] rasterizes them and reads
/// the frame back as premultiplied RGBA8.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    path: vello_cpu::kurbo::BezPath,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> HourwaveResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| HourwaveError::validation("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| HourwaveError::validation("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            path: vello_cpu::kurbo::BezPath::new(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Rasterize everything drawn since the last `clear` and read the pixels back.
    pub fn finish(&mut self) -> FrameRGBA {
        clear_pixmap_to_transparent(&mut self.pixmap);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl DrawingSurface for CpuSurface {
    fn clear(&mut self, rgba: [u8; 4]) -> HourwaveResult<()> {
        // Drop any pending commands so the frame starts from the clear color alone.
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.path = vello_cpu::kurbo::BezPath::new();
        let [r, g, b, a] = rgba;
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path = vello_cpu::kurbo::BezPath::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(point_to_cpu(p));
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(point_to_cpu(p));
    }

    fn stroke(&mut self, style: &StrokeStyle) -> HourwaveResult<()> {
        if !(style.width.is_finite() && style.width > 0.0) {
            return Err(HourwaveError::render(format!(
                "stroke width must be > 0, got {}",
                style.width
            )));
        }
        let [r, g, b, a] = style.color;
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.set_stroke(stroke_to_cpu(style));
        self.ctx.stroke_path(&self.path);
        Ok(())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn stroke_to_cpu(style: &StrokeStyle) -> vello_cpu::kurbo::Stroke {
    let cap = match style.cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
    };
    let join = match style.join {
        LineJoin::Miter => vello_cpu::kurbo::Join::Miter,
        LineJoin::Round => vello_cpu::kurbo::Join::Round,
        LineJoin::Bevel => vello_cpu::kurbo::Join::Bevel,
    };
    vello_cpu::kurbo::Stroke::new(style.width)
        .with_caps(cap)
        .with_join(join)
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}
