use crate::graphics::{Color, ColorExt};
use tiny_skia::{FilterQuality, LineCap, LineJoin, Paint, PixmapPaint, Stroke};

#[derive(Debug, Clone)]
pub struct Style {
    color: Color,
    stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style::new(Color::BLACK, crate::DEFAULT_BRUSH_WIDTH)
    }
}

impl Style {
    pub const LINE_CAP: LineCap = LineCap::Round;
    pub const LINE_JOIN: LineJoin = LineJoin::Round;

    pub fn new(color: Color, stroke_width: f32) -> Self {
        let mut style = Style {
            color,
            stroke_width: crate::DEFAULT_BRUSH_WIDTH,
        };
        style.set_stroke_width(stroke_width);
        style
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Ignores widths that aren't positive and finite.
    pub fn set_stroke_width(&mut self, width: f32) {
        if width > 0. && width.is_finite() {
            self.stroke_width = width;
        } else {
            log::warn!(
                "ignoring stroke width {width}, keeping {}",
                self.stroke_width
            );
        }
    }

    pub fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color.to_skia());
        paint.anti_alias = true;
        paint
    }

    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: self.stroke_width,
            line_cap: Self::LINE_CAP,
            line_join: Self::LINE_JOIN,
            ..Default::default()
        }
    }
}

/// Paint for blitting the backing raster, carries no stroke properties.
pub fn canvas_paint() -> PixmapPaint {
    PixmapPaint {
        quality: FilterQuality::Nearest,
        ..Default::default()
    }
}
