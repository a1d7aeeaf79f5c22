use crate::{
    error::{ErrorKind, SmoothPaintError},
    graphics::{Color, ColorExt},
    path::StrokePath,
    style::{self, Style},
};
use tiny_skia::{Pixmap, PixmapMut, PixmapPaint, Transform};

/// Owns the backing raster that committed strokes are flattened into.
///
/// A surface reported as zero or negative in either dimension has no raster at all, every
/// operation on it is a no-op until a usable size arrives.
#[derive(Debug)]
pub struct StrokeCompositor {
    raster: Option<Pixmap>,
    background: Color,
    canvas_paint: PixmapPaint,
}

impl Default for StrokeCompositor {
    fn default() -> Self {
        StrokeCompositor::new(Color::PAPER)
    }
}

impl StrokeCompositor {
    pub fn new(background: Color) -> Self {
        StrokeCompositor {
            raster: None,
            background,
            canvas_paint: style::canvas_paint(),
        }
    }

    pub fn raster(&self) -> Option<&Pixmap> {
        self.raster.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        self.raster
            .as_ref()
            .map(|raster| (raster.width(), raster.height()))
            .unwrap_or((0, 0))
    }

    /// Throws away the old raster and starts over with a blank one.
    pub fn allocate(&mut self, width: i32, height: i32) -> Result<(), SmoothPaintError> {
        if width <= 0 || height <= 0 {
            log::info!("degenerate surface {width}x{height}, dropping raster");
            self.raster = None;
            return Ok(());
        }

        let (width, height) = (width as u32, height as u32);
        let mut raster = Pixmap::new(width, height).ok_or_else(|| {
            SmoothPaintError::new(ErrorKind::RasterAllocation { width, height })
        })?;
        raster.fill(self.background.to_skia());

        log::info!("allocated {width}x{height} raster");
        self.raster = Some(raster);
        Ok(())
    }

    pub fn commit_stroke(&mut self, path: &StrokePath, style: &Style) {
        let (raster, path) = match (self.raster.as_mut(), path.to_skia()) {
            (Some(raster), Some(path)) => (raster, path),
            _ => return,
        };

        raster.stroke_path(
            &path,
            &style.paint(),
            &style.stroke(),
            Transform::identity(),
            None,
        );
    }

    pub fn clear(&mut self) {
        if let Some(raster) = self.raster.as_mut() {
            log::info!("clearing raster");
            raster.fill(self.background.to_skia());
        }
    }

    /// Backing raster first, then the live stroke on top.
    pub fn render_into(&self, live: &StrokePath, style: &Style, target: &mut PixmapMut) {
        if let Some(raster) = self.raster.as_ref() {
            target.draw_pixmap(
                0,
                0,
                raster.as_ref(),
                &self.canvas_paint,
                Transform::identity(),
                None,
            );
        }

        if let Some(path) = live.to_skia() {
            target.stroke_path(
                &path,
                &style.paint(),
                &style.stroke(),
                Transform::identity(),
                None,
            );
        }
    }

    pub fn render_frame(&self, live: &StrokePath, style: &Style) -> Option<Pixmap> {
        let raster = self.raster.as_ref()?;
        let mut frame = Pixmap::new(raster.width(), raster.height())?;
        self.render_into(live, style, &mut frame.as_mut());
        Some(frame)
    }
}
