use crate::{
    compositor::StrokeCompositor,
    config::Config,
    dirty::DirtyRegion,
    error::SmoothPaintError,
    event::{PointerAction, PointerEvent},
    gate::InputGate,
    graphics::{Color, ColorExt, Rect},
    path::{PathAccumulator, StrokePath},
    style::Style,
    PaintHost,
};
use tiny_skia::{Pixmap, PixmapMut};

impl PaintHost for () {
    fn request_repaint(&mut self, _: Rect) {}
    fn request_full_repaint(&mut self) {}
    fn on_stroke_completed(&mut self, _: StrokePath) {}
    fn on_warning_state_changed(&mut self, _: bool) {}
}

/// A freehand drawing surface.
///
/// Feed it size changes and pointer events, it calls back into the host for repaints, finished
/// strokes, and the stylus-only warning.
pub struct PaintSurface<H: PaintHost> {
    host: H,
    compositor: StrokeCompositor,
    accumulator: PathAccumulator,
    dirty: DirtyRegion,
    gate: InputGate,
    style: Style,
    brush_size: f32,
    waiting_for_touch_to_resume: bool,
}

impl<H: PaintHost> PaintSurface<H> {
    pub fn new(host: H) -> Self {
        PaintSurface::with_config(&Config::default(), host)
    }

    pub fn with_config(config: &Config, host: H) -> Self {
        let style = Style::new(config.brush_color, config.brush_width);
        PaintSurface {
            host,
            compositor: StrokeCompositor::new(config.background_color),
            accumulator: PathAccumulator::new(),
            dirty: DirtyRegion::new(),
            gate: InputGate::new(config.stylus_only_allowed),
            brush_size: style.stroke_width(),
            style,
            waiting_for_touch_to_resume: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn raster(&self) -> Option<&Pixmap> {
        self.compositor.raster()
    }

    pub fn live_path(&self) -> &StrokePath {
        self.accumulator.path()
    }

    pub fn dirty_bounds(&self) -> Option<Rect> {
        self.dirty.bounds()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn stylus_only_allowed(&self) -> bool {
        self.gate.stylus_only_allowed()
    }

    pub fn set_allow_stylus_only(&mut self, allowed: bool) {
        self.gate.set_stylus_only_allowed(allowed);
    }

    pub fn waiting_for_touch_to_resume(&self) -> bool {
        self.waiting_for_touch_to_resume
    }

    /// While set, finished strokes are reported but not kept on the raster.
    pub fn set_waiting_for_touch_to_resume(&mut self, waiting: bool) {
        self.waiting_for_touch_to_resume = waiting;
    }

    pub fn update_brush_color(&mut self, color: Color) {
        self.host.request_full_repaint();
        self.style.set_color(color);
    }

    pub fn update_brush_color_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.update_brush_color(Color::from_rgb_f32(r, g, b));
    }

    /// Changes the paint color without asking for a repaint.
    pub fn change_brush_color(&mut self, color: Color) {
        self.style.set_color(color);
    }

    pub fn update_brush_size(&mut self, size: f32) {
        self.host.request_full_repaint();
        self.style.set_stroke_width(size);
        self.brush_size = self.style.stroke_width();
    }

    /// Changes only the paint width. Repaint margins keep using the brush size.
    pub fn set_brush_size(&mut self, width: f32) {
        self.style.set_stroke_width(width);
    }

    pub fn on_size_change(&mut self, width: i32, height: i32) -> Result<(), SmoothPaintError> {
        self.compositor.allocate(width, height)
    }

    /// Start a new drawing.
    pub fn clean_up_drawing_area(&mut self) {
        self.compositor.clear();
        self.host.request_full_repaint();
    }

    pub fn render_frame(&self) -> Option<Pixmap> {
        self.compositor.render_frame(self.accumulator.path(), &self.style)
    }

    pub fn render_into(&self, target: &mut PixmapMut) {
        self.compositor
            .render_into(self.accumulator.path(), &self.style, target);
    }

    /// Returns whether the event was handled.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let decision = self.gate.check(event.action, event.tool);
        if let Some(is_on) = decision.warning {
            log::debug!("drawing warning {is_on}");
            self.host.on_warning_state_changed(is_on);
        }

        if decision.denied {
            log::debug!("absorbing {:?} from {:?}", event.action, event.tool);
            return true;
        }

        let PointerEvent {
            action, location, ..
        } = event;

        match action {
            PointerAction::Down => {
                self.accumulator.start_stroke(location.x, location.y);
                self.dirty.reset();
                self.dirty.expand(location.x, location.y);

                // no segment yet, nothing to repaint
                return true;
            }

            PointerAction::Move => {
                event.samples().for_each(|pos| self.add_point(pos.x, pos.y));
            }

            PointerAction::Up => {
                event.samples().for_each(|pos| self.add_point(pos.x, pos.y));
                self.end_stroke();
            }

            PointerAction::Other => return false,
        }

        if let Some(rect) = self.dirty.query_expanded_by(self.brush_size / 2.) {
            self.host.request_repaint(rect);
        }

        true
    }

    fn add_point(&mut self, x: f32, y: f32) {
        self.accumulator.append_point(x, y);
        self.dirty.expand(x, y);
    }

    fn end_stroke(&mut self) {
        let path = self.accumulator.finish();

        if self.waiting_for_touch_to_resume {
            log::debug!("waiting for touch to resume, not committing stroke");
        } else {
            self.compositor.commit_stroke(&path, &self.style);
        }

        log::debug!("stroke completed with {} commands", path.len());
        self.host.on_stroke_completed(path);
    }
}
