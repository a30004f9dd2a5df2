//! The sketch surface: gesture handling, cached composite and undo/redo.

use crate::config::SketchConfig;
use crate::context::Backend;
use crate::error::SketchResult;
use crate::geometry::{RenderMode, aspect_fit_rect, image_size, placement_rect};
use crate::history::History;
use crate::listener::{DrawSource, NoopListener, SketchListener};
use crate::style::ToolStyle;
use crate::tools::{DrawingTool, PenOptions, Tool, ToolKind, ToolOptions};
use image::RgbaImage;
use kurbo::{Point, Rect, Size};
use std::sync::Arc;

/// Area of the surface the host should repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Redraw {
    Full,
    Region(Rect),
}

impl Redraw {
    /// Combine two requests into one covering both.
    pub fn merge(self, other: Redraw) -> Redraw {
        match (self, other) {
            (Redraw::Region(a), Redraw::Region(b)) => Redraw::Region(a.union(b)),
            _ => Redraw::Full,
        }
    }
}

/// An interactive drawing surface over a raster backend.
///
/// The cache always equals the background placed per the render mode with
/// every committed tool replayed on top, in order.
pub struct SketchSurface<B: Backend> {
    cache: B,
    background: Option<Arc<RgbaImage>>,
    render_mode: RenderMode,
    mask: Option<Arc<RgbaImage>>,
    history: History,
    active: Option<Tool>,
    last_point: Option<Point>,
    tool_kind: ToolKind,
    style: ToolStyle,
    options: ToolOptions,
    pending: Option<Redraw>,
    listener: Box<dyn SketchListener>,
}

impl<B: Backend> SketchSurface<B> {
    /// Create a blank surface with the default pen.
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        Ok(Self {
            cache: B::blank(width, height)?,
            background: None,
            render_mode: RenderMode::default(),
            mask: None,
            history: History::new(),
            active: None,
            last_point: None,
            tool_kind: ToolKind::default(),
            style: ToolStyle::default(),
            options: ToolOptions::default(),
            pending: None,
            listener: Box::new(NoopListener),
        })
    }

    /// Create a surface from a validated configuration.
    pub fn from_config(config: &SketchConfig) -> SketchResult<Self> {
        config.validate()?;
        let mut surface = Self::new(config.width, config.height)?;
        surface.tool_kind = config.tool;
        surface.style = config.style();
        surface.render_mode = config.render_mode;
        surface.options.pen = config.pen;
        surface.options.fill_tolerance = config.fill_tolerance;
        Ok(surface)
    }

    pub fn with_listener(mut self, listener: impl SketchListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl SketchListener + 'static) {
        self.listener = Box::new(listener);
    }

    // --- Gestures ---

    /// Begin a stroke with the current tool settings.
    ///
    /// A gesture still in progress is finished first.
    pub fn on_gesture_start(&mut self, point: Point) {
        if self.active.is_some() {
            let end = self.last_point.unwrap_or(point);
            log::debug!("gesture start while another is active, finishing it at {end:?}");
            self.on_gesture_end(end);
        }

        let mut tool = Tool::new(self.tool_kind, self.style, &self.options);
        self.listener.will_begin_draw(DrawSource::Gesture {
            id: tool.id(),
            kind: tool.kind(),
        });
        tool.set_initial_point(point);
        log::debug!("gesture start: {} at {point:?}", tool.kind());

        self.request(tool.dirty_region().map_or(Redraw::Full, Redraw::Region));
        self.active = Some(tool);
        self.last_point = Some(point);
    }

    pub fn on_gesture_move(&mut self, previous: Point, point: Point) {
        let Some(tool) = self.active.as_mut() else {
            return;
        };
        tool.move_to(previous, point);
        let redraw = tool.dirty_region().map_or(Redraw::Full, Redraw::Region);
        self.last_point = Some(point);
        self.request(redraw);
    }

    /// Finish the active gesture and commit its tool.
    pub fn on_gesture_end(&mut self, point: Point) {
        let Some(mut tool) = self.active.take() else {
            return;
        };
        let from = self.last_point.take().unwrap_or(point);
        tool.move_to(from, point);

        tool.render(&mut self.cache);
        let source = DrawSource::Gesture {
            id: tool.id(),
            kind: tool.kind(),
        };
        log::debug!("gesture end: committing {}", tool.kind());
        self.history.commit(tool);

        self.listener.did_end_draw(source);
        self.notify_history();
        self.request(Redraw::Full);
    }

    /// Drop the active gesture without committing it.
    pub fn cancel_gesture(&mut self) {
        if let Some(tool) = self.active.take() {
            log::debug!("gesture cancelled: {}", tool.kind());
            self.last_point = None;
            self.request(Redraw::Full);
        }
    }

    // --- History ---

    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        self.listener.will_begin_draw(DrawSource::Undo);
        self.drop_active();
        self.history.undo();
        self.recompute();
        self.listener.did_end_draw(DrawSource::Undo);
        self.notify_history();
        true
    }

    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        self.listener.will_begin_draw(DrawSource::Redo);
        self.drop_active();
        self.history.redo();
        self.recompute();
        self.listener.did_end_draw(DrawSource::Redo);
        self.notify_history();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erase every drawing, keeping the background.
    pub fn clear(&mut self) {
        self.drop_active();
        self.history.clear();
        self.recompute();
        self.notify_history();
    }

    // --- Background and mask ---

    /// Replace the background and start a fresh history.
    pub fn load_image(&mut self, image: impl Into<Arc<RgbaImage>>, mode: RenderMode) {
        let image = image.into();
        log::info!(
            "loading {}x{} background ({mode:?})",
            image.width(),
            image.height()
        );
        self.background = Some(image);
        self.render_mode = mode;
        self.drop_active();
        self.history.clear();
        self.recompute();
        self.notify_history();
    }

    /// Drop the background. Drawings stay.
    pub fn remove_image(&mut self) {
        if self.background.take().is_some() {
            log::info!("background removed");
        }
        self.recompute();
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if self.render_mode != mode {
            self.render_mode = mode;
            self.recompute();
        }
    }

    /// Set or clear the alpha mask applied to presented frames.
    pub fn set_mask_image(&mut self, mask: Option<Arc<RgbaImage>>) {
        if let Some(mask) = &mask {
            log::info!("mask set ({}x{})", mask.width(), mask.height());
        }
        self.mask = mask;
        self.request(Redraw::Full);
    }

    /// Reallocate the surface and replay its content at the new size.
    pub fn resize(&mut self, width: u32, height: u32) -> SketchResult<()> {
        log::info!("resizing surface to {width}x{height}");
        self.cache = B::blank(width, height)?;
        self.recompute();
        Ok(())
    }

    // --- Tool settings ---

    /// Select the tool and style used by the next gesture.
    pub fn set_tool(&mut self, kind: ToolKind, style: ToolStyle) -> SketchResult<()> {
        self.set_style(style)?;
        self.tool_kind = kind;
        Ok(())
    }

    pub fn set_tool_kind(&mut self, kind: ToolKind) {
        self.tool_kind = kind;
    }

    pub fn set_style(&mut self, style: ToolStyle) -> SketchResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    pub fn set_pen_options(&mut self, options: PenOptions) {
        self.options.pen = options;
    }

    pub fn set_stamp_image(&mut self, image: Option<Arc<RgbaImage>>) {
        self.options.stamp_image = image;
    }

    pub fn set_fill_tolerance(&mut self, tolerance: u8) {
        self.options.fill_tolerance = tolerance;
    }

    // --- Output ---

    /// Background plus committed drawings.
    pub fn composite(&self) -> &B {
        &self.cache
    }

    /// What the host should present: the composite, the gesture in progress
    /// and the mask.
    pub fn frame(&self) -> B {
        let mut frame = self.cache.clone();
        if let Some(tool) = &self.active {
            tool.render(&mut frame);
        }
        if let Some(mask) = &self.mask {
            match aspect_fit_rect(image_size(mask), self.size()) {
                Ok(dest) => frame.apply_mask(mask, dest),
                Err(err) => log::warn!("skipping mask: {err}"),
            }
        }
        frame
    }

    /// Take the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.pending.take()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn active_tool(&self) -> Option<&Tool> {
        self.active.as_ref()
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool_kind
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn options(&self) -> &ToolOptions {
        &self.options
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn background(&self) -> Option<&Arc<RgbaImage>> {
        self.background.as_ref()
    }

    pub fn mask(&self) -> Option<&Arc<RgbaImage>> {
        self.mask.as_ref()
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.cache.width()), f64::from(self.cache.height()))
    }

    // --- Internals ---

    fn request(&mut self, redraw: Redraw) {
        self.pending = Some(match self.pending {
            Some(pending) => pending.merge(redraw),
            None => redraw,
        });
    }

    fn drop_active(&mut self) {
        self.active = None;
        self.last_point = None;
    }

    fn notify_history(&mut self) {
        self.listener
            .history_changed(self.history.can_undo(), self.history.can_redo());
    }

    fn place_background(&self, target: &mut B) {
        let Some(image) = &self.background else {
            return;
        };
        match placement_rect(self.render_mode, image_size(image), self.size()) {
            Ok(dest) => target.draw_image(image, dest, 1.0),
            Err(err) => log::warn!("skipping background: {err}"),
        }
    }

    /// Rebuild the cache from the background and the committed tools.
    fn recompute(&mut self) {
        let mut next = self.cache.clone();
        next.clear();
        self.place_background(&mut next);
        for tool in self.history.committed() {
            tool.render(&mut next);
        }
        log::debug!("recomputed cache from {} committed tools", self.history.len());
        self.cache = next;
        self.request(Redraw::Full);
    }
}
