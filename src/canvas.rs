//! 2D drawing context used by the rendering system.
//!
//! The game never talks to a pixel backend directly. It issues immediate-mode
//! calls against the [`Canvas`] trait; whoever embeds the game plugs a real
//! backend in. Two implementations ship with the crate:
//!
//! - [`NullCanvas`] reports that it cannot draw, so the render pass is skipped.
//! - [`RecordingCanvas`] appends every call to a shared [`DrawLog`], which is
//!   what the headless binary and the tests inspect.

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::sprite::Color;

/// Immediate-mode 2D drawing context with a transform stack.
pub trait Canvas {
    /// False when the backend cannot draw at all (no context, headless).
    fn is_drawable(&self) -> bool;

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Radians, clockwise.
    fn rotate(&mut self, angle: f32);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    /// 0.0 (transparent) to 1.0 (opaque), multiplied into every fill.
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    /// Adds a circular arc to the current path.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    /// Fill the current path.
    fn fill(&mut self);
}

/// One recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
    FillColor(Color),
    StrokeColor(Color),
    Alpha(f32),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    StrokeRect { x: f32, y: f32, width: f32, height: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    ClosePath,
    Arc { x: f32, y: f32, radius: f32, start: f32, end: f32 },
    Fill,
}

/// Shared command buffer written by a [`RecordingCanvas`].
pub type DrawLog = Rc<RefCell<Vec<DrawCommand>>>;

/// Canvas that cannot draw. Every call is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn is_drawable(&self) -> bool {
        false
    }
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _x: f32, _y: f32) {}
    fn rotate(&mut self, _angle: f32) {}
    fn set_fill_color(&mut self, _color: Color) {}
    fn set_stroke_color(&mut self, _color: Color) {}
    fn set_alpha(&mut self, _alpha: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn stroke_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f32, _y: f32) {}
    fn line_to(&mut self, _x: f32, _y: f32) {}
    fn close_path(&mut self) {}
    fn arc(&mut self, _x: f32, _y: f32, _radius: f32, _start_angle: f32, _end_angle: f32) {}
    fn fill(&mut self) {}
}

/// Canvas that records calls instead of drawing them.
///
/// Clone the [`DrawLog`] from [`log`](Self::log) before handing the canvas to
/// the renderer to read the commands back afterwards.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    log: DrawLog,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> DrawLog {
        Rc::clone(&self.log)
    }

    fn push(&mut self, command: DrawCommand) {
        self.log.borrow_mut().push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn is_drawable(&self) -> bool {
        true
    }
    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }
    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }
    fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Translate { x, y });
    }
    fn rotate(&mut self, angle: f32) {
        self.push(DrawCommand::Rotate(angle));
    }
    fn set_fill_color(&mut self, color: Color) {
        self.push(DrawCommand::FillColor(color));
    }
    fn set_stroke_color(&mut self, color: Color) {
        self.push(DrawCommand::StrokeColor(color));
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.push(DrawCommand::Alpha(alpha.clamp(0.0, 1.0)));
    }
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
        });
    }
    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo { x, y });
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo { x, y });
    }
    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start: start_angle,
            end: end_angle,
        });
    }
    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }
}
