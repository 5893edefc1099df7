//! Event payloads
//!
//! The host environment owns the real event loop; it forwards these payloads
//! into component handlers. Timestamps are milliseconds on the host's
//! monotonic clock, the same clock components use to drive their timers.

use crate::geometry::Rect;

/// Pointer button identity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button / primary touch
    #[default]
    Primary,
    /// Right mouse button
    Secondary,
    /// Middle mouse button
    Auxiliary,
}

/// A pointer event in the component's local coordinate space
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
    /// Milliseconds on the host's monotonic clock
    pub timestamp: f64,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, timestamp: f64) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Primary,
            timestamp,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// A scroll event carrying the scrollable element's absolute offsets
#[derive(Clone, Copy, Debug)]
pub struct ScrollEvent {
    /// Absolute horizontal offset after the scroll
    pub left: f32,
    /// Absolute vertical offset after the scroll
    pub top: f32,
    /// Milliseconds on the host's monotonic clock
    pub timestamp: f64,
}

impl ScrollEvent {
    pub fn new(left: f32, top: f32, timestamp: f64) -> Self {
        Self {
            left,
            top,
            timestamp,
        }
    }
}

/// A resize observation for one watched element
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent {
    pub rect: Rect,
    /// Milliseconds on the host's monotonic clock
    pub timestamp: f64,
}

impl ResizeEvent {
    pub fn new(rect: Rect, timestamp: f64) -> Self {
        Self { rect, timestamp }
    }
}
