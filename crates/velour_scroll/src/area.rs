//! Scroll area component
//!
//! A styled scroll container that replaces native scrolling chrome with the
//! track/slider geometry from [`crate::geometry`]. The host forwards raw
//! events (resize observations, scroll offsets, pointer events) into the
//! handlers here and renders from [`ScrollArea::render_info`].
//!
//! # Example
//!
//! ```rust
//! use velour_core::{Rect, ResizeEvent, ScrollEvent};
//! use velour_scroll::prelude::*;
//!
//! let area = scroll_area()
//!     .visibility(Visibility::Always)
//!     .slider_size(8.0)
//!     .content("row 1\nrow 2".to_string());
//!
//! area.handle_outer_resize(&ResizeEvent::new(Rect::new(0.0, 0.0, 200.0, 100.0), 0.0));
//! area.handle_inner_resize(&ResizeEvent::new(Rect::new(0.0, 0.0, 400.0, 100.0), 0.0));
//! area.handle_scroll(&ScrollEvent::new(100.0, 0.0, 16.0));
//!
//! let info = area.render_info();
//! assert!(info.horizontal.visible);
//! ```

use std::sync::{Arc, Mutex};

use velour_core::{Color, PointerEvent, ResizeEvent, ScrollEvent};

use crate::config::{HorizontalEdge, ScrollAreaConfig, VerticalEdge, Visibility};
use crate::content::{ContentCell, ContentError, ScrollSnapshot};
use crate::state::{PointerCapture, ScrollAreaRenderInfo, ScrollAreaState};

/// Shared handle to the scroll area state for host-side access
pub type SharedScrollAreaState = Arc<Mutex<ScrollAreaState>>;

/// A scroll container with custom slider tracks
///
/// `T` is the content value the (external) presentation layer renders;
/// it may be supplied statically or produced from the live snapshot.
pub struct ScrollArea<T> {
    state: SharedScrollAreaState,
    content: ContentCell<T>,
}

impl<T: Clone> Default for ScrollArea<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ScrollArea<T> {
    /// Create a new scroll area with the default configuration
    pub fn new() -> Self {
        Self::with_config(ScrollAreaConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: ScrollAreaConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScrollAreaState::new(config))),
            content: ContentCell::default(),
        }
    }

    /// Get the shared state handle
    pub fn state(&self) -> SharedScrollAreaState {
        Arc::clone(&self.state)
    }

    fn update_config(self, update: impl FnOnce(&mut ScrollAreaConfig)) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let mut config = *state.config();
            update(&mut config);
            state.set_config(config);
        }
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Enable or disable horizontal scrolling (default: enabled)
    pub fn horizontal(self, enabled: bool) -> Self {
        self.update_config(|c| c.horizontal = enabled)
    }

    /// Enable or disable vertical scrolling (default: enabled)
    pub fn vertical(self, enabled: bool) -> Self {
        self.update_config(|c| c.vertical = enabled)
    }

    /// Edge the horizontal track is attached to (default: bottom)
    pub fn horizontal_edge(self, edge: HorizontalEdge) -> Self {
        self.update_config(|c| c.horizontal_edge = edge)
    }

    /// Edge the vertical track is attached to (default: right)
    pub fn vertical_edge(self, edge: VerticalEdge) -> Self {
        self.update_config(|c| c.vertical_edge = edge)
    }

    /// Set track visibility mode
    pub fn visibility(self, visibility: Visibility) -> Self {
        self.update_config(|c| c.visibility = visibility)
    }

    /// Always show tracks
    pub fn scrollbar_always(self) -> Self {
        self.visibility(Visibility::Always)
    }

    /// Show tracks on hover only (default)
    pub fn scrollbar_on_hover(self) -> Self {
        self.visibility(Visibility::Hover)
    }

    /// Show tracks while scrolling, dismiss after settling
    pub fn scrollbar_on_scroll(self) -> Self {
        self.visibility(Visibility::Scroll)
    }

    /// Hide tracks completely
    pub fn scrollbar_hidden(self) -> Self {
        self.visibility(Visibility::Never)
    }

    /// Set slider color
    pub fn slider_color(self, color: Color) -> Self {
        self.update_config(|c| c.slider_color = color)
    }

    /// Set slider base opacity
    pub fn slider_opacity(self, opacity: f32) -> Self {
        self.update_config(|c| c.slider_opacity = opacity)
    }

    /// Set the gap between sliders and the viewport edge
    pub fn slider_padding(self, padding: f32) -> Self {
        self.update_config(|c| c.slider_padding = padding)
    }

    /// Set slider thickness
    pub fn slider_size(self, size: f32) -> Self {
        self.update_config(|c| c.slider_size = size)
    }

    /// Register the host's pointer-capture backend
    pub fn capture(self, capture: impl PointerCapture + 'static) -> Self {
        self.state.lock().unwrap().set_capture(Box::new(capture));
        self
    }

    /// Register a callback receiving every raw scroll event
    pub fn on_scroll<F>(self, callback: F) -> Self
    where
        F: Fn(&ScrollEvent) + Send + Sync + 'static,
    {
        self.state
            .lock()
            .unwrap()
            .set_scroll_callback(Box::new(callback));
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Set static content
    pub fn content(mut self, value: T) -> Self {
        self.content = ContentCell::fixed(value);
        self
    }

    /// Set dynamic content produced from the live snapshot. A previously set
    /// static value stays as the fallback until the producer first succeeds.
    pub fn content_with<F>(mut self, producer: F) -> Self
    where
        F: Fn(&ScrollSnapshot) -> Result<T, ContentError> + Send + Sync + 'static,
    {
        self.content = std::mem::take(&mut self.content).producer(producer);
        self
    }

    /// Evaluate the content for this render pass. A failing producer keeps
    /// the previously rendered value.
    pub fn render_content(&mut self) -> Option<&T> {
        let snapshot = self.state.lock().unwrap().snapshot();
        self.content.render(&snapshot)
    }

    // =========================================================================
    // Event entry points (forwarded by the host)
    // =========================================================================

    /// Resize observation for the outer viewport element
    pub fn handle_outer_resize(&self, event: &ResizeEvent) {
        self.state.lock().unwrap().observe_outer(event.rect);
    }

    /// Resize observation for the inner content element
    pub fn handle_inner_resize(&self, event: &ResizeEvent) {
        self.state.lock().unwrap().observe_inner(event.rect);
    }

    /// Scroll event from the scrollable element
    pub fn handle_scroll(&self, event: &ScrollEvent) {
        self.state.lock().unwrap().on_scroll(event);
    }

    pub fn handle_pointer_enter(&self) {
        self.state.lock().unwrap().on_pointer_enter();
    }

    pub fn handle_pointer_leave(&self) {
        self.state.lock().unwrap().on_pointer_leave();
    }

    /// Returns true when the press landed on scroll chrome
    pub fn handle_pointer_down(&self, event: &PointerEvent) -> bool {
        self.state.lock().unwrap().on_pointer_down(event)
    }

    pub fn handle_pointer_move(&self, event: &PointerEvent) {
        self.state.lock().unwrap().on_pointer_move(event);
    }

    pub fn handle_pointer_up(&self, event: &PointerEvent) {
        self.state.lock().unwrap().on_pointer_up(event);
    }

    /// Fire due settle timers; hosts call this from their frame tick or a
    /// wakeup scheduled off [`ScrollAreaState::next_timer_deadline`]
    pub fn tick(&self, now_ms: f64) {
        self.state.lock().unwrap().poll_timers(now_ms);
    }

    // =========================================================================
    // Programmatic control
    // =========================================================================

    pub fn scroll_to(&self, left: f32, top: f32, now_ms: f64) {
        self.state.lock().unwrap().scroll_to(left, top, now_ms);
    }

    pub fn scroll_by(&self, dx: f32, dy: f32, now_ms: f64) {
        self.state.lock().unwrap().scroll_by(dx, dy, now_ms);
    }

    pub fn wheel(&self, dx: f32, dy: f32, now_ms: f64) {
        self.state.lock().unwrap().on_wheel(dx, dy, now_ms);
    }

    // =========================================================================
    // Render output
    // =========================================================================

    /// Copyable snapshot the presentation layer renders from
    pub fn render_info(&self) -> ScrollAreaRenderInfo {
        self.state.lock().unwrap().render_info()
    }

    /// Current scroll offsets
    pub fn scroll_offsets(&self) -> (f32, f32) {
        self.state.lock().unwrap().scroll_offsets()
    }
}

/// Create a new scroll area
///
/// # Example
///
/// ```rust,ignore
/// let area = scroll_area()
///     .scrollbar_on_scroll()
///     .slider_color(Color::GRAY)
///     .content(items);
/// ```
pub fn scroll_area<T: Clone>() -> ScrollArea<T> {
    ScrollArea::new()
}
