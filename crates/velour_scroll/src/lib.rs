//! Velour Scroll Area
//!
//! A custom-styled scroll container: native scrolling chrome is hidden and
//! the component renders its own draggable slider tracks, sized and placed
//! from the ratio of visible-to-total content.
//!
//! The crate splits into:
//!
//! - [`geometry`] - pure per-axis track/slider resolution and the drag
//!   inverse transform
//! - [`visibility`] - the `always | hover | never | scroll` reveal policy
//! - [`state`] - the stateful core: measurements, offsets, drag sessions,
//!   and the debounced scroll-reveal timers
//! - [`content`] - the fallible dynamic-content slot
//! - [`area`] - the [`ScrollArea`](area::ScrollArea) component surface
//!
//! # Example
//!
//! ```rust
//! use velour_core::{Rect, ResizeEvent};
//! use velour_scroll::prelude::*;
//!
//! let area: ScrollArea<String> = scroll_area().scrollbar_always();
//! area.handle_outer_resize(&ResizeEvent::new(Rect::new(0.0, 0.0, 200.0, 100.0), 0.0));
//! area.handle_inner_resize(&ResizeEvent::new(Rect::new(0.0, 0.0, 400.0, 100.0), 0.0));
//!
//! let info = area.render_info();
//! assert!(info.horizontal.enabled);
//! assert!(!info.vertical.enabled);
//! ```

pub mod area;
pub mod config;
pub mod content;
pub mod geometry;
pub mod state;
pub mod visibility;

pub use area::{scroll_area, ScrollArea, SharedScrollAreaState};
pub use config::{
    HorizontalEdge, ScrollAreaConfig, VerticalEdge, Visibility, MIN_SLIDER_LENGTH, SAFE_PADDING,
};
pub use content::{ContentCell, ContentError, ScrollSnapshot};
pub use geometry::{drag_target, resolve_axis, AxisGeometry, AxisMeasure, TrackParams};
pub use state::{
    Axis, AxisRenderInfo, AxisTrack, PointerCapture, ScrollAreaRenderInfo, ScrollAreaState,
    SliderInteraction, TrackHit, SCROLL_SETTLE_MS,
};

/// Common imports for scroll area users
pub mod prelude {
    pub use crate::area::{scroll_area, ScrollArea};
    pub use crate::config::{HorizontalEdge, ScrollAreaConfig, VerticalEdge, Visibility};
    pub use crate::content::{ContentError, ScrollSnapshot};
    pub use crate::state::{Axis, PointerCapture, TrackHit};
}
