//! Velour Core Primitives
//!
//! This crate provides the foundational primitives for the Velour UI toolkit:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` for measurements and hit testing
//! - **Colors**: RGBA color values for component styling
//! - **Events**: pointer, scroll, and resize payloads forwarded by the host
//! - **Timers**: a deadline scheduler polled by its owner, for debounced UI
//!   transitions
//!
//! # Example
//!
//! ```rust
//! use velour_core::{Rect, TimerScheduler};
//!
//! let viewport = Rect::new(0.0, 0.0, 200.0, 100.0);
//! assert_eq!(viewport.width(), 200.0);
//!
//! let mut timers = TimerScheduler::new();
//! let id = timers.schedule(350.0);
//! assert!(timers.poll(100.0).is_empty());
//! assert_eq!(timers.poll(400.0).as_slice(), &[id]);
//! ```

pub mod color;
pub mod events;
pub mod geometry;
pub mod timer;

pub use color::Color;
pub use events::{PointerButton, PointerEvent, ResizeEvent, ScrollEvent};
pub use geometry::{Point, Rect, Size};
pub use timer::{TimerId, TimerScheduler};
