//! Scrollable content slot
//!
//! Content is either a static value or a producer closure over the live
//! scroll snapshot, evaluated once per render pass. A failing producer never
//! reaches the caller: the failure is logged and the previously rendered
//! value (or the initial static value) is reused for that pass.

use thiserror::Error;
use velour_core::Size;

/// Error raised by a content producer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("content producer failed: {0}")]
pub struct ContentError(pub String);

impl ContentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Live measurement and scroll values a dynamic producer renders from
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSnapshot {
    /// Outer viewport size
    pub viewport: Size,
    /// Inner content size
    pub content: Size,
    /// Current horizontal scroll offset
    pub scroll_left: f32,
    /// Current vertical scroll offset
    pub scroll_top: f32,
}

type ContentProducer<T> = Box<dyn Fn(&ScrollSnapshot) -> Result<T, ContentError> + Send + Sync>;

/// Holds the rendered content value and, optionally, the producer that
/// refreshes it each pass
pub struct ContentCell<T> {
    producer: Option<ContentProducer<T>>,
    rendered: Option<T>,
}

impl<T> Default for ContentCell<T> {
    fn default() -> Self {
        Self {
            producer: None,
            rendered: None,
        }
    }
}

impl<T: Clone> ContentCell<T> {
    /// Static content: rendered as-is every pass
    pub fn fixed(value: T) -> Self {
        Self {
            producer: None,
            rendered: Some(value),
        }
    }

    /// Dynamic content produced from the live snapshot. Any value already
    /// set stays as the fallback until the producer first succeeds.
    pub fn producer<F>(mut self, producer: F) -> Self
    where
        F: Fn(&ScrollSnapshot) -> Result<T, ContentError> + Send + Sync + 'static,
    {
        self.producer = Some(Box::new(producer));
        self
    }

    /// Evaluate one render pass and return the value to show.
    ///
    /// A producer error keeps the previous value; `None` only before any
    /// value exists at all.
    pub fn render(&mut self, snapshot: &ScrollSnapshot) -> Option<&T> {
        if let Some(producer) = &self.producer {
            match producer(snapshot) {
                Ok(value) => self.rendered = Some(value),
                Err(err) => {
                    tracing::warn!("scroll content producer failed, reusing last value: {err}");
                }
            }
        }
        self.rendered.as_ref()
    }

    /// Last rendered value without evaluating the producer
    pub fn current(&self) -> Option<&T> {
        self.rendered.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn snapshot() -> ScrollSnapshot {
        ScrollSnapshot {
            viewport: Size::new(200.0, 100.0),
            content: Size::new(400.0, 100.0),
            scroll_left: 40.0,
            scroll_top: 0.0,
        }
    }

    #[test]
    fn test_fixed_content_renders_every_pass() {
        let mut cell = ContentCell::fixed("hello".to_string());
        assert_eq!(cell.render(&snapshot()), Some(&"hello".to_string()));
        assert_eq!(cell.render(&snapshot()), Some(&"hello".to_string()));
    }

    #[test]
    fn test_producer_sees_live_values() {
        let mut cell = ContentCell::default()
            .producer(|snap: &ScrollSnapshot| Ok(format!("left={}", snap.scroll_left)));
        assert_eq!(cell.render(&snapshot()), Some(&"left=40".to_string()));
    }

    #[test]
    fn test_failure_reuses_last_rendered_value() {
        let fail = Arc::new(AtomicBool::new(false));
        let fail_flag = Arc::clone(&fail);
        let mut cell = ContentCell::default().producer(move |snap: &ScrollSnapshot| {
            if fail_flag.load(Ordering::SeqCst) {
                Err(ContentError::new("boom"))
            } else {
                Ok(format!("left={}", snap.scroll_left))
            }
        });

        assert_eq!(cell.render(&snapshot()), Some(&"left=40".to_string()));

        fail.store(true, Ordering::SeqCst);
        assert_eq!(cell.render(&snapshot()), Some(&"left=40".to_string()));

        fail.store(false, Ordering::SeqCst);
        let mut snap = snapshot();
        snap.scroll_left = 60.0;
        assert_eq!(cell.render(&snap), Some(&"left=60".to_string()));
    }

    #[test]
    fn test_failure_falls_back_to_initial_static_value() {
        let mut cell = ContentCell::fixed("initial".to_string())
            .producer(|_: &ScrollSnapshot| Err(ContentError::new("always fails")));
        assert_eq!(cell.render(&snapshot()), Some(&"initial".to_string()));
    }

    #[test]
    fn test_failure_with_no_prior_value_renders_nothing() {
        let mut cell: ContentCell<String> =
            ContentCell::default().producer(|_| Err(ContentError::new("always fails")));
        assert_eq!(cell.render(&snapshot()), None);
    }
}
