//! Scroll area configuration
//!
//! Plain value types supplied by the caller; the component recomputes its
//! geometry from scratch whenever one of these changes.

use velour_core::Color;

/// Distance between a track's ends and the viewport edges, in pixels.
/// Keeps sliders from touching the viewport corners.
pub const SAFE_PADDING: f32 = 3.0;

/// Smallest usable slider length, in pixels. Without it a very large content
/// ratio would shrink the slider below what a pointer can grab.
pub const MIN_SLIDER_LENGTH: f32 = 20.0;

/// Track visibility modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Always show tracks (classic desktop style)
    Always,
    /// Show tracks while the pointer is over the area
    #[default]
    Hover,
    /// Never show tracks (content still scrollable)
    Never,
    /// Show a track while its axis is scrolling, dismiss shortly after
    Scroll,
}

/// Edge the horizontal track is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalEdge {
    Top,
    #[default]
    Bottom,
}

/// Edge the vertical track is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalEdge {
    Left,
    #[default]
    Right,
}

/// Configuration for scroll area appearance and behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAreaConfig {
    /// Allow horizontal scrolling and its track
    pub horizontal: bool,
    /// Allow vertical scrolling and its track
    pub vertical: bool,
    /// Edge placement of the horizontal track
    pub horizontal_edge: HorizontalEdge,
    /// Edge placement of the vertical track
    pub vertical_edge: VerticalEdge,
    /// Track visibility mode
    pub visibility: Visibility,
    /// Slider color
    pub slider_color: Color,
    /// Slider base opacity (interaction may raise the rendered value)
    pub slider_opacity: f32,
    /// Gap between a slider and its viewport edge, in pixels
    pub slider_padding: f32,
    /// Slider thickness, in pixels
    pub slider_size: f32,
}

impl Default for ScrollAreaConfig {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: true,
            horizontal_edge: HorizontalEdge::default(),
            vertical_edge: VerticalEdge::default(),
            visibility: Visibility::default(),
            // Accent blue, dimmed by the default opacity
            slider_color: Color::from_rgb8(0x33, 0x66, 0xcc),
            slider_opacity: 0.5,
            slider_padding: 4.0,
            slider_size: 6.0,
        }
    }
}

impl ScrollAreaConfig {
    /// Create config with always-visible tracks
    pub fn always_visible() -> Self {
        Self {
            visibility: Visibility::Always,
            ..Default::default()
        }
    }

    /// Create config with hover-revealed tracks
    pub fn show_on_hover() -> Self {
        Self {
            visibility: Visibility::Hover,
            ..Default::default()
        }
    }

    /// Create config with scroll-revealed tracks
    pub fn show_on_scroll() -> Self {
        Self {
            visibility: Visibility::Scroll,
            ..Default::default()
        }
    }

    /// Create config with hidden tracks
    pub fn hidden() -> Self {
        Self {
            visibility: Visibility::Never,
            ..Default::default()
        }
    }

    /// Create config with only vertical scrolling enabled
    pub fn vertical_only() -> Self {
        Self {
            horizontal: false,
            ..Default::default()
        }
    }

    /// Create config with only horizontal scrolling enabled
    pub fn horizontal_only() -> Self {
        Self {
            vertical: false,
            ..Default::default()
        }
    }

    /// Space a track reserves for the opposite axis's slider at a shared
    /// corner
    pub fn corner_reservation(&self) -> f32 {
        self.slider_padding + self.slider_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ScrollAreaConfig::default();
        assert!(config.horizontal);
        assert!(config.vertical);
        assert_eq!(config.horizontal_edge, HorizontalEdge::Bottom);
        assert_eq!(config.vertical_edge, VerticalEdge::Right);
        assert_eq!(config.visibility, Visibility::Hover);
        assert_eq!(config.slider_opacity, 0.5);
        assert_eq!(config.slider_padding, 4.0);
        assert_eq!(config.slider_size, 6.0);
    }

    #[test]
    fn test_config_presets() {
        assert_eq!(
            ScrollAreaConfig::always_visible().visibility,
            Visibility::Always
        );
        assert_eq!(
            ScrollAreaConfig::show_on_hover().visibility,
            Visibility::Hover
        );
        assert_eq!(
            ScrollAreaConfig::show_on_scroll().visibility,
            Visibility::Scroll
        );
        assert_eq!(ScrollAreaConfig::hidden().visibility, Visibility::Never);
        assert!(!ScrollAreaConfig::vertical_only().horizontal);
        assert!(!ScrollAreaConfig::horizontal_only().vertical);
    }

    #[test]
    fn test_corner_reservation() {
        let config = ScrollAreaConfig::default();
        assert_eq!(config.corner_reservation(), 10.0);
    }
}
