//! Track and slider geometry
//!
//! Pure per-axis functions: same inputs always produce the same outputs, and
//! degenerate inputs (content not larger than the viewport, collapsed track)
//! resolve to a disabled zeroed record instead of propagating NaN or
//! infinity.
//!
//! The coordinate convention is per axis: "primary" runs along the track's
//! length, "cross" is perpendicular to it. For the vertical track primary is
//! `top` and cross is `left`; for the horizontal track primary is `left` and
//! cross is `top`.

/// Measured lengths along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMeasure {
    /// Viewport length along this axis
    pub outer_extent: f32,
    /// Full content length along this axis
    pub inner_extent: f32,
    /// Current scroll offset along this axis
    pub scroll_offset: f32,
}

impl AxisMeasure {
    pub fn new(outer_extent: f32, inner_extent: f32, scroll_offset: f32) -> Self {
        Self {
            outer_extent,
            inner_extent,
            scroll_offset,
        }
    }

    /// Scrollable range along this axis (zero when content fits)
    pub fn max_scroll(&self) -> f32 {
        (self.inner_extent - self.outer_extent).max(0.0)
    }

    /// Whether content overflows the viewport along this axis
    pub fn overflows(&self) -> bool {
        self.inner_extent > self.outer_extent
    }
}

/// Layout parameters for one axis's track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackParams {
    /// Slider thickness
    pub slider_thickness: f32,
    /// Gap between slider and viewport edge
    pub slider_padding: f32,
    /// Distance between track ends and viewport corners
    pub safe_padding: f32,
    /// Lower bound on slider length
    pub min_slider_length: f32,
    /// Viewport extent perpendicular to this track, for cross placement
    pub cross_extent: f32,
    /// Track sits on the far edge (bottom for horizontal, right for vertical)
    pub at_far_edge: bool,
    /// The opposite axis currently shows a track
    pub other_enabled: bool,
    /// The opposite axis's track occupies this track's start-side corner
    pub other_at_start: bool,
}

/// Resolved geometry for one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisGeometry {
    /// Content overflows and the axis is configured on
    pub enabled: bool,
    /// Track length along the axis
    pub track_size: f32,
    /// Track position along the axis
    pub track_offset_primary: f32,
    /// Track position perpendicular to the axis
    pub track_offset_cross: f32,
    /// Slider length along the track
    pub slider_size: f32,
    /// Slider position within the track, `0..=track_size - slider_size`
    pub slider_offset: f32,
}

impl AxisGeometry {
    pub const DISABLED: AxisGeometry = AxisGeometry {
        enabled: false,
        track_size: 0.0,
        track_offset_primary: 0.0,
        track_offset_cross: 0.0,
        slider_size: 0.0,
        slider_offset: 0.0,
    };

    /// Largest valid slider offset
    pub fn max_slider_offset(&self) -> f32 {
        self.track_size - self.slider_size
    }
}

/// Resolve one axis's track and slider geometry.
///
/// Returns [`AxisGeometry::DISABLED`] when content does not overflow the
/// viewport or the track collapses to a non-positive length, so every
/// division below has a strictly positive denominator.
pub fn resolve_axis(measure: &AxisMeasure, params: &TrackParams) -> AxisGeometry {
    if !measure.overflows() || measure.outer_extent <= 0.0 {
        return AxisGeometry::DISABLED;
    }

    let reservation = if params.other_enabled {
        params.slider_padding + params.slider_thickness
    } else {
        0.0
    };
    let track_size = measure.outer_extent - 2.0 * params.safe_padding - reservation;
    if track_size <= 0.0 {
        return AxisGeometry::DISABLED;
    }

    let slider_size = (track_size * measure.outer_extent / measure.inner_extent)
        .max(params.min_slider_length)
        .min(track_size);

    let scroll_ratio = (measure.scroll_offset / measure.max_scroll()).clamp(0.0, 1.0);
    let slider_offset = scroll_ratio * (track_size - slider_size);

    // Shrinking alone handles a reserved corner at the track's far end; a
    // start-side reservation additionally shifts where the track begins.
    let track_offset_primary = params.safe_padding
        + if params.other_enabled && params.other_at_start {
            reservation
        } else {
            0.0
        };

    let track_offset_cross = if params.at_far_edge {
        params.cross_extent - params.slider_padding - params.slider_thickness
    } else {
        params.slider_padding
    };

    AxisGeometry {
        enabled: true,
        track_size,
        track_offset_primary,
        track_offset_cross,
        slider_size,
        slider_offset,
    }
}

/// Inverse of the slider-position ratio: convert a candidate slider offset
/// produced by a drag into the scroll offset that would place the slider
/// there.
///
/// Candidates outside `(0, max_slider_offset]` return `None` - the drag
/// simply stops advancing rather than clamping.
pub fn drag_target(
    geometry: &AxisGeometry,
    measure: &AxisMeasure,
    candidate_offset: f32,
) -> Option<f32> {
    let max_offset = geometry.max_slider_offset();
    if !geometry.enabled || max_offset <= 0.0 {
        return None;
    }
    if candidate_offset <= 0.0 || candidate_offset > max_offset {
        return None;
    }
    Some(candidate_offset / max_offset * measure.max_scroll())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn params() -> TrackParams {
        TrackParams {
            slider_thickness: 6.0,
            slider_padding: 4.0,
            safe_padding: 3.0,
            min_slider_length: 20.0,
            cross_extent: 100.0,
            at_far_edge: true,
            other_enabled: false,
            other_at_start: false,
        }
    }

    #[test]
    fn test_content_fits_resolves_disabled() {
        for inner in [50.0, 199.9, 200.0] {
            let measure = AxisMeasure::new(200.0, inner, 0.0);
            let geom = resolve_axis(&measure, &params());
            assert_eq!(geom, AxisGeometry::DISABLED, "inner={inner}");
        }
    }

    #[test]
    fn test_zero_viewport_resolves_disabled() {
        let measure = AxisMeasure::new(0.0, 100.0, 0.0);
        assert_eq!(resolve_axis(&measure, &params()), AxisGeometry::DISABLED);
    }

    #[test]
    fn test_geometry_is_always_finite() {
        let extents = [0.0, 1.0, 6.0, 100.0, 200.0, 1e6];
        for outer in extents {
            for inner in extents {
                for offset in [-50.0, 0.0, 30.0, 1e7] {
                    let measure = AxisMeasure::new(outer, inner, offset);
                    let geom = resolve_axis(&measure, &params());
                    assert!(geom.track_size.is_finite());
                    assert!(geom.slider_size.is_finite());
                    assert!(geom.slider_offset.is_finite());
                    assert!(geom.track_offset_primary.is_finite());
                    assert!(geom.track_offset_cross.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_slider_stays_within_track() {
        for inner in [201.0, 400.0, 5000.0, 1e6] {
            for offset in [0.0, 1.0, 100.0, 1e6] {
                let measure = AxisMeasure::new(200.0, inner, offset);
                let geom = resolve_axis(&measure, &params());
                assert!(geom.slider_size <= geom.track_size + EPS);
                assert!(geom.slider_offset + geom.slider_size <= geom.track_size + EPS);
                assert!(geom.slider_offset >= 0.0);
            }
        }
    }

    #[test]
    fn test_half_visible_content_gives_half_track_slider() {
        // Viewport 200x100, content 400x100, unscrolled
        let measure = AxisMeasure::new(200.0, 400.0, 0.0);
        let geom = resolve_axis(&measure, &params());

        assert!(geom.enabled);
        assert_eq!(geom.track_size, 200.0 - 2.0 * 3.0);
        assert!((geom.slider_size - geom.track_size * 0.5).abs() < EPS);
        assert_eq!(geom.slider_offset, 0.0);
    }

    #[test]
    fn test_half_scrolled_slider_sits_at_half_travel() {
        // Max scroll is 200; offset 100 is the midpoint
        let measure = AxisMeasure::new(200.0, 400.0, 100.0);
        let geom = resolve_axis(&measure, &params());
        assert!((geom.slider_offset - 0.5 * geom.max_slider_offset()).abs() < EPS);
    }

    #[test]
    fn test_scroll_ratio_clamped_when_overscrolled() {
        let measure = AxisMeasure::new(200.0, 400.0, 10_000.0);
        let geom = resolve_axis(&measure, &params());
        assert!((geom.slider_offset - geom.max_slider_offset()).abs() < EPS);

        let measure = AxisMeasure::new(200.0, 400.0, -10.0);
        let geom = resolve_axis(&measure, &params());
        assert_eq!(geom.slider_offset, 0.0);
    }

    #[test]
    fn test_minimum_slider_length_applies() {
        // 1e5 of content behind a 200px viewport: the raw ratio would give a
        // sub-pixel slider
        let measure = AxisMeasure::new(200.0, 1e5, 0.0);
        let geom = resolve_axis(&measure, &params());
        assert_eq!(geom.slider_size, 20.0);
    }

    #[test]
    fn test_other_axis_reserves_exactly_padding_plus_size() {
        let measure = AxisMeasure::new(200.0, 400.0, 0.0);
        let alone = resolve_axis(&measure, &params());
        let shared = resolve_axis(
            &measure,
            &TrackParams {
                other_enabled: true,
                ..params()
            },
        );
        assert!((alone.track_size - shared.track_size - (4.0 + 6.0)).abs() < EPS);
        // Far-end reservation leaves the start untouched
        assert_eq!(alone.track_offset_primary, shared.track_offset_primary);
    }

    #[test]
    fn test_start_side_reservation_shifts_track_start() {
        let measure = AxisMeasure::new(200.0, 400.0, 0.0);
        let geom = resolve_axis(
            &measure,
            &TrackParams {
                other_enabled: true,
                other_at_start: true,
                ..params()
            },
        );
        assert_eq!(geom.track_offset_primary, 3.0 + 10.0);
        // Track still ends safe_padding short of the viewport edge
        assert!((geom.track_offset_primary + geom.track_size - (200.0 - 3.0)).abs() < EPS);
    }

    #[test]
    fn test_cross_offset_follows_edge_placement() {
        let measure = AxisMeasure::new(200.0, 400.0, 0.0);

        let far = resolve_axis(&measure, &params());
        assert_eq!(far.track_offset_cross, 100.0 - 4.0 - 6.0);

        let near = resolve_axis(
            &measure,
            &TrackParams {
                at_far_edge: false,
                ..params()
            },
        );
        assert_eq!(near.track_offset_cross, 4.0);
    }

    #[test]
    fn test_drag_target_round_trips_scroll_offset() {
        for scroll in [1.0, 57.3, 100.0, 199.0, 200.0] {
            let measure = AxisMeasure::new(200.0, 400.0, scroll);
            let geom = resolve_axis(&measure, &params());
            let back = drag_target(&geom, &measure, geom.slider_offset)
                .expect("in-range offset should convert");
            assert!((back - scroll).abs() < 1e-2, "scroll={scroll} back={back}");
        }
    }

    #[test]
    fn test_drag_target_rejects_out_of_range_candidates() {
        let measure = AxisMeasure::new(200.0, 400.0, 0.0);
        let geom = resolve_axis(&measure, &params());
        let max = geom.max_slider_offset();

        assert_eq!(drag_target(&geom, &measure, -5.0), None);
        assert_eq!(drag_target(&geom, &measure, 0.0), None);
        assert_eq!(drag_target(&geom, &measure, max + 0.1), None);
        // The top of the range is inclusive
        let at_max = drag_target(&geom, &measure, max).unwrap();
        assert!((at_max - measure.max_scroll()).abs() < EPS);
    }

    #[test]
    fn test_drag_target_on_disabled_geometry() {
        let measure = AxisMeasure::new(200.0, 100.0, 0.0);
        let geom = resolve_axis(&measure, &params());
        assert_eq!(drag_target(&geom, &measure, 10.0), None);
    }
}
