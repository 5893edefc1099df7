//! Scroll area interaction state
//!
//! The stateful core behind [`crate::area::ScrollArea`]: owns the two
//! observed rects (outer viewport, inner content), the scroll offsets, and
//! per-axis track state, and re-derives both axes' geometry on every trigger
//! (scroll, resize, config change, drag move).
//!
//! Drag never writes slider geometry directly. A pointer delta is converted
//! to a scroll offset through the inverse position ratio and routed through
//! the same scroll path every other trigger uses, so the slider's position is
//! always re-derived from the one authoritative scroll offset.

use velour_core::{PointerButton, PointerEvent, Point, Rect, ScrollEvent, TimerId, TimerScheduler};

use crate::config::{
    HorizontalEdge, ScrollAreaConfig, VerticalEdge, Visibility, MIN_SLIDER_LENGTH, SAFE_PADDING,
};
use crate::content::ScrollSnapshot;
use crate::geometry::{drag_target, resolve_axis, AxisGeometry, AxisMeasure, TrackParams};
use crate::visibility::{initial_visible, next_visible, VisibilitySignal};

/// How long a scroll-revealed track stays up after the last offset change on
/// its axis, in milliseconds
pub const SCROLL_SETTLE_MS: f64 = 350.0;

// ============================================================================
// Axes
// ============================================================================

/// One of the two scroll dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Extent of a rect along this axis
    fn extent(self, rect: &Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.width(),
            Axis::Vertical => rect.height(),
        }
    }

    /// Extent of a rect perpendicular to this axis
    fn cross_extent(self, rect: &Rect) -> f32 {
        self.other().extent(rect)
    }

    /// Pointer coordinate along this axis
    fn coord(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }
}

// ============================================================================
// Per-axis track state
// ============================================================================

/// Slider interaction accent (layered on top of the visibility policy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderInteraction {
    #[default]
    Idle,
    /// Pointer is over the slider
    Hovered,
    /// Slider is being dragged
    Dragging,
}

impl SliderInteraction {
    /// Opacity added to the configured base while interacting
    pub fn accent(self) -> f32 {
        match self {
            SliderInteraction::Idle => 0.0,
            SliderInteraction::Hovered => 0.2,
            SliderInteraction::Dragging => 0.4,
        }
    }
}

/// An active drag session on one axis's slider
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Screen coordinate along the axis the next delta is measured from.
    /// Advances only when a candidate offset is applied.
    anchor: f32,
}

/// Full state of one axis's track
#[derive(Default)]
pub struct AxisTrack {
    /// Resolved geometry, replaced wholesale each recompute pass
    pub geometry: AxisGeometry,
    /// Rendered visibility per the configured policy
    pub visible: bool,
    /// Interaction accent for the slider
    pub interaction: SliderInteraction,
    drag: Option<DragSession>,
    /// Bumped on every offset change on this axis; pending settle timers
    /// carry the generation they were scheduled under
    generation: u64,
    pending_settle: Option<(TimerId, u64)>,
}

impl AxisTrack {
    fn with_visibility(mode: Visibility) -> Self {
        Self {
            visible: initial_visible(mode),
            ..Default::default()
        }
    }

    /// Whether a drag session is active on this axis
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }
}

// ============================================================================
// Pointer capture seam
// ============================================================================

/// Host-environment pointer capture.
///
/// While a drag session is active the component needs every pointer-move and
/// pointer-up in the process, not just those over the area. Hosts back this
/// with whatever their toolkit offers (`setPointerCapture`, grab, etc.).
/// Release is guaranteed: pointer-up releases, and dropping the state
/// releases anything still held.
pub trait PointerCapture: Send {
    fn acquire(&mut self, axis: Axis);
    fn release(&mut self, axis: Axis);
}

/// Result of hit testing a pointer position against the tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackHit {
    None,
    /// Over a track, outside its slider
    Track(Axis),
    /// Over a slider
    Slider(Axis),
}

type ScrollCallback = Box<dyn Fn(&ScrollEvent) + Send + Sync>;

// ============================================================================
// Scroll area state
// ============================================================================

/// The scroll area's single source of render truth
pub struct ScrollAreaState {
    config: ScrollAreaConfig,
    outer: Option<Rect>,
    inner: Option<Rect>,
    scroll_left: f32,
    scroll_top: f32,
    pointer_over: bool,
    horizontal: AxisTrack,
    vertical: AxisTrack,
    timers: TimerScheduler,
    capture: Option<Box<dyn PointerCapture>>,
    scroll_callback: Option<ScrollCallback>,
}

impl ScrollAreaState {
    pub fn new(config: ScrollAreaConfig) -> Self {
        Self {
            horizontal: AxisTrack::with_visibility(config.visibility),
            vertical: AxisTrack::with_visibility(config.visibility),
            config,
            outer: None,
            inner: None,
            scroll_left: 0.0,
            scroll_top: 0.0,
            pointer_over: false,
            timers: TimerScheduler::new(),
            capture: None,
            scroll_callback: None,
        }
    }

    pub fn config(&self) -> &ScrollAreaConfig {
        &self.config
    }

    pub fn axis(&self, axis: Axis) -> &AxisTrack {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisTrack {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Both observed rects have arrived
    pub fn is_ready(&self) -> bool {
        self.outer.is_some() && self.inner.is_some()
    }

    pub fn scroll_offsets(&self) -> (f32, f32) {
        (self.scroll_left, self.scroll_top)
    }

    /// Register the host's pointer-capture backend
    pub fn set_capture(&mut self, capture: Box<dyn PointerCapture>) {
        self.capture = Some(capture);
    }

    /// Register the external scroll callback the raw event is forwarded to
    pub fn set_scroll_callback(&mut self, callback: ScrollCallback) {
        self.scroll_callback = Some(callback);
    }

    /// Live measurement and scroll values for content producers
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            viewport: self.outer.map(|r| r.size()).unwrap_or_default(),
            content: self.inner.map(|r| r.size()).unwrap_or_default(),
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
        }
    }

    // ========================================================================
    // Measurements
    // ========================================================================

    fn measure(&self, axis: Axis) -> Option<AxisMeasure> {
        let (outer, inner) = (self.outer?, self.inner?);
        Some(AxisMeasure::new(
            axis.extent(&outer),
            axis.extent(&inner),
            axis.coord(self.scroll_left, self.scroll_top),
        ))
    }

    fn configured_on(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.config.horizontal,
            Axis::Vertical => self.config.vertical,
        }
    }

    /// Whether this axis's track sits on the far edge of the viewport
    fn at_far_edge(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.config.horizontal_edge == HorizontalEdge::Bottom,
            Axis::Vertical => self.config.vertical_edge == VerticalEdge::Right,
        }
    }

    /// Whether the opposite axis's track occupies this track's start corner
    fn other_at_start(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.config.vertical_edge == VerticalEdge::Left,
            Axis::Vertical => self.config.horizontal_edge == HorizontalEdge::Top,
        }
    }

    /// Content overflows and configuration allows scrolling on this axis
    fn axis_enabled(&self, axis: Axis) -> bool {
        self.configured_on(axis)
            && self
                .measure(axis)
                .map(|m| m.overflows() && m.outer_extent > 0.0)
                .unwrap_or(false)
    }

    /// Scrollable range along an axis (zero when content fits)
    pub fn max_scroll(&self, axis: Axis) -> f32 {
        self.measure(axis).map(|m| m.max_scroll()).unwrap_or(0.0)
    }

    /// Re-derive both axes' geometry from current measurements and config.
    /// Enabled flags are derived first so each axis's reservation sees the
    /// other's fresh state; an axis that drops out keeps no stale geometry.
    fn recompute(&mut self) {
        let enabled_h = self.axis_enabled(Axis::Horizontal);
        let enabled_v = self.axis_enabled(Axis::Vertical);

        self.horizontal.geometry = self.resolve(Axis::Horizontal, enabled_h, enabled_v);
        self.vertical.geometry = self.resolve(Axis::Vertical, enabled_v, enabled_h);
    }

    fn resolve(&self, axis: Axis, enabled: bool, other_enabled: bool) -> AxisGeometry {
        if !enabled {
            return AxisGeometry::DISABLED;
        }
        // axis_enabled() above guarantees both rects are present
        let measure = match self.measure(axis) {
            Some(m) => m,
            None => return AxisGeometry::DISABLED,
        };
        let outer = self.outer.unwrap_or(Rect::ZERO);
        let params = TrackParams {
            slider_thickness: self.config.slider_size,
            slider_padding: self.config.slider_padding,
            safe_padding: SAFE_PADDING,
            min_slider_length: MIN_SLIDER_LENGTH,
            cross_extent: axis.cross_extent(&outer),
            at_far_edge: self.at_far_edge(axis),
            other_enabled,
            other_at_start: self.other_at_start(axis),
        };
        resolve_axis(&measure, &params)
    }

    /// Record an observation of the outer viewport rect
    pub fn observe_outer(&mut self, rect: Rect) {
        let changed = match self.outer {
            Some(prev) => prev.dimensions_differ(&rect),
            None => true,
        };
        self.outer = Some(rect);
        if changed {
            self.recompute();
        }
    }

    /// Record an observation of the inner content rect
    pub fn observe_inner(&mut self, rect: Rect) {
        let changed = match self.inner {
            Some(prev) => prev.dimensions_differ(&rect),
            None => true,
        };
        self.inner = Some(rect);
        if changed {
            self.recompute();
        }
    }

    /// Seed scroll offsets from the scrollable element's current state,
    /// normally before or right as measurements first arrive. Recomputes
    /// geometry but does not touch visibility and forwards nothing.
    pub fn seed_offsets(&mut self, left: f32, top: f32) {
        self.scroll_left = left;
        self.scroll_top = top;
        self.recompute();
    }

    // ========================================================================
    // Scroll path
    // ========================================================================

    /// Handle a scroll event from the scrollable element. Every offset
    /// change funnels through here: wheel deltas, drag conversions, paging,
    /// and programmatic scrolls all arrive as this one event.
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        let changed_h = event.left != self.scroll_left;
        let changed_v = event.top != self.scroll_top;
        self.scroll_left = event.left;
        self.scroll_top = event.top;

        self.recompute();

        tracing::trace!(
            "scroll to ({:.1}, {:.1}) changed=({changed_h}, {changed_v})",
            event.left,
            event.top,
        );

        if changed_h {
            self.mark_axis_scrolled(Axis::Horizontal, event.timestamp);
        }
        if changed_v {
            self.mark_axis_scrolled(Axis::Vertical, event.timestamp);
        }

        if let Some(callback) = &self.scroll_callback {
            callback(event);
        }
    }

    /// Offset changed on `axis`: apply the reveal policy and restart the
    /// settle window under a fresh generation.
    fn mark_axis_scrolled(&mut self, axis: Axis, now_ms: f64) {
        let mode = self.config.visibility;
        let (generation, stale) = {
            let track = self.axis_mut(axis);
            track.visible = next_visible(mode, track.visible, VisibilitySignal::OffsetChanged);
            track.generation = track.generation.wrapping_add(1);
            (track.generation, track.pending_settle.take())
        };
        if let Some((timer, _)) = stale {
            self.timers.cancel(timer);
        }
        if mode != Visibility::Scroll {
            return;
        }
        let timer = self.timers.schedule(now_ms + SCROLL_SETTLE_MS);
        self.axis_mut(axis).pending_settle = Some((timer, generation));
    }

    /// Fire due settle timers. A revert only applies while its captured
    /// generation is still current; a newer scroll supersedes it.
    pub fn poll_timers(&mut self, now_ms: f64) {
        let due = self.timers.poll(now_ms);
        for timer in due {
            for axis in [Axis::Horizontal, Axis::Vertical] {
                let mode = self.config.visibility;
                let track = self.axis_mut(axis);
                let Some((pending, generation)) = track.pending_settle else {
                    continue;
                };
                if pending != timer {
                    continue;
                }
                track.pending_settle = None;
                if generation == track.generation {
                    track.visible =
                        next_visible(mode, track.visible, VisibilitySignal::ScrollSettled);
                } else {
                    tracing::trace!("stale settle timer on {axis:?} ignored");
                }
            }
        }
    }

    /// Next pending settle deadline, for hosts that schedule wakeups
    pub fn next_timer_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Clamp to the scrollable range and route through the scroll path
    pub fn scroll_to(&mut self, left: f32, top: f32, now_ms: f64) {
        let left = left.clamp(0.0, self.max_scroll(Axis::Horizontal));
        let top = top.clamp(0.0, self.max_scroll(Axis::Vertical));
        self.on_scroll(&ScrollEvent::new(left, top, now_ms));
    }

    /// Relative form of [`Self::scroll_to`]
    pub fn scroll_by(&mut self, dx: f32, dy: f32, now_ms: f64) {
        self.scroll_to(self.scroll_left + dx, self.scroll_top + dy, now_ms);
    }

    /// Wheel input for hosts that deliver deltas rather than new offsets
    pub fn on_wheel(&mut self, dx: f32, dy: f32, now_ms: f64) {
        self.scroll_by(dx, dy, now_ms);
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Swap in a new configuration: full geometry recompute, drag sessions
    /// preserved, visibility reconciled with the (possibly new) mode.
    pub fn set_config(&mut self, config: ScrollAreaConfig) {
        let mode_changed = self.config.visibility != config.visibility;
        self.config = config;
        self.recompute();

        if mode_changed {
            let pointer_over = self.pointer_over;
            for axis in [Axis::Horizontal, Axis::Vertical] {
                let visible = match config.visibility {
                    Visibility::Always => true,
                    Visibility::Never | Visibility::Scroll => false,
                    Visibility::Hover => pointer_over,
                };
                let stale = {
                    let track = self.axis_mut(axis);
                    track.visible = visible;
                    track.pending_settle.take()
                };
                if let Some((timer, _)) = stale {
                    self.timers.cancel(timer);
                }
            }
        }
    }

    // ========================================================================
    // Pointer interaction
    // ========================================================================

    /// Hit test a pointer position (viewport-local) against both tracks
    pub fn hit_test(&self, x: f32, y: f32) -> TrackHit {
        let point = Point::new(x, y);
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let geom = &self.axis(axis).geometry;
            if !geom.enabled {
                continue;
            }
            if self.slider_rect(axis, geom).contains(point) {
                return TrackHit::Slider(axis);
            }
            if self.track_rect(axis, geom).contains(point) {
                return TrackHit::Track(axis);
            }
        }
        TrackHit::None
    }

    fn track_rect(&self, axis: Axis, geom: &AxisGeometry) -> Rect {
        match axis {
            Axis::Horizontal => Rect::new(
                geom.track_offset_primary,
                geom.track_offset_cross,
                geom.track_size,
                self.config.slider_size,
            ),
            Axis::Vertical => Rect::new(
                geom.track_offset_cross,
                geom.track_offset_primary,
                self.config.slider_size,
                geom.track_size,
            ),
        }
    }

    fn slider_rect(&self, axis: Axis, geom: &AxisGeometry) -> Rect {
        match axis {
            Axis::Horizontal => Rect::new(
                geom.track_offset_primary + geom.slider_offset,
                geom.track_offset_cross,
                geom.slider_size,
                self.config.slider_size,
            ),
            Axis::Vertical => Rect::new(
                geom.track_offset_cross,
                geom.track_offset_primary + geom.slider_offset,
                self.config.slider_size,
                geom.slider_size,
            ),
        }
    }

    /// Pointer entered the scroll area
    pub fn on_pointer_enter(&mut self) {
        self.pointer_over = true;
        let mode = self.config.visibility;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let track = self.axis_mut(axis);
            track.visible = next_visible(mode, track.visible, VisibilitySignal::PointerEnter);
        }
    }

    /// Pointer left the scroll area
    pub fn on_pointer_leave(&mut self) {
        self.pointer_over = false;
        let mode = self.config.visibility;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let track = self.axis_mut(axis);
            track.visible = next_visible(mode, track.visible, VisibilitySignal::PointerLeave);
            if track.interaction == SliderInteraction::Hovered {
                track.interaction = SliderInteraction::Idle;
            }
        }
    }

    /// Pointer pressed. Starts a drag on a slider, pages on a bare track.
    /// Returns true when the press landed on scroll chrome.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }
        match self.hit_test(event.x, event.y) {
            TrackHit::Slider(axis) => {
                let anchor = axis.coord(event.x, event.y);
                let track = self.axis_mut(axis);
                track.drag = Some(DragSession { anchor });
                track.interaction = SliderInteraction::Dragging;
                if let Some(capture) = &mut self.capture {
                    capture.acquire(axis);
                }
                tracing::debug!("drag start on {axis:?} at {anchor:.1}");
                true
            }
            TrackHit::Track(axis) => {
                self.page_to(axis, event);
                true
            }
            TrackHit::None => false,
        }
    }

    /// Jump scroll so the slider centers on the pressed track position
    fn page_to(&mut self, axis: Axis, event: &PointerEvent) {
        let geom = self.axis(axis).geometry;
        let max_offset = geom.max_slider_offset();
        if max_offset <= 0.0 {
            return;
        }
        let along = axis.coord(event.x, event.y);
        let ratio = ((along - geom.track_offset_primary - geom.slider_size / 2.0) / max_offset)
            .clamp(0.0, 1.0);
        let target = ratio * self.max_scroll(axis);
        match axis {
            Axis::Horizontal => self.scroll_to(target, self.scroll_top, event.timestamp),
            Axis::Vertical => self.scroll_to(self.scroll_left, target, event.timestamp),
        }
    }

    /// Pointer moved. Advances active drags; otherwise refreshes slider
    /// hover accents.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let any_drag = self.horizontal.dragging() || self.vertical.dragging();
        if any_drag {
            for axis in [Axis::Horizontal, Axis::Vertical] {
                self.drag_move(axis, event);
            }
            return;
        }

        let hit = self.hit_test(event.x, event.y);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let hovered = hit == TrackHit::Slider(axis);
            let track = self.axis_mut(axis);
            track.interaction = if hovered {
                SliderInteraction::Hovered
            } else {
                SliderInteraction::Idle
            };
        }
    }

    fn drag_move(&mut self, axis: Axis, event: &PointerEvent) {
        let Some(session) = self.axis(axis).drag else {
            return;
        };
        let Some(measure) = self.measure(axis) else {
            return;
        };
        let coord = axis.coord(event.x, event.y);
        let geom = self.axis(axis).geometry;
        let candidate = geom.slider_offset + (coord - session.anchor);

        // Out-of-range candidates are ignored outright: the slider holds its
        // place (and the anchor holds too) until the pointer crosses back.
        let Some(target) = drag_target(&geom, &measure, candidate) else {
            return;
        };

        self.axis_mut(axis).drag = Some(DragSession { anchor: coord });
        match axis {
            Axis::Horizontal => {
                self.on_scroll(&ScrollEvent::new(target, self.scroll_top, event.timestamp))
            }
            Axis::Vertical => {
                self.on_scroll(&ScrollEvent::new(self.scroll_left, target, event.timestamp))
            }
        }
    }

    /// Pointer released: every active drag session ends and capture is
    /// released.
    pub fn on_pointer_up(&mut self, _event: &PointerEvent) {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if self.axis(axis).drag.is_none() {
                continue;
            }
            let track = self.axis_mut(axis);
            track.drag = None;
            track.interaction = SliderInteraction::Idle;
            if let Some(capture) = &mut self.capture {
                capture.release(axis);
            }
            tracing::debug!("drag end on {axis:?}");
        }
    }

    // ========================================================================
    // Render output
    // ========================================================================

    /// Copyable snapshot the presentation layer renders from
    pub fn render_info(&self) -> ScrollAreaRenderInfo {
        ScrollAreaRenderInfo {
            horizontal: self.axis_render_info(Axis::Horizontal),
            vertical: self.axis_render_info(Axis::Vertical),
            slider_color: self.config.slider_color,
            slider_thickness: self.config.slider_size,
        }
    }

    fn axis_render_info(&self, axis: Axis) -> AxisRenderInfo {
        let track = self.axis(axis);
        let geom = &track.geometry;
        let shown = geom.enabled && track.visible;
        AxisRenderInfo {
            enabled: geom.enabled,
            visible: track.visible,
            opacity: if shown {
                (self.config.slider_opacity + track.interaction.accent()).min(1.0)
            } else {
                0.0
            },
            track_size: geom.track_size,
            track_offset_primary: geom.track_offset_primary,
            track_offset_cross: geom.track_offset_cross,
            slider_size: geom.slider_size,
            slider_offset: geom.slider_offset,
        }
    }
}

impl Drop for ScrollAreaState {
    fn drop(&mut self) {
        // Process-wide capture must not outlive the component
        if let Some(capture) = &mut self.capture {
            if self.horizontal.drag.is_some() {
                capture.release(Axis::Horizontal);
            }
            if self.vertical.drag.is_some() {
                capture.release(Axis::Vertical);
            }
        }
    }
}

/// Render-ready values for one axis's track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRenderInfo {
    pub enabled: bool,
    pub visible: bool,
    /// 0 when hidden; base opacity plus the interaction accent otherwise
    pub opacity: f32,
    pub track_size: f32,
    pub track_offset_primary: f32,
    pub track_offset_cross: f32,
    pub slider_size: f32,
    pub slider_offset: f32,
}

/// Render-ready values for the whole scroll area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAreaRenderInfo {
    pub horizontal: AxisRenderInfo,
    pub vertical: AxisRenderInfo,
    pub slider_color: velour_core::Color,
    pub slider_thickness: f32,
}
