//! Track visibility policy
//!
//! A pure transition function from the configured mode, the previous
//! visibility, and an interaction signal to the next visibility. The caller
//! owns the timing side (the debounced settle signal is delivered only when
//! its generation is still current, see [`crate::state`]).

use crate::config::Visibility;

/// Interaction signals that can change a track's visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilitySignal {
    /// Pointer entered the scroll area
    PointerEnter,
    /// Pointer left the scroll area
    PointerLeave,
    /// This axis's scroll offset changed
    OffsetChanged,
    /// No offset change on this axis within the debounce window
    ScrollSettled,
}

/// Visibility a track starts with before any interaction
pub fn initial_visible(mode: Visibility) -> bool {
    mode == Visibility::Always
}

/// Next visibility for one axis's track
pub fn next_visible(mode: Visibility, previous: bool, signal: VisibilitySignal) -> bool {
    match mode {
        Visibility::Always => true,
        Visibility::Never => false,
        Visibility::Hover => match signal {
            VisibilitySignal::PointerEnter => true,
            VisibilitySignal::PointerLeave => false,
            // Hover mode ignores scroll activity
            VisibilitySignal::OffsetChanged | VisibilitySignal::ScrollSettled => previous,
        },
        Visibility::Scroll => match signal {
            VisibilitySignal::OffsetChanged => true,
            VisibilitySignal::ScrollSettled => false,
            VisibilitySignal::PointerEnter | VisibilitySignal::PointerLeave => previous,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VisibilitySignal::*;

    #[test]
    fn test_always_and_never_are_constant() {
        for signal in [PointerEnter, PointerLeave, OffsetChanged, ScrollSettled] {
            for previous in [false, true] {
                assert!(next_visible(Visibility::Always, previous, signal));
                assert!(!next_visible(Visibility::Never, previous, signal));
            }
        }
    }

    #[test]
    fn test_hover_follows_pointer_only() {
        assert!(next_visible(Visibility::Hover, false, PointerEnter));
        assert!(!next_visible(Visibility::Hover, true, PointerLeave));
        // Scroll signals leave hover visibility alone
        assert!(next_visible(Visibility::Hover, true, OffsetChanged));
        assert!(!next_visible(Visibility::Hover, false, ScrollSettled));
    }

    #[test]
    fn test_scroll_follows_activity_only() {
        assert!(next_visible(Visibility::Scroll, false, OffsetChanged));
        assert!(!next_visible(Visibility::Scroll, true, ScrollSettled));
        // Pointer signals leave scroll visibility alone
        assert!(next_visible(Visibility::Scroll, true, PointerEnter));
        assert!(!next_visible(Visibility::Scroll, false, PointerLeave));
    }

    #[test]
    fn test_initial_visibility() {
        assert!(initial_visible(Visibility::Always));
        assert!(!initial_visible(Visibility::Hover));
        assert!(!initial_visible(Visibility::Never));
        assert!(!initial_visible(Visibility::Scroll));
    }
}
