//! Viewport-driven layout mode.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Widths below this flip the layout into compact mode.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Layout state derived from the current viewport width.
///
/// Exactly 768 logical pixels is wide; only widths strictly below the
/// breakpoint are compact. There is no hysteresis band, so a width
/// crossing the breakpoint in either direction flips the mode at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Wide,
    Compact,
}

impl LayoutMode {
    /// Compute the mode for a viewport width in logical pixels.
    pub fn for_width(width: f64) -> Self {
        if width < COMPACT_BREAKPOINT_PX {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }
}

/// How the navigation shell is presented for a given layout mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarPresentation {
    /// Persistent column, collapsible to an icon rail by the user.
    #[default]
    Column,
    /// Off-canvas overlay opened from the top bar, explicitly dismissed.
    Overlay,
}

impl SidebarPresentation {
    pub fn for_mode(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Wide => Self::Column,
            LayoutMode::Compact => Self::Overlay,
        }
    }

    pub fn for_width(width: f64) -> Self {
        Self::for_mode(LayoutMode::for_width(width))
    }
}
