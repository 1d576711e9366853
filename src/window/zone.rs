//! Hit zones for window frame hit testing

/// Region of a window frame a point falls into
///
/// Resize zones carry their edges as explicit flags via the `resizes_*`
/// methods; a corner zone answers true for both of its edges, which is
/// what lets a corner drag adjust two axes independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitZone {
    /// Title bar band (for dragging)
    Title,
    /// Client area below the title bar
    Content,
    /// Close button at the right end of the title bar
    CloseButton,
    /// North (top) border
    ResizeN,
    /// South (bottom) border
    ResizeS,
    /// East (right) border
    ResizeE,
    /// West (left) border
    ResizeW,
    /// Northeast corner
    ResizeNE,
    /// Northwest corner
    ResizeNW,
    /// Southeast corner
    ResizeSE,
    /// Southwest corner
    ResizeSW,
}

impl HitZone {
    /// Check if this is a resize zone (border or corner)
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            HitZone::ResizeN
                | HitZone::ResizeS
                | HitZone::ResizeE
                | HitZone::ResizeW
                | HitZone::ResizeNE
                | HitZone::ResizeNW
                | HitZone::ResizeSE
                | HitZone::ResizeSW
        )
    }

    /// Check if this is a corner resize zone
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            HitZone::ResizeNE | HitZone::ResizeNW | HitZone::ResizeSE | HitZone::ResizeSW
        )
    }

    /// Does dragging this zone pull the north edge?
    #[inline]
    pub fn resizes_north(&self) -> bool {
        matches!(self, HitZone::ResizeN | HitZone::ResizeNE | HitZone::ResizeNW)
    }

    /// Does dragging this zone pull the east edge?
    #[inline]
    pub fn resizes_east(&self) -> bool {
        matches!(self, HitZone::ResizeE | HitZone::ResizeNE | HitZone::ResizeSE)
    }

    /// Does dragging this zone pull the south edge?
    #[inline]
    pub fn resizes_south(&self) -> bool {
        matches!(self, HitZone::ResizeS | HitZone::ResizeSE | HitZone::ResizeSW)
    }

    /// Does dragging this zone pull the west edge?
    #[inline]
    pub fn resizes_west(&self) -> bool {
        matches!(self, HitZone::ResizeW | HitZone::ResizeNW | HitZone::ResizeSW)
    }

    /// Get CSS cursor style for this zone
    pub fn cursor(&self) -> &'static str {
        match self {
            HitZone::Title => "move",
            HitZone::Content => "default",
            HitZone::CloseButton => "pointer",
            HitZone::ResizeN | HitZone::ResizeS => "ns-resize",
            HitZone::ResizeE | HitZone::ResizeW => "ew-resize",
            HitZone::ResizeNE | HitZone::ResizeSW => "nesw-resize",
            HitZone::ResizeNW | HitZone::ResizeSE => "nwse-resize",
        }
    }
}
