//! Resize edges and the pointer affordance derived from them.

use bitflags::bitflags;

bitflags! {
    /// Edges taking part in a resize request. A corner combines the two
    /// adjacent edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ResizeEdges: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

/// Pointer image the host should show for the current hover position.
///
/// Derived from the resize edges under the pointer so the resize affordance
/// is visible before any drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    ResizeLeft,
    ResizeRight,
    ResizeTop,
    ResizeBottom,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
}

impl CursorShape {
    pub fn from_edges(edges: ResizeEdges) -> Self {
        let left = edges.contains(ResizeEdges::LEFT);
        let right = edges.contains(ResizeEdges::RIGHT);
        let top = edges.contains(ResizeEdges::TOP);
        let bottom = edges.contains(ResizeEdges::BOTTOM);
        match (left, right, top, bottom) {
            (true, _, true, _) => Self::ResizeTopLeft,
            (_, true, true, _) => Self::ResizeTopRight,
            (true, _, _, true) => Self::ResizeBottomLeft,
            (_, true, _, true) => Self::ResizeBottomRight,
            (true, _, _, _) => Self::ResizeLeft,
            (_, true, _, _) => Self::ResizeRight,
            (_, _, true, _) => Self::ResizeTop,
            (_, _, _, true) => Self::ResizeBottom,
            _ => Self::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edges_map_to_side_cursors() {
        assert_eq!(
            CursorShape::from_edges(ResizeEdges::LEFT),
            CursorShape::ResizeLeft
        );
        assert_eq!(
            CursorShape::from_edges(ResizeEdges::BOTTOM),
            CursorShape::ResizeBottom
        );
    }

    #[test]
    fn corner_combinations_map_to_corner_cursors() {
        assert_eq!(
            CursorShape::from_edges(ResizeEdges::TOP | ResizeEdges::LEFT),
            CursorShape::ResizeTopLeft
        );
        assert_eq!(
            CursorShape::from_edges(ResizeEdges::BOTTOM | ResizeEdges::RIGHT),
            CursorShape::ResizeBottomRight
        );
    }

    #[test]
    fn empty_edges_keep_default_cursor() {
        assert_eq!(
            CursorShape::from_edges(ResizeEdges::empty()),
            CursorShape::Default
        );
    }
}
