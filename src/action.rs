//! Actions the host must carry out in response to decoration input.

use std::fmt;

use crate::edges::ResizeEdges;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    None,
    // Drag actions
    Move,
    Resize,
    // Button actions
    Close,
    ToggleMaximize,
    Minimize,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::None => "None",
            Action::Move => "Start interactive move",
            Action::Resize => "Start interactive resize",
            Action::Close => "Close window",
            Action::ToggleMaximize => "Toggle maximize",
            Action::Minimize => "Minimize window",
        };
        write!(f, "{}", s)
    }
}

/// Action paired with the resize edges the host needs for a resize request.
///
/// `edges` is empty for every action except [`Action::Resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionResponse {
    pub action: Action,
    pub edges: ResizeEdges,
}

impl ActionResponse {
    pub const NONE: ActionResponse = ActionResponse {
        action: Action::None,
        edges: ResizeEdges::empty(),
    };

    pub fn new(action: Action) -> Self {
        Self {
            action,
            edges: ResizeEdges::empty(),
        }
    }

    pub fn resize(edges: ResizeEdges) -> Self {
        Self {
            action: Action::Resize,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_response_carries_no_edges() {
        assert_eq!(ActionResponse::NONE.action, Action::None);
        assert!(ActionResponse::NONE.edges.is_empty());
    }

    #[test]
    fn resize_response_keeps_edges() {
        let response = ActionResponse::resize(ResizeEdges::TOP | ResizeEdges::RIGHT);
        assert_eq!(response.action, Action::Resize);
        assert_eq!(response.edges, ResizeEdges::TOP | ResizeEdges::RIGHT);
    }
}
