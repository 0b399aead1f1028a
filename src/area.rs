//! Typed decoration areas.
//!
//! The layout is an ordered list of areas; each area is a rectangle in
//! decoration-local coordinates tagged with what it reacts to. Button areas
//! exclusively own their button, and the checked accessors replace the
//! classic "undefined behavior on wrong kind" contract with a typed error.

use thiserror::Error;

use crate::button::Button;
use crate::edges::ResizeEdges;
use crate::geometry::Rect;

/// What a decoration area reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    /// Invisible drag target, e.g. the padding around the buttons.
    Move,
    /// Rendered title strip; also a drag target.
    Title,
    /// Rendered clickable button.
    Button,
    /// Border strip that starts a resize along the contained edges.
    Resize(ResizeEdges),
}

impl AreaKind {
    /// Whether the area should be painted by the host.
    pub fn is_renderable(self) -> bool {
        matches!(self, AreaKind::Title | AreaKind::Button)
    }

    /// Whether pressing the area starts an interactive move.
    pub fn is_move_target(self) -> bool {
        matches!(self, AreaKind::Move | AreaKind::Title)
    }

    pub fn resize_edges(self) -> Option<ResizeEdges> {
        match self {
            AreaKind::Resize(edges) => Some(edges),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("area of kind {0:?} does not hold a button")]
    WrongAreaKind(AreaKind),
}

/// A positioned, typed region of the decoration.
#[derive(Debug)]
pub struct Area {
    kind: AreaKind,
    geometry: Rect,
    /// Present if and only if `kind == AreaKind::Button`.
    button: Option<Button>,
}

impl Area {
    /// A plain typed rectangle. Not for buttons; use [`Area::with_button`].
    pub(crate) fn new(kind: AreaKind, geometry: Rect) -> Self {
        debug_assert!(!matches!(kind, AreaKind::Button));
        Self {
            kind,
            geometry,
            button: None,
        }
    }

    /// A button-carrying rectangle; the area geometry is the button's.
    pub(crate) fn with_button(button: Button) -> Self {
        Self {
            kind: AreaKind::Button,
            geometry: button.geometry(),
            button: Some(button),
        }
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    /// The area's button. Fails with [`LayoutError::WrongAreaKind`] unless
    /// the area is a button area.
    pub fn as_button(&self) -> Result<&Button, LayoutError> {
        self.button
            .as_ref()
            .ok_or(LayoutError::WrongAreaKind(self.kind))
    }

    pub(crate) fn as_button_mut(&mut self) -> Result<&mut Button, LayoutError> {
        self.button
            .as_mut()
            .ok_or(LayoutError::WrongAreaKind(self.kind))
    }
}
