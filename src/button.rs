//! Clickable decoration buttons.
//!
//! A button only tracks interaction state (hover, pressed) and requests a
//! repaint through the damage callback when that state changes. Rendering
//! the glyph itself is up to the host.

use std::fmt;
use std::rc::Rc;

use crate::action::Action;
use crate::geometry::Rect;

/// Repaint-request sink. Receives the rectangle that needs redrawing and
/// must not re-enter the layout engine.
pub type DamageCallback = Rc<dyn Fn(Rect)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Minimize,
    ToggleMaximize,
    Close,
}

impl ButtonKind {
    /// Parse a button-order token. Unknown tokens yield `None` and produce
    /// no button.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "minimize" => Some(Self::Minimize),
            "maximize" => Some(Self::ToggleMaximize),
            "close" => Some(Self::Close),
            _ => None,
        }
    }

    /// The action fired when a button of this kind is clicked.
    pub fn action(self) -> Action {
        match self {
            Self::Minimize => Action::Minimize,
            Self::ToggleMaximize => Action::ToggleMaximize,
            Self::Close => Action::Close,
        }
    }
}

/// Interactive state of a single decoration button.
///
/// Pressed implies hover: a button that loses hover while armed drops its
/// pressed state, so releasing off the button never fires the action.
pub struct Button {
    kind: ButtonKind,
    geometry: Rect,
    hover: bool,
    pressed: bool,
    damage: DamageCallback,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("kind", &self.kind)
            .field("geometry", &self.geometry)
            .field("hover", &self.hover)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

impl Button {
    pub(crate) fn new(kind: ButtonKind, geometry: Rect, damage: DamageCallback) -> Self {
        Self {
            kind,
            geometry,
            hover: false,
            pressed: false,
            damage,
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_hover(&mut self, hover: bool) {
        if self.hover == hover {
            return;
        }
        self.hover = hover;
        if !hover {
            self.pressed = false;
        }
        (self.damage)(self.geometry);
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        if self.pressed == pressed {
            return;
        }
        self.pressed = pressed;
        if pressed {
            self.hover = true;
        }
        (self.damage)(self.geometry);
    }
}
