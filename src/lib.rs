//! Window decoration layout and pointer dispatch.
//!
//! This crate computes the clickable geometry of a window decoration (title
//! strip, buttons, resize borders) and turns raw pointer input into
//! high-level window actions. The host owns the window itself: it paints the
//! renderable areas, executes the returned [`Action`]s and repaints whatever
//! the damage callback reports.
//!
//! ```
//! use std::rc::Rc;
//! use decor_layout::{Action, LayoutEngine, Theme};
//!
//! let mut engine = LayoutEngine::new(Theme::default(), Rc::new(|_rect| {}));
//! engine.resize(800, 40);
//! engine.handle_motion(100, 10);
//! let response = engine.handle_press_event(true);
//! assert_eq!(response.action, Action::Move);
//! ```

pub mod action;
pub mod area;
pub mod button;
pub mod edges;
pub mod geometry;
pub mod layout;
pub mod theme;

pub use action::{Action, ActionResponse};
pub use area::{Area, AreaKind, LayoutError};
pub use button::{Button, ButtonKind, DamageCallback};
pub use edges::{CursorShape, ResizeEdges};
pub use geometry::{Point, Rect, Region};
pub use layout::{GrabState, LayoutEngine};
pub use theme::Theme;
