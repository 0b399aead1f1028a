//! Decoration sizing constants and button configuration.
//!
//! The theme is an explicit value handed to the layout engine at
//! construction. When it changes, the engine has to be rebuilt.

use std::time::Duration;

/// Read-only sizing and configuration for a decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Height of the title strip, excluding the top border.
    pub titlebar_height: i32,
    /// Thickness of the resize border strips on all four edges.
    pub border_size: i32,
    pub button_width: i32,
    pub button_height: i32,
    /// Padding between buttons and from the trailing edge.
    pub button_padding: i32,
    /// Whitespace-separated button tokens, placed left to right.
    ///
    /// Recognized tokens are `minimize`, `maximize` and `close`; anything
    /// else produces no button.
    pub button_order: String,
    /// Two title presses within this window toggle maximize.
    pub double_click_timeout: Duration,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            titlebar_height: 24,
            border_size: 4,
            button_width: 18,
            button_height: 18,
            button_padding: 4,
            button_order: "minimize maximize close".to_string(),
            double_click_timeout: Duration::from_millis(500),
        }
    }
}
