//! Decoration layout construction, hit-testing and input dispatch.
//!
//! [`LayoutEngine`] owns the ordered area list, rebuilds it on every
//! [`resize`](LayoutEngine::resize) and runs the press/release/motion/focus
//! state machine on top of it. The caller executes the returned actions;
//! the engine only classifies input.

use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::action::{Action, ActionResponse};
use crate::area::{Area, AreaKind};
use crate::button::{Button, ButtonKind, DamageCallback};
use crate::edges::{CursorShape, ResizeEdges};
use crate::geometry::{Point, Rect, Region};
use crate::theme::Theme;

/// Drag mode of the engine. `Idle` is re-entered after every release or
/// focus loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabState {
    #[default]
    Idle,
    Moving,
    Resizing(ResizeEdges),
}

/// Armed double-click window for a specific move-target area.
///
/// At most one window is armed at a time; arming replaces any previous one.
/// The deadline is checked on the next press, so nothing runs concurrently
/// with the engine.
#[derive(Debug, Clone, Copy, Default)]
struct DoubleClick {
    armed: Option<(Instant, usize)>,
}

impl DoubleClick {
    fn arm(&mut self, now: Instant, timeout: Duration, area: usize) {
        self.armed = Some((now + timeout, area));
    }

    fn cancel(&mut self) {
        self.armed = None;
    }

    /// Whether a window armed for `area` is still open at `now`. Always
    /// disarms.
    fn consume(&mut self, now: Instant, area: usize) -> bool {
        match self.armed.take() {
            Some((deadline, armed_area)) => armed_area == area && now <= deadline,
            None => false,
        }
    }
}

/// Owns the decoration areas and dispatches pointer input.
///
/// All methods run synchronously on the host's input thread. Borrowed views
/// handed out by [`get_renderable_areas`](LayoutEngine::get_renderable_areas)
/// are invalidated by the next [`resize`](LayoutEngine::resize).
pub struct LayoutEngine {
    theme: Theme,
    damage: DamageCallback,
    areas: Vec<Area>,
    width: i32,
    height: i32,
    grab: GrabState,
    grab_origin: Point,
    current_input: Option<Point>,
    double_click: DoubleClick,
    cursor: CursorShape,
}

impl fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("areas", &self.areas)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("grab", &self.grab)
            .field("current_input", &self.current_input)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl LayoutEngine {
    /// Create an engine for the given theme. The layout is empty until the
    /// first [`resize`](LayoutEngine::resize).
    pub fn new(theme: Theme, damage: DamageCallback) -> Self {
        Self {
            theme,
            damage,
            areas: Vec::new(),
            width: 0,
            height: 0,
            grab: GrabState::Idle,
            grab_origin: Point::default(),
            current_input: None,
            double_click: DoubleClick::default(),
            cursor: CursorShape::default(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn grab_state(&self) -> GrabState {
        self.grab
    }

    /// Pointer position captured when the active grab started.
    pub fn grab_origin(&self) -> Option<Point> {
        (self.grab != GrabState::Idle).then_some(self.grab_origin)
    }

    /// Last known pointer position, absent when the pointer is not tracked.
    pub fn current_input(&self) -> Option<Point> {
        self.current_input
    }

    /// Pointer image for the current hover position, updated by
    /// [`handle_motion`](LayoutEngine::handle_motion).
    pub fn current_cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Regenerate the layout for the given decoration box.
    ///
    /// Past grab provenance and any armed double-click are discarded, since
    /// they refer to stale geometry. Non-positive dimensions clamp to an
    /// empty layout.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.double_click.cancel();
        self.grab = GrabState::Idle;
        self.areas.clear();
        self.width = width.max(0);
        self.height = height.max(0);

        if self.width == 0 || self.height == 0 {
            debug!(width, height, "degenerate decoration size, layout cleared");
            return;
        }

        let (border_x, border_y) = self.effective_borders();
        // The title strip may not reach into the bottom border strip on
        // very short decorations.
        let title_height = self
            .theme
            .titlebar_height
            .min(self.height - 2 * border_y);
        if title_height > 0 {
            let (button_box, buttons) = self.create_buttons(border_x, border_y, title_height);

            let title = Rect::new(border_x, border_y, button_box.x - border_x, title_height);
            // Paint order is push order: title below, buttons on top.
            // Hit-testing walks the list in reverse, so buttons win ties
            // against the padding area underneath them.
            if !button_box.is_empty() {
                self.areas.push(Area::new(AreaKind::Move, button_box));
            }
            self.areas.push(Area::new(AreaKind::Title, title));
            self.areas.extend(buttons);
        }

        // Border strips occupy the outer frame only. Left/right are inset
        // vertically so the strips never overlap; a corner point therefore
        // hits the top/bottom strip, while the returned edges always combine
        // both axes (see `calculate_resize_edges`). Degenerate strips are
        // dropped outright.
        let strips = [
            (ResizeEdges::TOP, Rect::new(0, 0, self.width, border_y)),
            (
                ResizeEdges::BOTTOM,
                Rect::new(0, self.height - border_y, self.width, border_y),
            ),
            (
                ResizeEdges::LEFT,
                Rect::new(0, border_y, border_x, self.height - 2 * border_y),
            ),
            (
                ResizeEdges::RIGHT,
                Rect::new(
                    self.width - border_x,
                    border_y,
                    border_x,
                    self.height - 2 * border_y,
                ),
            ),
        ];
        for (edges, strip) in strips {
            if !strip.is_empty() {
                self.areas.push(Area::new(AreaKind::Resize(edges), strip));
            }
        }

        let region = self.calculate_region();
        (self.damage)(region.bounding_box());
        debug!(
            width = self.width,
            height = self.height,
            areas = self.areas.len(),
            "decoration layout rebuilt"
        );
    }

    /// Per-axis border thickness, clamped so the opposing strips of a thin
    /// decoration split the space instead of overlapping.
    fn effective_borders(&self) -> (i32, i32) {
        let border = self.theme.border_size;
        (border.min(self.width / 2), border.min(self.height / 2))
    }

    /// Create the button areas from the configured order, right-aligned in
    /// the title strip, and return their combined bounding box. Buttons are
    /// omitted entirely when the strip cannot fit them.
    fn create_buttons(&self, border_x: i32, border_y: i32, title_height: i32) -> (Rect, Vec<Area>) {
        let mut kinds: Vec<ButtonKind> = self
            .theme
            .button_order
            .split_whitespace()
            .filter_map(|token| {
                let kind = ButtonKind::from_token(token);
                if kind.is_none() {
                    debug!(token, "unknown button-order token skipped");
                }
                kind
            })
            .collect();

        let per_button = self.theme.button_width + self.theme.button_padding;
        let mut total_width = kinds.len() as i32 * per_button;
        if total_width > self.width - 2 * border_x || self.theme.button_height > title_height {
            if !kinds.is_empty() {
                debug!(
                    width = self.width,
                    title_height, "buttons do not fit the title strip, omitted"
                );
            }
            kinds.clear();
            total_width = 0;
        }

        let start_x = self.width - border_x - total_width;
        let y = border_y + (title_height - self.theme.button_height) / 2;

        let mut buttons = Vec::with_capacity(kinds.len());
        let mut x = start_x;
        for kind in kinds {
            let geometry = Rect::new(x, y, self.theme.button_width, self.theme.button_height);
            let button = Button::new(kind, geometry, Rc::clone(&self.damage));
            buttons.push(Area::with_button(button));
            x += per_button;
        }

        let button_box = Rect::new(start_x, border_y, total_width, title_height);
        (button_box, buttons)
    }

    /// The areas the host must paint, bottom-most first.
    pub fn get_renderable_areas(&self) -> Vec<&Area> {
        self.areas
            .iter()
            .filter(|area| area.kind().is_renderable())
            .collect()
    }

    /// Union of all area geometries, for clip/damage composition.
    pub fn calculate_region(&self) -> Region {
        let mut region = Region::default();
        for area in &self.areas {
            region.add(area.geometry());
        }
        region
    }

    /// Top-most area containing `point`, if any.
    fn find_area_at(&self, point: Point) -> Option<usize> {
        self.areas
            .iter()
            .rposition(|area| area.geometry().contains(point))
    }

    fn find_button_at(&self, point: Point) -> Option<usize> {
        self.find_area_at(point)
            .filter(|&idx| self.areas[idx].kind() == AreaKind::Button)
    }

    /// Resize edges under the tracked pointer, combining both axes at
    /// corners. Empty when the pointer is outside the border frame.
    pub fn calculate_resize_edges(&self) -> ResizeEdges {
        let Some(point) = self.current_input else {
            return ResizeEdges::empty();
        };
        if !Rect::new(0, 0, self.width, self.height).contains(point) {
            return ResizeEdges::empty();
        }

        let (border_x, border_y) = self.effective_borders();
        let mut edges = ResizeEdges::empty();
        if point.x < border_x {
            edges |= ResizeEdges::LEFT;
        }
        if point.x >= self.width - border_x {
            edges |= ResizeEdges::RIGHT;
        }
        if point.y < border_y {
            edges |= ResizeEdges::TOP;
        }
        if point.y >= self.height - border_y {
            edges |= ResizeEdges::BOTTOM;
        }
        edges
    }

    /// Track the pointer at `(x, y)`.
    ///
    /// Outside a grab this drives button hover state (with damage on every
    /// transition) and the cursor affordance; during a grab it only records
    /// the position, from which the caller derives move/resize deltas
    /// together with [`grab_origin`](LayoutEngine::grab_origin). Always
    /// returns [`Action::None`].
    pub fn handle_motion(&mut self, x: i32, y: i32) -> ActionResponse {
        let point = Point::new(x, y);
        let previous = self.current_input.replace(point);

        if self.grab == GrabState::Idle {
            self.update_hover(previous, point);
            self.cursor = CursorShape::from_edges(self.calculate_resize_edges());
        }

        ActionResponse::NONE
    }

    /// Move hover from the button under `previous` to the button under
    /// `current`, if they differ. At most one button is hovered at a time.
    fn update_hover(&mut self, previous: Option<Point>, current: Point) {
        let old = previous.and_then(|point| self.find_button_at(point));
        let new = self.find_button_at(current);

        if old != new
            && let Some(idx) = old
            && let Ok(button) = self.areas[idx].as_button_mut()
        {
            button.set_hover(false);
        }
        if let Some(idx) = new
            && let Ok(button) = self.areas[idx].as_button_mut()
        {
            button.set_hover(true);
        }
    }

    /// Interpret a press (`pressed == true`) or release at the tracked
    /// pointer position and return the action the host must carry out.
    pub fn handle_press_event(&mut self, pressed: bool) -> ActionResponse {
        self.handle_press_at(pressed, Instant::now())
    }

    fn handle_press_at(&mut self, pressed: bool, now: Instant) -> ActionResponse {
        if pressed {
            self.handle_press(now)
        } else {
            self.handle_release()
        }
    }

    fn handle_press(&mut self, now: Instant) -> ActionResponse {
        if self.grab != GrabState::Idle {
            return ActionResponse::NONE;
        }
        let Some(point) = self.current_input else {
            return ActionResponse::NONE;
        };
        let Some(idx) = self.find_area_at(point) else {
            return ActionResponse::NONE;
        };

        match self.areas[idx].kind() {
            AreaKind::Resize(_) => {
                let edges = self.calculate_resize_edges();
                self.grab = GrabState::Resizing(edges);
                self.grab_origin = point;
                debug!(?edges, x = point.x, y = point.y, "resize grab started");
                ActionResponse::resize(edges)
            }
            AreaKind::Move | AreaKind::Title => {
                if self.double_click.consume(now, idx) {
                    debug!("double-click on title, toggling maximize");
                    return ActionResponse::new(Action::ToggleMaximize);
                }
                self.double_click
                    .arm(now, self.theme.double_click_timeout, idx);
                self.grab = GrabState::Moving;
                self.grab_origin = point;
                debug!(x = point.x, y = point.y, "move grab started");
                ActionResponse::new(Action::Move)
            }
            AreaKind::Button => {
                // Buttons act on release, not press.
                if let Ok(button) = self.areas[idx].as_button_mut() {
                    button.set_pressed(true);
                }
                ActionResponse::NONE
            }
        }
    }

    fn handle_release(&mut self) -> ActionResponse {
        if self.grab != GrabState::Idle {
            debug!(grab = ?self.grab, "grab released");
            self.grab = GrabState::Idle;
            return ActionResponse::NONE;
        }

        if let Some(point) = self.current_input
            && let Some(idx) = self.find_button_at(point)
            && let Ok(button) = self.areas[idx].as_button_mut()
            && button.is_pressed()
        {
            button.set_pressed(false);
            return ActionResponse::new(button.kind().action());
        }

        // Release away from an armed button cancels the click.
        self.clear_pressed();
        ActionResponse::NONE
    }

    /// Tear down all interaction state: grab, hover, pressed buttons, the
    /// double-click window and the tracked pointer position.
    pub fn handle_focus_lost(&mut self) {
        if self.grab != GrabState::Idle {
            debug!(grab = ?self.grab, "grab dropped on focus loss");
        }
        self.grab = GrabState::Idle;
        self.double_click.cancel();
        self.current_input = None;
        self.cursor = CursorShape::Default;
        for area in &mut self.areas {
            if let Ok(button) = area.as_button_mut() {
                // clearing hover also disarms a pressed button
                button.set_hover(false);
            }
        }
    }

    fn clear_pressed(&mut self) {
        for area in &mut self.areas {
            if let Ok(button) = area.as_button_mut() {
                button.set_pressed(false);
            }
        }
    }
}
