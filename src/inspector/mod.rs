//! Inspector window manager
//!
//! Tracks the property-inspector windows that are currently open. There is at
//! most one window per element key; activating an element that already has a
//! window brings that window to the front instead of opening a second one.
//!
//! Windows are kept back-to-front: the last entry is the frontmost. They only
//! hold a snapshot of the element they were opened with and never own the
//! style model; edits go through the editing session.

pub mod controls;
pub mod geometry;

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::binding::SelectedElement;
use crate::constants::inspector::*;
pub use geometry::{Position, Rect, Size};

/// Creation-ordered window identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WindowId(u64);

impl WindowId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectorWindow {
    pub id: WindowId,
    /// Snapshot taken when the window was opened
    pub element: SelectedElement,
    pub position: Position,
}

/// Result of [`InspectorManager::activate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Opened(WindowId),
    /// The element already had a window; it was brought to the front
    Raised(WindowId),
}

impl Activation {
    pub fn id(self) -> WindowId {
        match self {
            Activation::Opened(id) | Activation::Raised(id) => id,
        }
    }
}

/// Pointer drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    id: WindowId,
    /// Pointer position relative to the window origin at drag start
    grab_offset: Position,
}

#[derive(Debug)]
pub struct InspectorManager {
    windows: Vec<InspectorWindow>,
    next_id: u64,
    viewport: Size,
    window_size: Size,
    drag: Option<DragState>,
}

impl InspectorManager {
    pub fn new(viewport: Size) -> Self {
        Self::with_window_size(viewport, Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    }

    pub fn with_window_size(viewport: Size, window_size: Size) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            viewport,
            window_size,
            drag: None,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport, pulling open windows back inside it
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for window in &mut self.windows {
            let clamped = Rect::new(window.position, self.window_size).clamp_within(viewport);
            if clamped != window.position {
                debug!(id = %window.id, from = ?window.position, to = ?clamped, "Re-clamped inspector to new viewport");
                window.position = clamped;
            }
        }
    }

    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Open windows, back to front
    pub fn windows(&self) -> &[InspectorWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, id: WindowId) -> Option<&InspectorWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn find_by_element(&self, element_key: &str) -> Option<&InspectorWindow> {
        self.windows.iter().find(|w| w.element.key == element_key)
    }

    pub fn frontmost(&self) -> Option<&InspectorWindow> {
        self.windows.last()
    }

    /// Element keys that currently have a window (for preview highlighting)
    pub fn open_element_keys(&self) -> Vec<&str> {
        self.windows.iter().map(|w| w.element.key.as_str()).collect()
    }

    /// Open an inspector for `element`, or raise the one already open
    pub fn activate(&mut self, element: SelectedElement) -> Activation {
        if let Some(index) = self.windows.iter().position(|w| w.element.key == element.key) {
            let window = self.windows.remove(index);
            let id = window.id;
            self.windows.push(window);
            info!(id = %id, element = %element.key, "Raised existing inspector");
            return Activation::Raised(id);
        }

        let id = WindowId(self.next_id);
        self.next_id += 1;
        let position = self.spawn_position();
        info!(id = %id, element = %element.key, x = position.x, y = position.y, "Opened inspector");
        self.windows.push(InspectorWindow {
            id,
            element,
            position,
        });
        Activation::Opened(id)
    }

    /// Where the next window appears: diagonally stacked from an anchor near
    /// the top-right corner, wrapping every few windows
    pub fn spawn_position(&self) -> Position {
        let step = (self.windows.len() % SPAWN_WRAP) as i32 * SPAWN_STEP;
        Position {
            x: (self.viewport.width - SPAWN_RIGHT_INSET - step).max(SPAWN_MIN_X),
            y: SPAWN_TOP + step,
        }
    }

    /// Bring a window to the front. Returns false if no such window exists.
    pub fn raise(&mut self, id: WindowId) -> bool {
        match self.windows.iter().position(|w| w.id == id) {
            Some(index) => {
                let window = self.windows.remove(index);
                self.windows.push(window);
                true
            }
            None => false,
        }
    }

    /// Close a window. Unknown ids are ignored.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.drag.is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
        let closed = self.windows.len() != before;
        if closed {
            info!(id = %id, "Closed inspector");
        }
        closed
    }

    /// Move a window, keeping it fully inside the viewport.
    ///
    /// Returns the position actually applied, or `None` for an unknown id.
    pub fn move_window(&mut self, id: WindowId, requested: Position) -> Option<Position> {
        let viewport = self.viewport;
        let size = self.window_size;
        let window = self.windows.iter_mut().find(|w| w.id == id)?;
        let clamped = Rect::new(requested, size).clamp_within(viewport);
        debug!(id = %id, requested = ?requested, applied = ?clamped, "Moved inspector");
        window.position = clamped;
        Some(clamped)
    }

    /// Close every window (reset or import)
    pub fn reset_all(&mut self) {
        if !self.windows.is_empty() {
            info!(count = self.windows.len(), "Closing all inspectors");
        }
        self.windows.clear();
        self.drag = None;
    }

    /// Frontmost window under the pointer
    pub fn window_at(&self, point: Position) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|w| Rect::new(w.position, self.window_size).contains(point))
            .map(|w| w.id)
    }

    /// Start dragging a window by its title bar. Any earlier drag is dropped.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Position) -> bool {
        let Some(window) = self.get(id) else {
            return false;
        };
        let grab_offset = Position::new(pointer.x - window.position.x, pointer.y - window.position.y);
        debug!(id = %id, offset = ?grab_offset, "Drag started");
        self.drag = Some(DragState { id, grab_offset });
        true
    }

    /// Follow the pointer while a drag is active
    pub fn drag_to(&mut self, pointer: Position) -> Option<Position> {
        let drag = self.drag?;
        let target = Position::new(pointer.x - drag.grab_offset.x, pointer.y - drag.grab_offset.y);
        let applied = self.move_window(drag.id, target);
        if applied.is_none() {
            self.drag = None;
        }
        applied
    }

    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(id = %drag.id, "Drag ended");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::find_element;

    fn element(key: &str) -> SelectedElement {
        SelectedElement::new(key, key, ["Color.Text"])
    }

    fn manager() -> InspectorManager {
        InspectorManager::new(Size::new(1920, 1080))
    }

    #[test]
    fn test_first_window_spawns_at_anchor() {
        let mut manager = manager();
        let id = manager.activate(element("a")).id();
        assert_eq!(manager.get(id).unwrap().position, Position::new(1920 - 420, 60));
    }

    #[test]
    fn test_activate_same_element_twice_raises() {
        let mut manager = manager();
        let first = manager.activate(element("a"));
        manager.activate(element("b"));
        let position = manager.find_by_element("a").unwrap().position;

        let second = manager.activate(element("a"));
        assert_eq!(second, Activation::Raised(first.id()));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.frontmost().unwrap().id, first.id());
        assert_eq!(manager.find_by_element("a").unwrap().position, position);
    }

    #[test]
    fn test_spawn_positions_wrap_every_fifth_window() {
        let mut manager = manager();
        let positions: Vec<Position> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|key| {
                let id = manager.activate(element(key)).id();
                manager.get(id).unwrap().position
            })
            .collect();

        for (i, position) in positions.iter().take(5).enumerate() {
            let step = i as i32 * 30;
            assert_eq!(*position, Position::new(1500 - step, 60 + step));
        }
        assert_eq!(positions[5], positions[0]);
    }

    #[test]
    fn test_spawn_x_never_below_minimum() {
        let mut manager = InspectorManager::new(Size::new(300, 600));
        let id = manager.activate(element("a")).id();
        assert_eq!(manager.get(id).unwrap().position.x, 10);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut manager = manager();
        let a = manager.activate(element("a")).id();
        manager.close(a);
        let b = manager.activate(element("a")).id();
        assert!(b > a);
    }

    #[test]
    fn test_close_and_unknown_close() {
        let mut manager = manager();
        let id = manager.activate(element("a")).id();
        assert!(manager.close(id));
        assert!(!manager.close(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_move_clamps_both_axes() {
        let mut manager = InspectorManager::with_window_size(Size::new(1280, 720), Size::new(380, 480));
        let id = manager.activate(element("a")).id();

        assert_eq!(manager.move_window(id, Position::new(4000, -300)), Some(Position::new(900, 0)));
        assert_eq!(manager.move_window(id, Position::new(-20, 9999)), Some(Position::new(0, 240)));
        assert_eq!(manager.get(id).unwrap().position, Position::new(0, 240));
    }

    #[test]
    fn test_move_unknown_is_noop() {
        let mut manager = manager();
        manager.activate(element("a"));
        let before: Vec<_> = manager.windows().iter().map(|w| w.position).collect();
        assert_eq!(manager.move_window(WindowId(99), Position::new(0, 0)), None);
        let after: Vec<_> = manager.windows().iter().map(|w| w.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shrinking_viewport_reclamps_windows() {
        let mut manager = manager();
        let id = manager.activate(element("a")).id();
        assert_eq!(manager.get(id).unwrap().position, Position::new(1500, 60));

        manager.set_viewport(Size::new(1280, 500));
        assert_eq!(manager.viewport(), Size::new(1280, 500));
        assert_eq!(manager.get(id).unwrap().position, Position::new(900, 20));
    }

    #[test]
    fn test_reset_all_clears_windows() {
        let mut manager = manager();
        manager.activate(element("a"));
        manager.activate(element("b"));
        manager.reset_all();
        assert!(manager.is_empty());
        assert!(manager.open_element_keys().is_empty());
    }

    #[test]
    fn test_element_snapshot_is_kept() {
        let mut manager = manager();
        let footer = find_element("app-footer").unwrap();
        manager.activate(footer.clone());

        let changed = SelectedElement::new("app-footer", "Footer", ["Color.Text"]);
        manager.activate(changed);
        assert_eq!(manager.find_by_element("app-footer").unwrap().element.keys, footer.keys);
    }

    #[test]
    fn test_raise_reorders() {
        let mut manager = manager();
        let a = manager.activate(element("a")).id();
        let b = manager.activate(element("b")).id();
        assert!(manager.raise(a));
        assert_eq!(manager.open_element_keys(), vec!["b", "a"]);
        assert!(manager.raise(b));
        assert!(!manager.raise(WindowId(42)));
    }

    #[test]
    fn test_drag_follows_pointer_with_grab_offset() {
        let mut manager = InspectorManager::with_window_size(Size::new(1280, 720), Size::new(380, 480));
        let id = manager.activate(element("a")).id();
        manager.move_window(id, Position::new(100, 100));

        assert_eq!(manager.window_at(Position::new(110, 105)), Some(id));
        assert!(manager.begin_drag(id, Position::new(110, 105)));
        assert_eq!(manager.drag_to(Position::new(210, 155)), Some(Position::new(200, 150)));
        // Dragging past the edge stays clamped
        assert_eq!(manager.drag_to(Position::new(5000, 155)), Some(Position::new(900, 150)));

        manager.end_drag();
        assert!(!manager.is_dragging());
        assert_eq!(manager.drag_to(Position::new(0, 0)), None);
    }

    #[test]
    fn test_closing_dragged_window_ends_drag() {
        let mut manager = manager();
        let id = manager.activate(element("a")).id();
        manager.begin_drag(id, Position::new(1510, 70));
        manager.close(id);
        assert!(!manager.is_dragging());
    }

    #[test]
    fn test_window_at_prefers_frontmost() {
        let mut manager = manager();
        let a = manager.activate(element("a")).id();
        let b = manager.activate(element("b")).id();
        // Second window overlaps the first, offset by one step
        assert_eq!(manager.window_at(Position::new(1600, 100)), Some(b));
        manager.raise(a);
        assert_eq!(manager.window_at(Position::new(1600, 100)), Some(a));
    }
}
