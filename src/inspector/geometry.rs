//! Screen-space geometry for inspector windows

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(origin: Position, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left() && point.x <= self.right() && point.y >= self.top() && point.y <= self.bottom()
    }

    /// Move the rect so it lies fully inside `viewport`.
    ///
    /// A rect larger than the viewport is pinned to the top-left corner.
    pub fn clamp_within(&self, viewport: Size) -> Position {
        Position {
            x: clamp_axis(self.x, viewport.width - self.width),
            y: clamp_axis(self.y, viewport.height - self.height),
        }
    }
}

fn clamp_axis(value: i32, max: i32) -> i32 {
    value.min(max).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(Position::new(10, 20), Size::new(100, 50));
        assert_eq!((rect.left(), rect.right(), rect.top(), rect.bottom()), (10, 110, 20, 70));
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let rect = Rect::new(Position::new(10, 20), Size::new(100, 50));
        assert_eq!(rect.clamp_within(Size::new(800, 600)), Position::new(10, 20));
    }

    #[test]
    fn test_clamp_both_axes() {
        let size = Size::new(380, 480);
        let viewport = Size::new(1280, 720);
        assert_eq!(
            Rect::new(Position::new(5000, 5000), size).clamp_within(viewport),
            Position::new(900, 240)
        );
        assert_eq!(
            Rect::new(Position::new(-50, -10), size).clamp_within(viewport),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_clamp_oversized_pins_to_origin() {
        let rect = Rect::new(Position::new(30, 30), Size::new(500, 500));
        assert_eq!(rect.clamp_within(Size::new(300, 300)), Position::new(0, 0));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(Position::new(0, 0), Size::new(10, 10));
        assert!(rect.contains(Position::new(10, 10)));
        assert!(!rect.contains(Position::new(11, 5)));
    }
}
