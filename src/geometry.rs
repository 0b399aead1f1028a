//! Decoration-local geometry.
//!
//! Plain integer rectangles with half-open containment, plus the owned
//! rectangle collection the layout hands back for clip and damage
//! composition. The origin is the decoration's top-left corner.

/// A point in decoration-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. Width or height at or below zero means empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// One past the right-most contained column.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom-most contained row.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Smallest rectangle covering both. An empty rectangle is the identity.
    pub fn union(&self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// A collection of rectangles, queried by hit tests and damage composition.
/// Empty rectangles are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn add(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }

    /// Bounding box of the whole region; empty rect for an empty region.
    pub fn bounding_box(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::default(), |acc, rect| acc.union(*rect))
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(4, 4, 10, 10);
        assert!(rect.contains(Point::new(4, 4)));
        assert!(rect.contains(Point::new(13, 13)));
        assert!(!rect.contains(Point::new(14, 4)));
        assert!(!rect.contains(Point::new(4, 14)));
        assert!(!rect.contains(Point::new(3, 4)));
    }

    #[test]
    fn empty_rects_contain_nothing() {
        assert!(!Rect::new(5, 5, 0, 10).contains(Point::new(5, 5)));
        assert!(!Rect::new(5, 5, 10, -1).contains(Point::new(5, 5)));
        assert!(Rect::new(0, 0, -3, -3).is_empty());
    }

    #[test]
    fn union_treats_empty_as_identity() {
        let rect = Rect::new(2, 3, 4, 5);
        assert_eq!(rect.union(Rect::default()), rect);
        assert_eq!(Rect::default().union(rect), rect);
        assert_eq!(
            Rect::new(0, 0, 4, 4).union(Rect::new(10, 10, 2, 2)),
            Rect::new(0, 0, 12, 12)
        );
    }

    #[test]
    fn region_skips_empty_rects() {
        let mut region = Region::default();
        region.add(Rect::new(0, 0, 0, 40));
        assert!(region.is_empty());
        assert_eq!(region.bounding_box(), Rect::default());

        region.add(Rect::new(0, 0, 8, 8));
        region.add(Rect::new(20, 2, 4, 4));
        assert_eq!(region.rects().len(), 2);
        assert!(region.contains(Point::new(21, 3)));
        assert!(!region.contains(Point::new(10, 3)));
        assert_eq!(region.bounding_box(), Rect::new(0, 0, 24, 8));
    }
}
