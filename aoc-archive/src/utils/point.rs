//! 2-D integer coordinates
//!
//! `y` grows downwards, matching the way puzzle grids are printed.

use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };
    pub const UP: Point = Point { x: 0, y: -1 };
    pub const DOWN: Point = Point { x: 0, y: 1 };
    pub const LEFT: Point = Point { x: -1, y: 0 };
    pub const RIGHT: Point = Point { x: 1, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Quarter turn clockwise (as drawn on screen)
    pub fn turn_right(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Quarter turn anticlockwise
    pub fn turn_left(self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub fn neighbours4(self) -> [Point; 4] {
        [
            self + Self::UP,
            self + Self::DOWN,
            self + Self::LEFT,
            self + Self::RIGHT,
        ]
    }

    pub fn neighbours8(self) -> impl Iterator<Item = Point> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| Point::new(dx, dy)))
            .filter(|d| *d != Self::ORIGIN)
            .map(move |d| self + d)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_cycle() {
        let mut facing = Point::UP;
        for expected in [Point::RIGHT, Point::DOWN, Point::LEFT, Point::UP] {
            facing = facing.turn_right();
            assert_eq!(facing, expected);
        }
        assert_eq!(Point::UP.turn_left(), Point::LEFT);
    }

    #[test]
    fn test_arithmetic() {
        let mut p = Point::new(2, -3) + Point::RIGHT * 4;
        assert_eq!(p, Point::new(6, -3));
        p += Point::DOWN;
        assert_eq!(p.manhattan(), 8);
        assert_eq!(p - p, Point::ORIGIN);
        assert_eq!(Point::ORIGIN.neighbours8().count(), 8);
    }
}
