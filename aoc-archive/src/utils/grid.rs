//! Dense rectangular grids

use super::point::Point;
use aoc_solver::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from text lines, mapping each byte through `cell`.
    ///
    /// All lines must have the same length.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(u8) -> Option<T>,
    {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (row, line) in input.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "row {} has width {}, expected {}",
                        row + 1,
                        line.len(),
                        w
                    )));
                }
                Some(_) => {}
            }
            for (col, byte) in line.bytes().enumerate() {
                let value = cell(byte).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "unexpected '{}' at row {}, column {}",
                        byte as char,
                        row + 1,
                        col + 1
                    ))
                })?;
                cells.push(value);
            }
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        if self.contains(p) {
            self.cells.get(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        if self.contains(p) {
            self.cells.get_mut(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Every coordinate in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.points().zip(self.cells.iter())
    }

    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let grid = Grid::parse("#.\n.#\n..", |b| match b {
            b'#' => Some(true),
            b'.' => Some(false),
            _ => None,
        })
        .unwrap();

        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid.get(Point::new(1, 1)), Some(&true));
        assert_eq!(grid.get(Point::new(2, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
        assert_eq!(grid.count(|c| *c), 2);
        assert_eq!(grid.iter().filter(|(_, c)| **c).map(|(p, _)| p).last(), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Grid::parse("###\n##", Some);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
