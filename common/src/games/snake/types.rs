#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step on the grid; `y` grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Bounded grid of `width x height` cells with wrap-around arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: i32,
    pub height: i32,
}

impl FieldSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    pub fn is_out_of_bounds(&self, point: Point) -> bool {
        !self.contains(point)
    }

    pub fn wrap(&self, point: Point) -> Point {
        Point::new(
            point.x.rem_euclid(self.width),
            point.y.rem_euclid(self.height),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// Row-major iteration over every cell of the field.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_checks_both_axes() {
        let field = FieldSize::new(32, 24);
        assert!(field.contains(Point::new(0, 0)));
        assert!(field.contains(Point::new(31, 23)));
        assert!(!field.contains(Point::new(32, 5)));
        assert!(!field.contains(Point::new(5, 24)));
        assert!(!field.contains(Point::new(-1, 5)));
        assert!(field.is_out_of_bounds(Point::new(5, -1)));
    }

    #[test]
    fn test_wrap_moves_to_opposite_edge() {
        let field = FieldSize::new(32, 24);
        assert_eq!(field.wrap(Point::new(32, 5)), Point::new(0, 5));
        assert_eq!(field.wrap(Point::new(-1, 5)), Point::new(31, 5));
        assert_eq!(field.wrap(Point::new(7, -1)), Point::new(7, 23));
        assert_eq!(field.wrap(Point::new(7, 24)), Point::new(7, 0));
        assert_eq!(field.wrap(Point::new(3, 4)), Point::new(3, 4));
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Right));
    }

    #[test]
    fn test_cells_covers_whole_field() {
        let field = FieldSize::new(4, 3);
        let cells: Vec<Point> = field.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[11], Point::new(3, 2));
    }
}
