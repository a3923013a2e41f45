use std::collections::VecDeque;

use super::types::{Direction, Point};

/// Ordered body, head at the front. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<Point>,
    pub direction: Direction,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start_pos);
        Self { body, direction }
    }

    /// Builds a snake from explicit segments, head first. Returns `None` for an empty body.
    pub fn from_segments(segments: &[Point], direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            direction,
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
    }

    /// Drops the last segment unless it is the only one left.
    pub fn pop_tail(&mut self) -> Option<Point> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_single_cell() {
        let snake = Snake::new(Point::new(16, 12), Direction::Right);
        assert_eq!(snake.segments().count(), 1);
        assert_eq!(snake.head(), Point::new(16, 12));
    }

    #[test]
    fn test_push_and_pop_keep_order() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right);
        snake.push_head(Point::new(6, 5));
        assert_eq!(snake.head(), Point::new(6, 5));
        let cells: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(cells, vec![Point::new(6, 5), Point::new(5, 5)]);
        assert_eq!(snake.pop_tail(), Some(Point::new(5, 5)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.segments().count(), 1);
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(Snake::from_segments(&[], Direction::Up).is_none());
        let snake = Snake::from_segments(&[Point::new(1, 1), Point::new(1, 2)], Direction::Up).unwrap();
        assert!(snake.occupies(Point::new(1, 2)));
        assert!(!snake.occupies(Point::new(2, 2)));
    }
}
