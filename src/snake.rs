use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside a `grid_size` square.
    #[must_use]
    pub fn is_within_bounds(self, grid_size: u16) -> bool {
        let upper = i32::from(grid_size);
        self.x >= 0 && self.y >= 0 && self.x < upper && self.y < upper
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

/// Snake body, head first.
///
/// Always holds at least one segment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the straight starting snake, head in the grid centre, tail to the left.
    #[must_use]
    pub fn initial(grid_size: u16) -> Self {
        let centre = i32::from(grid_size / 2);
        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Position::new(centre - offset as i32, centre))
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if a head moving to `candidate` would hit the body.
    ///
    /// The tail is excluded: it leaves its cell on the same tick the head
    /// arrives.
    #[must_use]
    pub fn would_collide(&self, candidate: Position) -> bool {
        let keep = self.body.len() - 1;
        self.body.iter().take(keep).any(|segment| *segment == candidate)
    }

    /// Moves forward onto `head`, dropping the tail.
    pub fn advance(&mut self, head: Position) {
        self.body.push_front(head);
        let _ = self.body.pop_back();
    }

    /// Moves forward onto `head`, keeping the tail.
    pub fn grow(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Returns true when two segments share a cell.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .any(|(index, segment)| self.body.iter().skip(index + 1).any(|other| other == segment))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns the segments as an owned vector, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }
}
