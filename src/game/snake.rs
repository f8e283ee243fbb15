use std::collections::VecDeque;

use super::action::Direction;
use super::grid::{Grid, Position};

/// Head positions remembered for the trail effect unless configured otherwise
const DEFAULT_TRAIL_CAPACITY: usize = 20;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    grow_pending: bool,
    /// Recent head positions, oldest first
    trail: VecDeque<Position>,
    trail_capacity: usize,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            direction,
            grow_pending: false,
            trail: VecDeque::new(),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self {
            body,
            direction,
            grow_pending: false,
            trail: VecDeque::new(),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self.trail.truncate(capacity);
        self
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if a position is covered by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance one cell in the current direction.
    ///
    /// The tail is kept instead of dropped when growth is pending, which
    /// lengthens the snake by exactly one segment.
    pub fn move_forward(&mut self) {
        let old_head = self.head();

        if self.trail_capacity > 0 {
            if self.trail.len() == self.trail_capacity {
                self.trail.pop_front();
            }
            self.trail.push_back(old_head);
        }

        self.body.insert(0, old_head.moved_in_direction(self.direction));

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop();
        }
    }

    /// Steer the snake; a request to reverse onto itself is ignored
    pub fn change_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Schedule one segment of growth for the next move
    pub fn eat_food(&mut self) {
        self.grow_pending = true;
    }

    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    /// What the head has run into, if anything.
    ///
    /// Meant to be called after `move_forward`, so the head is compared with
    /// every remaining segment.
    pub fn collision(&self, grid: Grid) -> Option<CollisionType> {
        let head = self.head();

        if !grid.contains(head) {
            Some(CollisionType::Wall)
        } else if self.collides_with_body(head) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        }
    }

    pub fn check_collision(&self, grid: Grid) -> bool {
        self.collision(grid).is_some()
    }

    pub fn trail(&self) -> &VecDeque<Position> {
        &self.trail
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
