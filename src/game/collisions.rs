use crate::basic::{BoardDim, Cell};
use crate::snake::Snake;

/// What happens when the head moves into the next cell
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    SafeMove,
    FoodEaten,
    /// The next cell is outside the board
    WallCollision,
    /// The next cell is part of the snake, tail included
    SelfCollision,
}

impl Outcome {
    /// Whether the round ends and the game resets
    pub fn is_fatal(self) -> bool {
        matches!(self, Outcome::WallCollision | Outcome::SelfCollision)
    }
}

/// Checked in order: walls, the snake itself, the apple
pub fn find_collision(board_dim: BoardDim, snake: &Snake, apple: Cell, next_head: Cell) -> Outcome {
    if !board_dim.contains(next_head) {
        Outcome::WallCollision
    } else if snake.occupies(next_head) {
        Outcome::SelfCollision
    } else if next_head == apple {
        Outcome::FoodEaten
    } else {
        Outcome::SafeMove
    }
}
