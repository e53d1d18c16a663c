pub use board::BoardDim;
pub use cell::Cell;
pub use cell_dim::CellDim;
pub use dir::Dir;
pub use point::Point;

mod board;
mod cell;
mod cell_dim;
mod dir;
mod point;
