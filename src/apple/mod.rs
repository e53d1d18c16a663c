pub use spawn::spawn_apple;

pub mod spawn;
