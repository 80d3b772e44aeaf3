pub mod arena;
pub mod constants;
pub mod error;
pub mod food;
pub mod grid;
pub mod math;
pub mod motion;
pub mod scene;
pub mod snake;
pub mod types;
