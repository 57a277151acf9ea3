//! Undo/redo command system

mod delta;
mod gesture;
mod history;

pub use delta::{Delta, Inverse, Reversible};
pub use gesture::Gesture;
pub use history::History;
