pub mod complex;

pub use complex::{nothing, print, Complex};
