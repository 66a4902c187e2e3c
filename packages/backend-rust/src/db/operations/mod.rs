pub mod practice;
pub mod words;

pub use practice::*;
pub use words::*;
