//! [Crunch](https://github.com/BinomialLLC/crunch) files, including Unity's fork.
//!
//! The Crunch stream is owned by its decoder, only the fixed header prefix is read here.
pub mod reader;
pub mod types;

pub use reader::CrnReader;
