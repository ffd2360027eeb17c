pub mod error;
pub mod term;
pub mod typing;

pub mod cli;
pub mod debug;

#[macro_use]
mod utils;

// Re-export debug macros at crate level
pub use debug::*;

pub use error::{ReduceError, TypeError};
pub use term::Term;
pub use typing::{Context, Type};
