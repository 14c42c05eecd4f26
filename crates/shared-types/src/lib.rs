pub mod causelist;
pub mod config;
pub mod error;

pub use causelist::*;
pub use config::*;
pub use error::*;
