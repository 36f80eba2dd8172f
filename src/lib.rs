//! Break free-form personal names ("Mr Fred Blogs", "Blogs, Fred") into
//! title, first, middle and last names, suffixes and nickname.

pub mod config;
pub mod error;
pub mod parser;
mod scanner;
pub mod server;
mod surname;
mod titles;
pub mod types;

pub use error::InvalidInputError;
pub use parser::parse;
pub use types::ParsedName;
