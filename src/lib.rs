pub mod arguments;
pub mod bump;
pub mod error;
pub mod git;
pub mod version;
