//! Custom extractors

pub mod path;

pub use path::MemberIdPath;
