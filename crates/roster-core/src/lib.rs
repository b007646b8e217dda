//! # roster-core
//!
//! Domain layer containing the member entity, the repository port and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{canonical_members, Member, NewMember};
pub use error::DomainError;
pub use traits::{MemberRepository, RepoResult};
