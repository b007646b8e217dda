//! Domain entities

mod member;
mod roster;

pub use member::{Member, NewMember};
pub use roster::canonical_members;
