//! Model to entity mappers

mod member;
