//! Entity <-> Model mappers

mod role;
mod user;
