//! Step definitions for task parsing behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
