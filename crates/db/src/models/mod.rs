//! Domain model structs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the unsaved variant used for inserts.

pub mod employee;
