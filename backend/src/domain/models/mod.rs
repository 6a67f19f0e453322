//! Domain model types, independent of the wire DTOs in the `shared` crate.

pub mod goal;
