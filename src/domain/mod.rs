// Domain layer: the vehicle record shape and the built-in catalog. No external dependencies beyond std/serde.

pub mod catalog;
pub mod model;
