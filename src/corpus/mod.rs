// Corpus handling — article records and JSON file I/O.

pub mod model;
pub mod store;
