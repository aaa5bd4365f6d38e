// Newsprint: cleaning and descriptive analysis for an annotated news corpus
//
// This is the library root. Each module corresponds to a stage of the
// corpus-processing pipeline.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod output;
pub mod topics;
