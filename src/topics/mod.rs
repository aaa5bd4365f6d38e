// Topic taxonomy — the canonical 8-topic set and the label normalizer.

pub mod canon;
pub mod clean;
pub mod normalize;
