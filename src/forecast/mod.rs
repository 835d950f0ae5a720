pub mod day;
pub mod fallback;
pub mod normalizer;
pub mod report;
