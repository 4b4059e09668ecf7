pub mod ratios;
pub mod summary;
