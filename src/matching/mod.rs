pub mod batch;
pub mod classifier;
pub mod matcher;
pub mod normalizer;
pub mod scorer;
pub mod tables;
