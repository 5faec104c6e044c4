pub mod math;
pub mod activation;
pub mod dataset;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use dataset::Dataset;
pub use train::trainer::Trainer;
pub use train::train_config::TrainConfig;
pub use train::iteration_stats::IterationStats;
