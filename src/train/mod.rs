pub mod trainer;
pub mod train_config;
pub mod iteration_stats;

pub use trainer::Trainer;
pub use train_config::TrainConfig;
pub use iteration_stats::IterationStats;
