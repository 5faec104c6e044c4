use serde::{Serialize, Deserialize};

/// Progress record emitted by `Trainer::run`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the run sends
/// one `IterationStats` value for every reported iteration, alongside the
/// `Error:` line it prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationStats {
    /// 0-based iteration index (9, 19, 29, … with the default report interval).
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Squared error accumulated over all examples in this iteration.
    pub squared_error: f64,
}
