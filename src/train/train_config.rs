use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::iteration_stats::IterationStats;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `learning_rate` — SGD step size α applied to every weight update
/// - `hidden_size`   — number of hidden units H; fixed for the run once chosen
/// - `iterations`    — total number of outer iterations (full passes over the data)
/// - `report_every`  — an `Error:` line is printed on every `report_every`-th
///                     iteration (indices `report_every - 1`, `2·report_every - 1`, …)
/// - `seed`          — seed for the weight-initialization RNG; a fixed seed
///                     makes the whole run bit-reproducible
/// - `progress_tx`   — optional channel sender; one `IterationStats` is sent
///                     per reported iteration.  If the receiver is dropped the
///                     run terminates early (clean shutdown).
/// - `stop_flag`     — optional atomic flag; when set to `true` from another
///                     thread the run terminates before the next iteration.
pub struct TrainConfig {
    pub learning_rate: f64,
    pub hidden_size: usize,
    pub iterations: usize,
    pub report_every: usize,
    pub seed: u64,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the benchmark hyperparameters (α = 0.2,
    /// H = 4, report every 10th iteration), no progress channel and no stop
    /// flag.
    pub fn new(iterations: usize, seed: u64) -> Self {
        TrainConfig {
            learning_rate: 0.2,
            hidden_size: 4,
            iterations,
            report_every: 10,
            seed,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
