use std::sync::atomic::Ordering;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::activation::relu::{relu, relu_derivative};
use crate::dataset::Dataset;
use crate::math::matrix::Matrix;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

/// Owns the two weight matrices of a 3 → H → 1 network and trains them with
/// online SGD over a fixed dataset.
///
/// The hidden layer is rectified, the output layer is linear, and the loss is
/// the plain squared error. Weight updates are applied immediately after each
/// example, so within one iteration the update from example `i` is visible to
/// example `i + 1`; reordering the dataset rows therefore changes the result.
pub struct Trainer {
    dataset: Dataset,
    config: TrainConfig,
    weights_0_1: Matrix,
    weights_1_2: Matrix,
}

impl Trainer {
    /// Initializes both weight matrices with values uniform in [-1, 1) drawn
    /// from an RNG seeded with `config.seed`.
    ///
    /// Shapes: `weights_0_1` is (features × H), `weights_1_2` is (H × 1).
    ///
    /// # Panics
    /// Panics if `config.hidden_size` or `config.report_every` is zero.
    pub fn new(dataset: Dataset, config: TrainConfig) -> Trainer {
        assert!(config.hidden_size > 0, "hidden_size must be at least 1");
        assert!(config.report_every > 0, "report_every must be at least 1");

        let mut rng = StdRng::seed_from_u64(config.seed);
        let weights_0_1 = Matrix::uniform(dataset.feature_count(), config.hidden_size, &mut rng);
        let weights_1_2 = Matrix::uniform(config.hidden_size, 1, &mut rng);

        Trainer {
            dataset,
            config,
            weights_0_1,
            weights_1_2,
        }
    }

    pub fn weights_0_1(&self) -> &Matrix {
        &self.weights_0_1
    }

    pub fn weights_1_2(&self) -> &Matrix {
        &self.weights_1_2
    }

    /// One iteration: a full pass over the dataset in row order, updating the
    /// weights after every example. Returns the squared error accumulated
    /// across all examples of this pass.
    pub fn step(&mut self) -> f64 {
        let alpha = self.config.learning_rate;
        let mut squared_error = 0.0;

        for i in 0..self.dataset.len() {
            let layer_0 = Matrix::from_data(vec![self.dataset.input(i).to_vec()]);
            let target = Matrix::from_data(vec![vec![self.dataset.target(i)]]);

            // Forward pass: (1×3)·(3×H) = (1×H), then (1×H)·(H×1) = (1×1).
            let layer_1 = (layer_0.clone() * self.weights_0_1.clone()).map(relu);
            let layer_2 = layer_1.clone() * self.weights_1_2.clone();

            let layer_2_delta = layer_2 - target;
            squared_error += layer_2_delta.map(|x| x * x).sum();

            // The constant 2 from differentiating the squared error is folded
            // into the learning rate.
            let layer_1_delta = (layer_2_delta.clone() * self.weights_1_2.transpose())
                .hadamard(&layer_1.map(relu_derivative));

            self.weights_1_2 = self.weights_1_2.clone()
                - (layer_1.transpose() * layer_2_delta).map(|x| x * alpha);
            self.weights_0_1 = self.weights_0_1.clone()
                - (layer_0.transpose() * layer_1_delta).map(|x| x * alpha);
        }

        squared_error
    }

    /// Runs `config.iterations` iterations, printing `Error:<value>` on every
    /// `config.report_every`-th one, and returns the squared error of the last
    /// completed iteration.
    ///
    /// # Early termination
    /// The loop breaks early if:
    /// - the `progress_tx` receiver has been dropped, **or**
    /// - `config.stop_flag` is set to `true`.
    pub fn run(&mut self) -> f64 {
        let total = self.config.iterations;
        let mut last_error = 0.0;
        let mut warned_non_finite = false;

        for iteration in 0..total {
            if let Some(ref flag) = self.config.stop_flag {
                if flag.load(Ordering::Relaxed) {
                    break;
                }
            }

            last_error = self.step();

            if !last_error.is_finite() && !warned_non_finite {
                eprintln!("warning: squared error became non-finite at iteration {iteration}");
                warned_non_finite = true;
            }

            if iteration % self.config.report_every == self.config.report_every - 1 {
                println!("Error:{}", last_error);

                if let Some(ref tx) = self.config.progress_tx {
                    let stats = IterationStats {
                        iteration,
                        total_iterations: total,
                        squared_error: last_error,
                    };
                    // If the receiver has been dropped, stop training.
                    if tx.send(stats).is_err() {
                        break;
                    }
                }
            }
        }

        last_error
    }
}
