/// A fixed, ordered set of training examples: one row of features plus one
/// scalar target per example. Immutable once built; the training loop visits
/// rows strictly in the order they appear here.
#[derive(Debug, Clone)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Dataset {
    /// Builds a dataset from feature rows and their targets.
    ///
    /// # Panics
    /// Panics if `inputs` is empty, the row lengths differ, or `targets` does
    /// not have one entry per row.
    pub fn from_rows(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Dataset {
        assert!(!inputs.is_empty(), "dataset must have at least one example");
        assert_eq!(
            inputs.len(),
            targets.len(),
            "inputs and targets must have equal length"
        );
        let width = inputs[0].len();
        assert!(
            inputs.iter().all(|row| row.len() == width),
            "all input rows must have the same length"
        );
        Dataset { inputs, targets }
    }

    /// The streetlights task from Grokking Deep Learning: 3 binary features
    /// (the lights) and a binary walk/stop target per example.
    pub fn streetlights() -> Dataset {
        Dataset::from_rows(
            vec![
                vec![1.0, 0.0, 1.0],
                vec![0.0, 1.0, 1.0],
                vec![0.0, 0.0, 1.0],
                vec![1.0, 1.0, 1.0],
            ],
            vec![1.0, 1.0, 0.0, 0.0],
        )
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Number of features per example.
    pub fn feature_count(&self) -> usize {
        self.inputs[0].len()
    }

    pub fn input(&self, i: usize) -> &[f64] {
        &self.inputs[i]
    }

    pub fn target(&self, i: usize) -> f64 {
        self.targets[i]
    }
}
