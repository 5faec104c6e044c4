#[cfg(test)]
mod dataset_tests {
    use streetlight_nn::Dataset;

    #[test]
    fn test_streetlights_contents() {
        let dataset = Dataset::streetlights();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.feature_count(), 3);

        assert_eq!(dataset.input(0), &[1.0, 0.0, 1.0]);
        assert_eq!(dataset.input(1), &[0.0, 1.0, 1.0]);
        assert_eq!(dataset.input(2), &[0.0, 0.0, 1.0]);
        assert_eq!(dataset.input(3), &[1.0, 1.0, 1.0]);

        assert_eq!(dataset.target(0), 1.0);
        assert_eq!(dataset.target(1), 1.0);
        assert_eq!(dataset.target(2), 0.0);
        assert_eq!(dataset.target(3), 0.0);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_from_rows_rejects_mismatched_targets() {
        Dataset::from_rows(vec![vec![1.0, 0.0]], vec![1.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_from_rows_rejects_ragged_rows() {
        Dataset::from_rows(
            vec![vec![1.0, 0.0], vec![1.0]],
            vec![1.0, 0.0],
        );
    }
}
