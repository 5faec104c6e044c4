#[cfg(test)]
mod iteration_stats_tests {
    use streetlight_nn::IterationStats;

    #[test]
    fn test_json_round_trip() {
        let stats = IterationStats {
            iteration: 9,
            total_iterations: 100_000,
            squared_error: 0.25,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let back: IterationStats = serde_json::from_str(&json).unwrap();

        assert_eq!(back.iteration, 9);
        assert_eq!(back.total_iterations, 100_000);
        assert_eq!(back.squared_error, 0.25);
    }
}
