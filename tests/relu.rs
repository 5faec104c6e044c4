#[cfg(test)]
mod relu_tests {
    use streetlight_nn::activation::relu::{relu, relu_derivative};

    #[test]
    fn test_relu() {
        let input = [-1.0, 0.0, 2.0];
        let output: Vec<f64> = input.iter().map(|&x| relu(x)).collect();

        assert_eq!(output, vec![0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_relu_derivative() {
        // Zero is treated as non-positive: derivative there is 0.
        let input = [-1.0, 0.0, 2.0];
        let output: Vec<f64> = input.iter().map(|&x| relu_derivative(x)).collect();

        assert_eq!(output, vec![0.0, 0.0, 1.0]);
    }
}
