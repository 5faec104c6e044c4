/// Rectified linear unit: `max(x, 0)`.
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Derivative of ReLU, evaluated on the activation itself.
///
/// Exactly 0 is treated as non-positive, so the derivative there is 0. For
/// ReLU the `> 0` mask is the same whether it is taken on the pre-activation
/// or the post-activation values, which is why the backward pass can apply
/// this to the already-rectified layer.
pub fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}
