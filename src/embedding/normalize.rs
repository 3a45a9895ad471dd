// L2 normalization of embedding vectors

/// Scale `vector` to unit Euclidean length
///
/// The norm is accumulated in f64. An empty or all-zero vector has no
/// direction and is returned unchanged.
pub fn normalize(vector: &[f32]) -> Vec<f32> {
    let norm = vector
        .iter()
        .map(|&v| f64::from(v) * f64::from(v))
        .sum::<f64>()
        .sqrt();

    if norm == 0.0 {
        return vector.to_vec();
    }

    vector
        .iter()
        .map(|&v| (f64::from(v) / norm) as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let unit = normalize(&[3.0, 4.0]);
        assert!((unit[0] - 0.6).abs() < 1e-6);
        assert!((unit[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_empty_and_zero_vectors_unchanged() {
        assert!(normalize(&[]).is_empty());
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_result_has_unit_length_and_keeps_sign() {
        let unit = normalize(&[-2.0, 1.0, 2.0]);
        let length: f32 = unit.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((length - 1.0).abs() < 1e-6);
        assert!(unit[0] < 0.0);
    }

    #[test]
    fn test_tiny_components_do_not_underflow() {
        let unit = normalize(&[1e-30, 1e-30]);
        assert!((unit[0] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }
}
