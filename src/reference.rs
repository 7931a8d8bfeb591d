//! Independent reference for checking modulator output.
//!
//! The reference is evaluated in double precision straight from `cos` and
//! `sin`, so it shares no code path with [`crate::PhaseModulator`].

use num_complex::{Complex32, Complex64};

/// `cos(x) + i*sin(x)`.
pub fn sincos(x: f64) -> Complex64 {
    Complex64::new(x.cos(), x.sin())
}

/// The sequence a phase modulator with `sensitivity` must produce for `input`.
pub fn expected_output(input: &[f32], sensitivity: f32) -> Vec<Complex32> {
    input
        .iter()
        .map(|&x| {
            let expected = sincos(sensitivity as f64 * x as f64);
            Complex32::new(expected.re as f32, expected.im as f32)
        })
        .collect()
}

/// Compares two complex sequences component-wise to `places` decimal places.
///
/// Two values agree when their difference rounds to zero at `places`, which
/// is `|a - b| < 0.5 * 10^-places`. The error names the first index that
/// does not agree.
pub fn complex_slices_almost_equal(
    expected: &[Complex32],
    actual: &[Complex32],
    places: u32,
) -> Result<(), String> {
    if expected.len() != actual.len() {
        return Err(format!(
            "length mismatch: expected {} samples, got {}",
            expected.len(),
            actual.len()
        ));
    }

    let tolerance = 0.5 * 10f64.powi(-(places as i32));
    for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
        let re_error = (e.re as f64 - a.re as f64).abs();
        let im_error = (e.im as f64 - a.im as f64).abs();
        // NaN compares false, so a NaN on either side is a mismatch
        if !(re_error < tolerance && im_error < tolerance) {
            return Err(format!(
                "sample {index}: expected {e}, got {a} (not equal to {places} places)"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn sincos_quarter_turn() {
        let value = sincos(PI / 2.0);
        assert!(value.re.abs() < 1e-12);
        assert!((value.im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn expected_output_zero_sensitivity() {
        let expected = expected_output(&[0.5, -0.5], 0.0);
        assert_eq!(expected, vec![Complex32::new(1.0, 0.0); 2]);
    }

    #[test]
    fn almost_equal_within_places() {
        let expected = [Complex32::new(0.5, 0.5)];
        let actual = [Complex32::new(0.500004, 0.499996)];
        assert!(complex_slices_almost_equal(&expected, &actual, 5).is_ok());
    }

    #[test]
    fn not_equal_outside_places() {
        let expected = [Complex32::new(1.0, 0.0), Complex32::new(0.5, 0.5)];
        let actual = [Complex32::new(1.0, 0.0), Complex32::new(0.5, 0.5001)];
        let error = complex_slices_almost_equal(&expected, &actual, 5).unwrap_err();
        assert!(error.starts_with("sample 1"), "{error}");
    }

    #[test]
    fn length_mismatch() {
        let expected = [Complex32::new(1.0, 0.0)];
        assert!(complex_slices_almost_equal(&expected, &[], 5).is_err());
    }

    #[test]
    fn nan_never_matches() {
        let expected = [Complex32::new(f32::NAN, 0.0)];
        let actual = [Complex32::new(f32::NAN, 0.0)];
        assert!(complex_slices_almost_equal(&expected, &actual, 5).is_err());
    }
}
