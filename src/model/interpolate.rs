/// Clamped piecewise-linear interpolation
///
/// `input` must be strictly ascending and the same length as `output`.
/// Values outside the input range clamp to the first or last output.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(input.windows(2).all(|w| w[0] < w[1]));

    let (Some(&first_in), Some(&last_in)) = (input.first(), input.last()) else {
        return 0.0;
    };
    let (Some(&first_out), Some(&last_out)) = (output.first(), output.last()) else {
        return 0.0;
    };

    if value.is_nan() || value <= first_in {
        return first_out;
    }
    if value >= last_in {
        return last_out;
    }

    input
        .windows(2)
        .zip(output.windows(2))
        .find(|(range, _)| value <= range[1])
        .map(|(range, out)| {
            let t = (value - range[0]) / (range[1] - range[0]);
            out[0] + (out[1] - out[0]) * t
        })
        .unwrap_or(last_out)
}
