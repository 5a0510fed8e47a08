// SPDX-License-Identifier: MPL-2.0
//! Piecewise-linear interpolation with clamped extrapolation.

/// Linear blend between `from` and `to`; `t` is not clamped.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Maps `input` through the stops `input_range` -> `output_range`.
///
/// `input_range` must be non-decreasing and both slices must have the same
/// length (at least one stop). Inputs outside the range take the nearest
/// end value, so the result always lies within the output stops.
#[must_use]
pub fn interpolate(input: f32, input_range: &[f32], output_range: &[f32]) -> f32 {
    debug_assert_eq!(input_range.len(), output_range.len());
    debug_assert!(!input_range.is_empty());

    let last = input_range.len().min(output_range.len()) - 1;
    if input.is_nan() || input <= input_range[0] {
        return output_range[0];
    }
    if input >= input_range[last] {
        return output_range[last];
    }

    for i in 0..last {
        let (lo, hi) = (input_range[i], input_range[i + 1]);
        if input <= hi {
            let span = hi - lo;
            if span <= f32::EPSILON {
                return output_range[i + 1];
            }
            return lerp(output_range[i], output_range[i + 1], (input - lo) / span);
        }
    }

    output_range[last]
}
