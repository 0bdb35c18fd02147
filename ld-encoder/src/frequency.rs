//! Sampling-rate estimation
//!
//! The whole session runs at one uniform rate, estimated from the time
//! delta between the first two rows only. This is deliberately a
//! single-pair estimate with no averaging or outlier rejection: the
//! timebase of the artifact depends on it, so the historical behavior is
//! preserved exactly rather than "improved". Estimation never fails -
//! anything unusable falls back to the default rate.

/// Sample rate assumed when the input cannot provide one, in Hz.
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 500;

/// Estimate the session sample rate from the first two rows.
///
/// Reads the time value at `time_column` from rows 0 and 1; if both
/// parse and the delta is positive, the rate is `floor(1 / dt)` Hz.
/// Fewer than two rows, short rows, unparsable text, or a non-positive
/// delta all yield [`DEFAULT_SAMPLE_RATE_HZ`].
pub fn estimate_sample_rate(rows: &[Vec<String>], time_column: usize) -> u32 {
    let Some(dt) = first_pair_delta(rows, time_column) else {
        log::debug!(
            "Sample rate not derivable from input, using default {} Hz",
            DEFAULT_SAMPLE_RATE_HZ
        );
        return DEFAULT_SAMPLE_RATE_HZ;
    };
    if dt > 0.0 {
        (1.0 / dt) as u32
    } else {
        log::debug!(
            "Non-positive time delta {dt}, using default {} Hz",
            DEFAULT_SAMPLE_RATE_HZ
        );
        DEFAULT_SAMPLE_RATE_HZ
    }
}

/// Time delta between the first two rows, if both time fields parse.
fn first_pair_delta(rows: &[Vec<String>], time_column: usize) -> Option<f64> {
    let t0: f64 = rows.first()?.get(time_column)?.trim().parse().ok()?;
    let t1: f64 = rows.get(1)?.get(time_column)?.trim().parse().ok()?;
    Some(t1 - t0)
}
