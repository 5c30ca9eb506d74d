//! Uniform stride subsampling.
//!
//! The series is first trimmed so its final sample falls on the stride, 
//! then every `step`-th sample is kept. The kept set always spans the 
//! trimmed domain end to end, which the uniform spline requires.

use tracing::debug;

use crate::sampling::errors::SamplingError;
use crate::sampling::series::SampleSeries;


/// Length of the series once trimmed to `k * step + 1` samples.
#[inline]
pub fn trimmed_len(len: usize, step: usize) -> usize {
    if len == 0 || step == 0 {
        return len;
    }
    ((len - 1) / step) * step + 1
}


/// Number of samples [`stride`] keeps, reused as the matching Chebyshev 
/// node count so both selections interpolate through the same number of 
/// points.
#[inline]
pub fn matching_node_count(len: usize, step: usize) -> usize {
    if step == 0 {
        return 0;
    }
    if len == 0 {
        return 0;
    }
    (trimmed_len(len, step) - 1) / step + 1
}


/// Trimmed copy of `series`; see [`trimmed_len`].
pub fn trim(series: &SampleSeries, step: usize) -> Result<SampleSeries, SamplingError> {
    if step == 0 {
        return Err(SamplingError::ZeroStep);
    }
    if series.is_empty() {
        return Err(SamplingError::EmptySeries);
    }
    Ok(series.truncated(trimmed_len(series.len(), step)))
}


/// Keeps samples `0, step, 2 step, ...` of the trimmed series.
pub fn stride(series: &SampleSeries, step: usize) -> Result<SampleSeries, SamplingError> {
    let trimmed = trim(series, step)?;
    let indices: Vec<usize> = (0..trimmed.len()).step_by(step).collect();
    debug!(step, kept = indices.len(), len = series.len(), "strided series");
    trimmed.select(&indices)
}
