//! Chebyshev node selection
//!
//! Picks `n` samples of a dense series at positions following the 
//! [Chebyshev nodes](https://en.wikipedia.org/wiki/Chebyshev_nodes) of the 
//! first kind, mapped from `[-1, 1]` onto the index range. Nodes cluster 
//! near both ends, which tames Runge oscillation of a global polynomial 
//! built on them.
//!
//! ```text
//! c_i   = cos((2i + 1) π / 2n)
//! idx_i = round(L/2 - (L/2) c_i)   clamped to [0, L - 1]
//! ```
//!
//! Selection follows ascending `i`, hence ascending index. `n > L` is 
//! allowed and repeats indices.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::sampling::errors::SamplingError;
use crate::sampling::series::SampleSeries;


/// Index positions of `n` Chebyshev nodes over a series of length `len`.
pub fn chebyshev_indices(len: usize, n: usize) -> Result<Vec<usize>, SamplingError> {
    if len == 0 {
        return Err(SamplingError::EmptySeries);
    }
    if n == 0 {
        return Err(SamplingError::ZeroCount);
    }

    let half = len as f64 / 2.0;
    let last = len - 1;

    let indices: Vec<usize> = (0..n)
        .map(|i| {
            let c   = ((2 * i + 1) as f64 * PI / (2 * n) as f64).cos();
            let pos = (half - half * c).round().max(0.0) as usize;
            pos.min(last)
        })
        .collect();

    if n > len {
        warn!(n, len, "more chebyshev nodes than samples; indices repeat");
    }
    debug!(n, len, "selected chebyshev indices");
    Ok(indices)
}


/// Returns the `n` samples of `series` at Chebyshev positions.
pub fn select(series: &SampleSeries, n: usize) -> Result<SampleSeries, SamplingError> {
    let indices = chebyshev_indices(series.len(), n)?;
    series.select(&indices)
}
