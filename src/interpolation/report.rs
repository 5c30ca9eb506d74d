//! Result of the one-shot `interpolate` entry points.
//!
//! `lagrange::interpolate` and `spline::natural::interpolate` build an 
//! interpolant, evaluate it over the config's `x_eval` and drop it. The 
//! report keeps only the values and enough metadata to tell the runs apart.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::traits::Interpolator;

/// Values of one built interpolant over a batch of query points.
///
/// - `algorithm_name` : [`Algorithm::algorithm_name`] of the method
/// - `n_provided`     : nodes the interpolant was built from
/// - `n_evaluated`    : query points, equal to `evaluated.len()`
/// - `evaluated`      : value at each query point, in query order
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    /// Evaluates `f` at every point of `x_eval`.
    pub fn evaluate<F: Interpolator + ?Sized>(
        algorithm: Algorithm,
        n_provided: usize,
        f: &F,
        x_eval: &[f64],
    ) -> Self {
        let evaluated = f.eval_many(x_eval);
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated: evaluated.len(),
            evaluated,
        }
    }
}
