//! Accuracy summary of the three interpolants over a full profile.

use tracing::info;

use crate::interpolation::lagrange::{Lagrange, LagrangeCfg};
use crate::interpolation::spline::natural::{NaturalSpline, NaturalSplineCfg};
use crate::interpolation::traits::Interpolator;
use crate::profile::errors::ProfileError;
use crate::sampling::{chebyshev, uniform, SampleSeries};


/// Error of an interpolant against the series it was sampled from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Comparison {
    pub max_abs_error: f64,
    pub rms_error: f64,
}

/// One row of the driver's report.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MethodSummary {
    pub label: &'static str,
    pub nodes: usize,
    pub comparison: Comparison,
}


/// Evaluates `f` at every sample of `original`. 
/// 
/// An empty `original` yields zero errors.
pub fn compare<F: Interpolator + ?Sized>(original: &SampleSeries, f: &F) -> Comparison {
    let mut max_abs = 0.0_f64;
    let mut sum_sq  = 0.0;

    for s in original.iter() {
        let e = (f.eval(s.x) - s.y).abs();
        max_abs = max_abs.max(e);
        sum_sq += e * e;
    }

    let rms = if original.is_empty() { 0.0 } else { (sum_sq / original.len() as f64).sqrt() };
    Comparison { max_abs_error: max_abs, rms_error: rms }
}


/// Strided lagrange, chebyshev lagrange and strided spline over `series`.
pub fn run(series: &SampleSeries, step: usize) -> Result<Vec<MethodSummary>, ProfileError> {
    let trimmed = uniform::trim(series, step)?;
    let strided = uniform::stride(series, step)?;
    let n_cheb  = uniform::matching_node_count(series.len(), step);
    let cheb    = chebyshev::select(&trimmed, n_cheb)?;

    let lagrange = Lagrange::build(LagrangeCfg::new().set_series(&strided)?)?;
    let lagrange_cheb = Lagrange::build(LagrangeCfg::new().set_series(&cheb)?)?;
    let spline = NaturalSpline::build(NaturalSplineCfg::new().set_series(&strided)?)?;

    let rows = vec![
        MethodSummary {
            label: "lagrange",
            nodes: strided.len(),
            comparison: compare(&trimmed, &lagrange),
        },
        MethodSummary {
            label: "lagrange (chebyshev nodes)",
            nodes: cheb.len(),
            comparison: compare(&trimmed, &lagrange_cheb),
        },
        MethodSummary {
            label: "natural cubic spline",
            nodes: strided.len(),
            comparison: compare(&trimmed, &spline),
        },
    ];

    for row in &rows {
        info!(
            method = row.label,
            nodes = row.nodes,
            max_abs_error = row.comparison.max_abs_error,
            rms_error = row.comparison.rms_error,
            "interpolation summary"
        );
    }
    Ok(rows)
}
