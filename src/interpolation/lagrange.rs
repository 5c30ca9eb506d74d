//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! No coefficients are precomputed. Every query rebuilds the `m` basis
//! factors from the stored nodes, `O(m²)` per point. 
//!
//! Two nodes sharing the same abscissa do not raise a division fault;
//! their mutual factor is skipped (treated as `1`). The resulting
//! polynomial no longer passes through every node with full weight.
//! [`DuplicatePolicy::Reject`] refuses such node sets instead.


use tracing::{debug, warn};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// How nodes with equal `x` are handled at build time.
/// - [`DuplicatePolicy::Skip`]   : colliding factors count as `1` (default)
/// - [`DuplicatePolicy::Reject`] : [`InterpolationError::DuplicateX`] 
///   when two nodes lie closer than the configured `x_tol`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    #[default]
    Skip,
    Reject,
}


/// Lagrange interpolation configuration 
/// 
/// # Fields 
/// - `common`     : [`CommonCfg`] 
/// - `duplicates` : [`DuplicatePolicy`]
///
/// # Construction 
/// - Use [`LagrangeCfg::new`] then optional setters. 
///
/// # Defaults 
/// - [`DuplicatePolicy::Skip`]
/// - Duplicate spacing for [`DuplicatePolicy::Reject`];
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default. 
#[derive(Debug, Clone, Copy)] 
pub struct LagrangeCfg<'a> { 
    common: CommonCfg<'a>, 
    duplicates: DuplicatePolicy,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), duplicates: DuplicatePolicy::default() }
    }

    pub fn with_duplicates(mut self, v: DuplicatePolicy) -> Self { self.duplicates = v; self }
}
impl Default for LagrangeCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Built Lagrange interpolant; owns its nodes.
#[derive(Debug, Clone)]
pub struct Lagrange {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Lagrange {
    /// Builds the interpolant from `cfg`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
    ///   if the columns were never set or disagree.
    /// - [`InterpolationError::DuplicateX`] under [`DuplicatePolicy::Reject`].
    pub fn build(cfg: LagrangeCfg) -> Result<Self, InterpolationError> {
        cfg.common.validate(1)?;

        let x = cfg.common.x();
        let y = cfg.common.y();

        match cfg.duplicates {
            DuplicatePolicy::Reject => {
                let tol = cfg.common.x_tol();
                if let Some((x1, x2)) = first_duplicate(x, |a, b| (a - b).abs() < tol) {
                    return Err(InterpolationError::DuplicateX { x1, x2 });
                }
            }
            DuplicatePolicy::Skip => {
                // same test as the skip in `basis`
                if let Some((x1, x2)) = first_duplicate(x, |a, b| a == b) {
                    warn!(x1, x2, "lagrange nodes share an abscissa; colliding factors skipped");
                }
            }
        }

        debug!(points = x.len(), "built lagrange interpolant");
        Ok(Self { x: x.to_vec(), y: y.to_vec() })
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }

    /// Basis factor `L_i(xq)`, colliding abscissae skipped.
    #[inline]
    pub fn basis(&self, i: usize, xq: f64) -> f64 {
        let xi = self.x[i];
        let mut l = 1.0;
        for (j, &xj) in self.x.iter().enumerate() {
            if i != j && xi != xj {
                l *= (xq - xj) / (xi - xj);
            }
        }
        l
    }
}

impl Interpolator for Lagrange {
    fn eval(&self, xq: f64) -> f64 {
        self.y
            .iter()
            .enumerate()
            .map(|(i, &yi)| yi * self.basis(i, xq))
            .sum()
    }
}


/// First pair of nodes `same` treats as one abscissa, in index order.
fn first_duplicate(x: &[f64], same: impl Fn(f64, f64) -> bool) -> Option<(f64, f64)> {
    for i in 0..x.len() {
        for j in i + 1..x.len() {
            if same(x[i], x[j]) {
                return Some((x[i], x[j]));
            }
        }
    }
    None
}


/// Performs Lagrange interpolation.
///
/// # Behavior
/// - Builds a [`Lagrange`] from `cfg`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()` computes
///
/// ```text
/// P(xq) = Σ_i y[i] · Π_{j ≠ i, x[j] ≠ x[i]} (xq - x[j]) / (x[i] - x[j])
/// ```
///
/// Points outside `[min x, max x]` are extrapolated by the same polynomial.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> { 
    let evals = cfg.common.x_eval(); 
    let poly  = Lagrange::build(cfg)?;

    Ok(InterpolationReport::evaluate(Algorithm::Lagrange, poly.x.len(), &poly, evals))
}
