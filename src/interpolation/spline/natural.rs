//! Natural Cubic Spline
//!
//! Piecewise cubic through `m + 1` equally spaced knots with
//! `S''(x_0) = S''(x_m) = 0`. The `4m` segment coefficients come from one 
//! dense system solved by LU factorization; the row layout is documented 
//! on `helpers::assemble`.
//!
//! The step `h` is taken from the first gap and reused for every segment.
//! Non-uniform knots are accepted (with a warning) and give an incorrect 
//! spline.


use tracing::{debug, warn};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{
    assemble,
    find_segment,
    first_nonuniform_gap,
    lu_solve,
    uniform_step,
};
use crate::interpolation::traits::Interpolator;


/// Segment used for queries outside every `[x_i, x_{i+1})`.
/// - [`Extrapolation::LastSegment`] : always the last segment, offset from 
///   its left knot, on both sides of the domain (default)
/// - [`Extrapolation::Nearest`]     : first segment below `x_0`, last segment 
///   at or above `x_m`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Extrapolation {
    #[default]
    LastSegment,
    Nearest,
}


#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>,
    extrapolation: Extrapolation,
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), extrapolation: Extrapolation::default() }
    }

    pub fn with_extrapolation(mut self, v: Extrapolation) -> Self { self.extrapolation = v; self }
}
impl Default for NaturalSplineCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NaturalSplineCfg<'a>);


/// One cubic `a + b t + c t² + d t³`, `t` measured from the left knot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Segment {
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    #[inline]
    pub fn slope(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + t * 3.0 * self.d)
    }

    #[inline]
    pub fn curvature(&self, t: f64) -> f64 {
        2.0 * self.c + 6.0 * self.d * t
    }
}


/// Built natural cubic spline; owns its knots and coefficient vector.
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    knots: Vec<f64>,
    segments: Vec<Segment>,
    h: f64,
    extrapolation: Extrapolation,
}

impl NaturalSpline {
    /// Assembles and solves the spline system for the knots in `cfg`.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] with fewer than 2 knots.
    /// - [`InterpolationError::SingularSystem`] if the system cannot be solved
    ///   (zero step, repeated knots).
    pub fn build(cfg: NaturalSplineCfg) -> Result<Self, InterpolationError> {
        cfg.common.validate(2)?;

        let x = cfg.common.x();
        let y = cfg.common.y();

        let h = uniform_step(x);
        if let Some(gap) = first_nonuniform_gap(x, h) {
            warn!(gap, h, "spline knots are not uniformly spaced");
        }

        let (a, b) = assemble(h, y);
        let size   = b.len();
        debug!(segments = x.len() - 1, size, h, "solving natural spline system");

        let coeffs = lu_solve(a, &b).ok_or(InterpolationError::SingularSystem { size })?;

        let segments = coeffs
            .chunks_exact(4)
            .map(|c| Segment { a: c[0], b: c[1], c: c[2], d: c[3] })
            .collect();

        Ok(Self {
            knots: x.to_vec(),
            segments,
            h,
            extrapolation: cfg.extrapolation,
        })
    }

    pub fn knots(&self) -> &[f64] { &self.knots }

    /// `[a0, b0, c0, d0, a1, ...]`, four per segment.
    pub fn coefficients(&self) -> Vec<f64> {
        self.segments.iter().flat_map(|s| [s.a, s.b, s.c, s.d]).collect()
    }

    pub fn step(&self) -> f64 { self.h }

    pub fn n_segments(&self) -> usize { self.segments.len() }

    pub fn segment(&self, i: usize) -> Option<Segment> {
        self.segments.get(i).copied()
    }

    /// Segment and local offset used for `xq`.
    fn locate(&self, xq: f64) -> (Segment, f64) {
        let last = self.segments.len() - 1;
        let i = match find_segment(&self.knots, xq) {
            Some(i) => i,
            None if self.extrapolation == Extrapolation::Nearest && xq < self.knots[0] => 0,
            None => last,
        };
        (self.segments[i], xq - self.knots[i])
    }

    /// `S'(xq)`, same segment selection as [`Interpolator::eval`].
    pub fn derivative(&self, xq: f64) -> f64 {
        let (seg, t) = self.locate(xq);
        seg.slope(t)
    }

    /// `S''(xq)`, same segment selection as [`Interpolator::eval`].
    pub fn second_derivative(&self, xq: f64) -> f64 {
        let (seg, t) = self.locate(xq);
        seg.curvature(t)
    }
}

impl Interpolator for NaturalSpline {
    fn eval(&self, xq: f64) -> f64 {
        let (seg, t) = self.locate(xq);
        seg.value(t)
    }
}


/// Evaluate a natural cubic spline at every point of `cfg.common.x_eval()`.
///
/// Queries past the last knot (and, under the default 
/// [`Extrapolation::LastSegment`], below the first) extend the last segment.
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let evals  = cfg.common.x_eval();
    let spline = NaturalSpline::build(cfg)?;

    Ok(InterpolationReport::evaluate(Algorithm::SplineNatural, spline.knots.len(), &spline, evals))
}
