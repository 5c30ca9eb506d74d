//! Node configuration shared by [`crate::interpolation::lagrange::LagrangeCfg`]
//! and [`crate::interpolation::spline::natural::NaturalSplineCfg`].
//!
//! A config borrows its node columns; the built interpolant copies them.
//! Setters check only what holds for every method:
//! - columns are non-empty and finite,
//! - `x` and `y` agree in length, whichever is set first.
//!
//! What counts as a usable abscissa differs per method and is left to 
//! `build`:
//! - Lagrange accepts repeated `x`. Exactly equal pairs lose their mutual 
//!   factor; `x_tol` only matters when duplicates are rejected.
//! - The spline reads its step from `x[1] - x[0]` and never checks the 
//!   remaining gaps. Zero spacing surfaces as a singular system.


use crate::interpolation::errors::InterpolationError;

/// Default `x_tol`: two abscissae closer than this are one node when 
/// duplicates are rejected.
pub const DEFAULT_X_TOL: f64 = 1e-12; 


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],       
    pub(crate) x_tol  : f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self { x: &[], y: &[], x_eval: &[], x_tol: DEFAULT_X_TOL }
    }

    /// Build-time check: both columns present, same length, at least 
    /// `need` nodes.
    pub fn validate(&self, need: usize) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        check_pair(self.x.len(), self.y.len())?;
        if self.x.len() < need {
            return Err(InterpolationError::InsufficientPoints { got: self.x.len(), need });
        }
        Ok(())
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_tol(&self) -> f64 { self.x_tol }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


/// Node column: non-empty, every entry finite.
pub(crate) fn check_column(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    check_finite(v)
}

/// Any column, possibly empty; every entry finite.
pub(crate) fn check_finite(v: &[f64]) -> Result<(), InterpolationError> {
    match v.iter().position(|x| !x.is_finite()) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None      => Ok(()),
    }
}

/// Length agreement; a length of 0 means "not set yet".
pub(crate) fn check_pair(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}

pub(crate) fn check_x_tol(v: f64) -> Result<(), InterpolationError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(InterpolationError::InvalidXTol { got: v });
    }
    Ok(())
}


/// Generates the fallible builder setters for a config with a 
/// `common: CommonCfg<'a>` field.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_column(v)?;
                $crate::interpolation::config::check_pair(v.len(), self.common.y.len())?;
                self.common.x = v;
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_column(v)?;
                $crate::interpolation::config::check_pair(self.common.x.len(), v.len())?;
                self.common.y = v;
                Ok(self)
            }

            /// Sets both columns from a [`crate::sampling::SampleSeries`].
            pub fn set_series(
                self,
                series: &'a $crate::sampling::SampleSeries,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.set_x(series.x())?.set_y(series.y())
            }

            /// Query points for the one-shot `interpolate`; may be empty.
            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_finite(v)?;
                self.common.x_eval = v;
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_x_tol(v)?;
                self.common.x_tol = v;
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
