pub(crate) mod helpers;
pub mod natural;

pub use natural::{Extrapolation, NaturalSpline, NaturalSplineCfg, Segment};
