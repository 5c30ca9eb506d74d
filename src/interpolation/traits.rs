
/// A built interpolant. 
/// 
/// Built once from its configuration, then evaluated any number of times. 
/// Construction is the only fallible step; evaluation never fails.
pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
