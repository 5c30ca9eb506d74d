use nalgebra::{DMatrix, DVector};

/// Relative deviation from the first gap tolerated before spacing is 
/// reported as non-uniform.
pub(crate) const UNIFORM_RTOL: f64 = 1e-9;


/// Uniform knot step; the first gap stands in for every segment.
#[inline]
pub(crate) fn uniform_step(x: &[f64]) -> f64 {
    x[1] - x[0]
}


/// Index of the first gap deviating from `h`, if any.
pub(crate) fn first_nonuniform_gap(x: &[f64], h: f64) -> Option<usize> {
    let tol = UNIFORM_RTOL * h.abs().max(1.0);
    (1..x.len()).find(|&i| ((x[i] - x[i - 1]) - h).abs() > tol).map(|i| i - 1)
}


/// Assembles the dense `4m x 4m` natural spline system.
///
/// Unknowns are laid out `[a0, b0, c0, d0, a1, ...]`. 
///
/// ```text
/// rows 2i, 2i+1            a_i = y_i
///                          a_i + h b_i + h² c_i + h³ d_i = y_{i+1}
/// rows 2(m+i), 2(m+i)+1    b_i + 2h c_i + 3h² d_i - b_{i+1} = 0       (i < m-1)
///                          2 c_i + 6h d_i - 2 c_{i+1} = 0
/// last slot (i = m-1)      2 c_0 = 0
///                          2 c_{m-1} + 6h d_{m-1} = 0
/// ```
pub(crate) fn assemble(h: f64, y: &[f64]) -> (DMatrix<f64>, DVector<f64>) {
    let m    = y.len() - 1;
    let size = 4 * m;

    let mut a = DMatrix::<f64>::zeros(size, size);
    let mut b = DVector::<f64>::zeros(size);

    let h2 = h * h;
    let h3 = h2 * h;

    for i in 0..m {
        let row  = 2 * i;
        let row2 = 2 * (i + m);
        let col  = 4 * i;

        // S_i(x_i) = y_i
        a[(row, col)] = 1.0;
        b[row]        = y[i];

        // S_i(x_{i+1}) = y_{i+1}
        a[(row + 1, col)]     = 1.0;
        a[(row + 1, col + 1)] = h;
        a[(row + 1, col + 2)] = h2;
        a[(row + 1, col + 3)] = h3;
        b[row + 1]            = y[i + 1];

        if i + 1 < m {
            // S_i'(x_{i+1}) = S_{i+1}'(x_{i+1})
            a[(row2, col + 1)] = 1.0;
            a[(row2, col + 2)] = 2.0 * h;
            a[(row2, col + 3)] = 3.0 * h2;
            a[(row2, col + 5)] = -1.0;

            // S_i''(x_{i+1}) = S_{i+1}''(x_{i+1})
            a[(row2 + 1, col + 2)] =  2.0;
            a[(row2 + 1, col + 3)] =  6.0 * h;
            a[(row2 + 1, col + 6)] = -2.0;
        } else {
            // S_0''(x_0) = 0
            a[(row2, 2)] = 2.0;

            // S_{m-1}''(x_m) = 0
            a[(row2 + 1, col + 2)] = 2.0;
            a[(row2 + 1, col + 3)] = 6.0 * h;
        }
    }

    (a, b)
}


/// LU (partial pivoting) solve of `a x = b`. 
/// 
/// `None` when `a` is singular or the solution is not finite.
pub(crate) fn lu_solve(a: DMatrix<f64>, b: &DVector<f64>) -> Option<Vec<f64>> {
    let x = a.lu().solve(b)?;
    if x.iter().all(|v| v.is_finite()) {
        Some(x.as_slice().to_vec())
    } else {
        None
    }
}


/// Linear scan for `i` with `x[i] <= xq < x[i+1]`.
pub(crate) fn find_segment(x: &[f64], xq: f64) -> Option<usize> {
    x.windows(2).position(|w| w[0] <= xq && xq < w[1])
}
