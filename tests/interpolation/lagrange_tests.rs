use knotwork::interpolation::errors::InterpolationError;
use knotwork::interpolation::lagrange::{interpolate, DuplicatePolicy, Lagrange, LagrangeCfg};
use knotwork::interpolation::Interpolator;

type KnotResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

fn build(x: &[f64], y: &[f64]) -> Result<Lagrange, InterpolationError> {
    Lagrange::build(LagrangeCfg::new().set_x(x)?.set_y(y)?)
}

#[test]
fn quadratic_midpoint() -> KnotResult {
    // y = x^2 + 1
    let poly = build(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0])?;
    assert!(approx_eq(poly.eval(0.5), 1.25));
    assert!(approx_eq(poly.eval(1.5), 3.25));
    Ok(())
}

#[test]
fn exact_hits() -> KnotResult {
    let x = [-1.0, 0.25, 0.8, 2.0, 3.5];
    let y = [4.0, -2.0, 0.5, 7.0, 1.0];
    let poly = build(&x, &y)?;
    assert_vec_close(&poly.eval_many(&x), &y);
    Ok(())
}

#[test]
fn reproduces_cubic_everywhere() -> KnotResult {
    let p = |t: f64| 2.0 * t * t * t - t * t + 0.5 * t - 3.0;
    let x = [-2.0, -0.5, 1.0, 2.5];
    let y: Vec<f64> = x.iter().map(|&t| p(t)).collect();
    let poly = build(&x, &y)?;

    // inside and outside the node range
    let x_eval: Vec<f64> = (0..41).map(|k| -4.0 + 0.2 * k as f64).collect();
    let expected: Vec<f64> = x_eval.iter().map(|&t| p(t)).collect();
    assert_vec_close(&poly.eval_many(&x_eval), &expected);
    Ok(())
}

#[test]
fn unordered_nodes_same_polynomial() -> KnotResult {
    let a = build(&[0.0, 1.0, 2.0, 4.0], &[1.0, 3.0, 2.0, 0.0])?;
    let b = build(&[4.0, 0.0, 2.0, 1.0], &[0.0, 1.0, 2.0, 3.0])?;
    for xq in [-1.0, 0.3, 1.7, 2.6, 5.0] {
        assert!(approx_eq(a.eval(xq), b.eval(xq)));
    }
    Ok(())
}

#[test]
fn single_point_is_constant() -> KnotResult {
    let poly = build(&[3.0], &[-7.5])?;
    assert_eq!(poly.eval(-100.0), -7.5);
    assert_eq!(poly.eval(3.0), -7.5);
    Ok(())
}

#[test]
fn repeated_evaluation_is_deterministic() -> KnotResult {
    let poly = build(&[0.0, 0.7, 1.9], &[0.3, -1.0, 2.2])?;
    let first = poly.eval(1.234);
    for _ in 0..10 {
        assert_eq!(poly.eval(1.234), first);
    }
    Ok(())
}

#[test]
fn duplicate_x_skips_colliding_factor() -> KnotResult {
    let clean = build(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0])?;
    let dup   = build(&[0.0, 1.0, 1.0, 2.0], &[1.0, 2.0, 2.0, 5.0])?;

    // both copies of x = 1 keep full weight, so the result diverges
    assert!(approx_eq(clean.eval(0.5), 1.25));
    assert!(approx_eq(dup.eval(0.5), 3.5));
    assert!(!approx_eq(clean.eval(0.5), dup.eval(0.5)));

    // the duplicated node is no longer reproduced
    assert!(approx_eq(dup.eval(1.0), 4.0));
    assert!(dup.eval(0.5).is_finite());
    Ok(())
}

#[test]
fn close_but_unequal_x_keeps_every_factor() -> KnotResult {
    // closer than the default x_tol, yet not equal: no factor is skipped
    let poly = build(&[0.0, 1.0, 1.0 + 1e-13], &[0.0, 1.0, 2.0])?;
    assert_eq!(poly.eval(1.0), 1.0);
    assert_eq!(poly.eval(0.0), 0.0);
    Ok(())
}

#[test]
fn duplicate_x_rejected_when_requested() {
    let x = [0.0, 1.0, 2.0, 1.0];
    let y = [1.0, 2.0, 5.0, 2.0];
    let cfg = LagrangeCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .with_duplicates(DuplicatePolicy::Reject);
    let err = Lagrange::build(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 1.0 && x2 == 1.0));
}

#[test]
fn reject_honours_x_tol() {
    let x = [0.0, 1.0, 1.0 + 1e-8];
    let y = [0.0, 1.0, 1.0];
    let cfg = LagrangeCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_tol(1e-6).unwrap()
        .with_duplicates(DuplicatePolicy::Reject);
    assert!(matches!(Lagrange::build(cfg), Err(InterpolationError::DuplicateX { .. })));
}

#[test]
fn empty_config_error() {
    let err = Lagrange::build(LagrangeCfg::new()).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn unequal_length_error() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let err = LagrangeCfg::new().set_x(&x).unwrap().set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn unequal_length_error_y_first() {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0, 2.0];
    let err = LagrangeCfg::new().set_y(&y).unwrap().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 2, y_len: 3 }));
}

#[test]
fn non_finite_x_eval_error() {
    let err = LagrangeCfg::new().set_x_eval(&[0.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn non_finite_input_error() {
    let x = [0.0, f64::NAN];
    let err = LagrangeCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn invalid_x_tol_error() {
    let err = LagrangeCfg::new().set_x_tol(0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { .. }));
}

#[test]
fn report_metadata() -> KnotResult {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 5.0];
    let x_eval = [0.5, 1.5, 3.0];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "lagrange");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 3);
    assert_vec_close(&rep.evaluated, &[1.25, 3.25, 10.0]);
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> KnotResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    let rep = interpolate(LagrangeCfg::new().set_x(&x)?.set_y(&y)?.set_x_eval(&[])?)?;
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}
