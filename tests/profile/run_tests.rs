use approx::assert_abs_diff_eq;
use knotwork::interpolation::lagrange::{Lagrange, LagrangeCfg};
use knotwork::profile::{compare, run, ProfileError};
use knotwork::sampling::{Sample, SampleSeries};

fn profile(len: usize, f: impl Fn(f64) -> f64) -> SampleSeries {
    (0..len).map(|i| {
        let x = 2.0 * i as f64;
        Sample { x, y: f(x) }
    }).collect()
}

#[test]
fn linear_profile_is_exact_for_every_method() -> Result<(), ProfileError> {
    let series = profile(41, |x| 0.5 * x + 3.0);
    let rows = run(&series, 5)?;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "lagrange");
    assert_eq!(rows[0].nodes, 9);
    assert_eq!(rows[1].nodes, 9);
    assert_eq!(rows[2].nodes, 9);
    for row in &rows {
        assert_abs_diff_eq!(row.comparison.max_abs_error, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(row.comparison.rms_error, 0.0, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn smooth_profile_errors_are_finite() -> Result<(), ProfileError> {
    let series = profile(121, |x| 50.0 + 10.0 * (x / 40.0).sin());
    let rows = run(&series, 10)?;
    for row in &rows {
        assert!(row.comparison.max_abs_error.is_finite());
        assert!(row.comparison.rms_error <= row.comparison.max_abs_error);
    }
    Ok(())
}

#[test]
fn single_stride_node_cannot_build_spline() {
    let series = profile(3, |x| x);
    let err = run(&series, 5).unwrap_err();
    assert!(matches!(err, ProfileError::Interpolation(_)));
}

#[test]
fn compare_against_nodes_is_zero() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 5.0];
    let poly = Lagrange::build(LagrangeCfg::new().set_x(&x).unwrap().set_y(&y).unwrap()).unwrap();
    let nodes = SampleSeries::new(x.to_vec(), y.to_vec()).unwrap();
    let c = compare(&nodes, &poly);
    assert_abs_diff_eq!(c.max_abs_error, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.rms_error, 0.0, epsilon = 1e-12);
}
