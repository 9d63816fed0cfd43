use std::cell::Cell;

use approx::assert_relative_eq;
use thiserror::Error;

use extremum_core::{Mode, Model, ScalarFn, ScalarObjective};

use super::{
    Action, Config, Error, Event, Status, find, find_default, find_with_config, maximize,
    maximize_unobserved, minimize, minimize_unobserved, optimize_unobserved,
};

/// f(x) = x³ - 4x.
fn polynomial(x: f64) -> f64 {
    x.powi(3) - 4.0 * x
}

#[test]
fn minimizes_polynomial() {
    let model = ScalarFn(polynomial);

    // Local minimum at x = 2/sqrt(3) ≈ 1.1547.
    let expected_x = 2.0 / 3.0_f64.sqrt();

    let solution = minimize_unobserved(&model, &ScalarObjective, [-2.0, 2.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, polynomial(expected_x), epsilon = 1e-10);
}

#[test]
fn maximizes_polynomial() {
    let model = ScalarFn(polynomial);

    // Local maximum at x = -2/sqrt(3) ≈ -1.1547.
    let expected_x = -2.0 / 3.0_f64.sqrt();

    let solution = maximize_unobserved(&model, &ScalarObjective, [-2.0, 2.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-6);
}

#[test]
fn runtime_mode_matches_direction_specific_entry_points() {
    let model = ScalarFn(polynomial);
    let config = Config::default();

    let by_mode = optimize_unobserved(&model, &ScalarObjective, [-2.0, 2.0], Mode::Maximize, &config)
        .expect("should converge");
    let direct = maximize_unobserved(&model, &ScalarObjective, [-2.0, 2.0], &config)
        .expect("should converge");

    assert_eq!(by_mode.x, direct.x);
    assert_eq!(by_mode.iters, direct.iters);
}

#[test]
fn reversed_bracket_is_an_error() {
    let model = ScalarFn(polynomial);

    let result = minimize_unobserved(&model, &ScalarObjective, [2.0, -2.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidInterval {
            lower: 2.0,
            upper: -2.0
        })
    ));
}

#[test]
fn each_iteration_costs_one_evaluation() {
    let calls = Cell::new(0_usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        -(x - 3.0).powi(2)
    };

    let result = find(&f, -10.0, 10.0, Mode::Maximize, 1e-8).expect("should converge");

    // Two interior points, one per iteration, and the final midpoint.
    assert_eq!(calls.get(), result.iters + 3);
}

#[test]
fn iteration_count_follows_golden_ratio() {
    // Width shrinks by φ⁻¹ per iteration: 20 · 0.618ⁿ ≤ 1e-8 first holds at n = 45.
    let result = find(&|x: f64| (x - 3.0).powi(2), -10.0, 10.0, Mode::Minimize, 1e-8)
        .expect("should converge");

    assert_eq!(result.iters, 45);
}

#[test]
fn default_tolerance_is_relative_to_interval_width() {
    let f = |x: f64| (x - 1234.5).powi(2);

    // Width 1e4 → bracket of at most 1e-4.
    let result = find_default(&f, 0.0, 10_000.0, Mode::Minimize).expect("should converge");

    assert!((result.x - 1234.5).abs() < 1e-4);
}

#[test]
fn iteration_cap_is_reported() {
    let config = Config::new(5, 1e-12, 0.0).unwrap();
    let model = ScalarFn(polynomial);

    let result = minimize_unobserved(&model, &ScalarObjective, [-2.0, 2.0], &config);

    match result {
        Err(Error::MaxIterationsExceeded { iters, width }) => {
            assert_eq!(iters, 5);
            assert!(width > 1e-12);
        }
        other => panic!("expected MaxIterationsExceeded, got {other:?}"),
    }
}

#[test]
fn zero_iteration_cap_only_accepts_converged_bracket() {
    let model = ScalarFn(polynomial);

    let loose = Config::new(0, 10.0, 0.0).unwrap();
    let solution = minimize_unobserved(&model, &ScalarObjective, [0.0, 1.0], &loose)
        .expect("already converged");
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 0.5);

    let tight = Config::new(0, 1e-8, 0.0).unwrap();
    let result = minimize_unobserved(&model, &ScalarObjective, [0.0, 1.0], &tight);
    assert!(matches!(
        result,
        Err(Error::MaxIterationsExceeded { iters: 0, .. })
    ));
}

#[test]
fn final_midpoint_failure_is_an_error() {
    // Both interior points are finite; only the reported midpoint is NaN.
    let f = |x: f64| if x == 0.5 { f64::NAN } else { x };
    let config = Config::new(0, 10.0, 0.0).unwrap();

    let result = find_with_config(&f, 0.0, 1.0, Mode::Minimize, &config);

    match result {
        Err(Error::NonFiniteEvaluation { x, value }) => {
            assert_eq!(x, 0.5);
            assert!(value.is_nan());
        }
        other => panic!("expected NonFiniteEvaluation, got {other:?}"),
    }
}

#[test]
fn tolerance_below_float_spacing_is_unreachable() {
    let f = |x: f64| -(x - 3.0).powi(2);

    let result = find(&f, -10.0, 10.0, Mode::Maximize, 1e-16);
    assert!(matches!(
        result,
        Err(Error::MaxIterationsExceeded { iters: 200, .. })
    ));

    let relative = find_default(&f, -10.0, 10.0, Mode::Maximize).expect("should converge");
    assert_relative_eq!(relative.x, 3.0, epsilon = 1e-6);
}

#[test]
fn flat_function_converges_to_initial_midpoint() {
    let result = find(&|_: f64| 1.0, 0.0, 10.0, Mode::Minimize, 1e-9).expect("should converge");

    assert_relative_eq!(result.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(result.value, 1.0);
}

#[test]
fn assume_worse_point_is_never_best() {
    // For f(x) = x on [0, 10]:
    //
    // Init: left (~3.82) evaluated without observer, right (~6.18) is event 1.
    // Iter 1: shrink right, new left (~2.36) is event 2 → AssumeWorse.
    // Iter 2: the assumed-worse point loses, shrink left, new right (~4.72)
    //         is event 3 → StopEarly.
    //
    // The best point is still the init left, even though 2.36 had a lower objective.

    let model = ScalarFn(|x: f64| x);

    let mut event_count = 0;
    let observer = |_event: &Event<'_, _, _>| {
        event_count += 1;
        match event_count {
            2 => Some(Action::AssumeWorse),
            3 => Some(Action::StopEarly),
            _ => None,
        }
    };

    let solution = minimize(&model, &ScalarObjective, [0.0, 10.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x, 3.819_660_1, epsilon = 1e-5);
}

#[test]
fn assume_worse_steers_search() {
    // For f(x) = x on [0, 10], the true minimum is at x = 0.
    //
    // Every observed point with x < 5 is marked AssumeWorse. The init left
    // point (~3.82) bypasses the observer, so it is the only low-x point with
    // a real score and the bracket closes in on it instead of on x = 0.

    let model = ScalarFn(|x: f64| x);

    let observer = |event: &Event<'_, _, _>| (event.x() < 5.0).then_some(Action::AssumeWorse);

    let solution = minimize(&model, &ScalarObjective, [0.0, 10.0], &Config::default(), observer)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.819_660_1, epsilon = 1e-5);
}

#[test]
fn observer_can_stop_early() {
    let model = ScalarFn(polynomial);

    let mut eval_count = 0;
    let observer = |_event: &Event<'_, _, _>| {
        eval_count += 1;
        (eval_count >= 3).then_some(Action::StopEarly)
    };

    let solution = minimize(&model, &ScalarObjective, [0.0, 3.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    // 1 event for init right, 2 events for loop iterations = 3 total, stopped on 3rd.
    assert_eq!(solution.iters, 2);
    assert_eq!(eval_count, 3);
}

#[test]
fn non_finite_can_be_assumed_worse() {
    // ln(x - 4) is NaN below x = 4, so the init left point (~3.82) fails.
    // Recovering with AssumeWorse lets the search climb to the upper bound.

    let model = ScalarFn(|x: f64| (x - 4.0).ln());

    let mut non_finite = 0;
    let observer = |event: &Event<'_, _, _>| {
        if let Event::NonFinite { value, .. } = event {
            assert!(value.is_nan());
            non_finite += 1;
            return Some(Action::AssumeWorse);
        }
        None
    };

    let solution = maximize(&model, &ScalarObjective, [0.0, 10.0], &Config::default(), observer)
        .expect("should recover");

    assert!(non_finite >= 1);
    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x <= 10.0);
    assert_relative_eq!(solution.x, 10.0, epsilon = 1e-6);
}

// --- Failure handling ---

/// Model that fails when x exceeds a threshold.
struct ThresholdModel {
    threshold: f64,
}

#[derive(Debug, Clone, Error)]
#[error("model failed at x={x} (threshold={threshold})")]
struct ThresholdError {
    x: f64,
    threshold: f64,
}

impl Model for ThresholdModel {
    type Input = f64;
    type Output = f64;
    type Error = ThresholdError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.threshold {
            Err(ThresholdError {
                x: *x,
                threshold: self.threshold,
            })
        } else {
            // Simple parabola with minimum at x=2.
            Ok((x - 2.0).powi(2))
        }
    }
}

#[test]
fn init_failure_stops_early() {
    // Model fails for x > 5. Bracket [0, 10] has interior points at ~3.82 and ~6.18.
    // Init left (~3.82) succeeds (no observer). Init right (~6.18) fails.
    // Observer receives ModelFailed and returns StopEarly.

    let model = ThresholdModel { threshold: 5.0 };

    let observer = |event: &Event<'_, _, _>| {
        matches!(event, Event::ModelFailed { .. }).then_some(Action::StopEarly)
    };

    let solution = minimize(&model, &ScalarObjective, [0.0, 10.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
}

#[test]
fn loop_failure_recovers_with_assume_worse() {
    // Model fails for x > 5. True minimum is at x=2.
    // Failing points are marked AssumeWorse, which steers the search left.

    let model = ThresholdModel { threshold: 5.0 };

    let observer = |event: &Event<'_, _, _>| {
        matches!(event, Event::ModelFailed { .. }).then_some(Action::AssumeWorse)
    };

    let solution = minimize(&model, &ScalarObjective, [0.0, 10.0], &Config::default(), observer)
        .expect("should recover and converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
}

#[test]
fn loop_failure_without_action_errors() {
    let model = ThresholdModel { threshold: 5.0 };

    let observer = |_event: &Event<'_, _, _>| None;

    let result = minimize(&model, &ScalarObjective, [0.0, 10.0], &Config::default(), observer);

    assert!(matches!(result, Err(Error::Model(_))));
}
