use extremum_core::{Mode, Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::{EvalError, Evaluation, evaluate};

use super::{
    Action, Error, Event, Point, Solution, bracket::GoldenBracket, solution::Status, state::State,
};

pub(super) enum InitResult<I, O> {
    Continue(State<I, O>),
    StopEarly(Solution<I, O>),
}

/// Initialize state by evaluating both interior points.
///
/// Only the second point (or failure) triggers an observer event, since the
/// first has no `other` yet.
///
/// If both evaluations fail, one failure event is emitted (with a synthetic
/// `other`) and the left failure is returned as the error. Recovery isn't
/// possible: `AssumeWorse` needs one valid point, `StopEarly` needs a snapshot.
pub(super) fn init<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: &GoldenBracket,
    observer: &mut Obs,
    mode: Mode,
) -> Result<InitResult<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let left = evaluate(model, problem, [bracket.inner_left]);
    let right = evaluate(model, problem, [bracket.inner_right]);

    match (left, right) {
        (Ok(left_eval), Ok(right_eval)) => {
            both_ok::<M, P, Obs>(bracket, left_eval, right_eval, observer, mode)
        }
        (Ok(ok_eval), Err(err)) => {
            one_failed::<M, P, Obs>(bracket, ok_eval, bracket.inner_right, err, observer, mode)
        }
        (Err(err), Ok(ok_eval)) => {
            one_failed::<M, P, Obs>(bracket, ok_eval, bracket.inner_left, err, observer, mode)
        }
        (Err(left_err), Err(_)) => {
            let synthetic_other = Point::new(bracket.inner_right, f64::NAN);
            Event::<M, P>::emit_failure(bracket.inner_left, synthetic_other, &left_err, observer);
            Err(Error::from_eval(bracket.inner_left, left_err))
        }
    }
}

fn both_ok<M, P, Obs>(
    bracket: &GoldenBracket,
    left_eval: Evaluation<M::Input, M::Output, 1>,
    right_eval: Evaluation<M::Input, M::Output, 1>,
    observer: &mut Obs,
    mode: Mode,
) -> Result<InitResult<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let left_pt = Point::from(&left_eval);
    let right_pt = Point::from(&right_eval);
    let event = Event::Evaluated {
        point: right_pt,
        input: &right_eval.snapshot.input,
        output: &right_eval.snapshot.output,
        other: left_pt,
    };

    match observer.observe(&event) {
        Some(Action::StopEarly) => Ok(InitResult::StopEarly(Solution {
            status: Status::StoppedByObserver,
            x: left_pt.x,
            objective: left_pt.objective,
            snapshot: left_eval.snapshot,
            iters: 0,
        })),
        Some(Action::AssumeWorse) => {
            let worse = Point::worst(right_pt.x, mode);
            Ok(InitResult::Continue(State::new(
                *bracket,
                left_pt,
                worse,
                left_pt,
                left_eval.snapshot,
            )))
        }
        None => {
            let (best_pt, best_snap) = if left_pt.score(mode) <= right_pt.score(mode) {
                (left_pt, left_eval.snapshot)
            } else {
                (right_pt, right_eval.snapshot)
            };
            Ok(InitResult::Continue(State::new(
                *bracket, left_pt, right_pt, best_pt, best_snap,
            )))
        }
    }
}

fn one_failed<M, P, Obs>(
    bracket: &GoldenBracket,
    ok_eval: Evaluation<M::Input, M::Output, 1>,
    failed_x: f64,
    err: EvalError<M::Error, P::Error>,
    observer: &mut Obs,
    mode: Mode,
) -> Result<InitResult<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let ok_pt = Point::from(&ok_eval);

    match Event::<M, P>::emit_failure(failed_x, ok_pt, &err, observer) {
        Some(Action::StopEarly) => Ok(InitResult::StopEarly(Solution {
            status: Status::StoppedByObserver,
            x: ok_pt.x,
            objective: ok_pt.objective,
            snapshot: ok_eval.snapshot,
            iters: 0,
        })),
        Some(Action::AssumeWorse) => {
            let worse = Point::worst(failed_x, mode);
            let (left_pt, right_pt) = if ok_pt.x < worse.x {
                (ok_pt, worse)
            } else {
                (worse, ok_pt)
            };
            Ok(InitResult::Continue(State::new(
                *bracket,
                left_pt,
                right_pt,
                ok_pt,
                ok_eval.snapshot,
            )))
        }
        None => Err(Error::from_eval(failed_x, err)),
    }
}
