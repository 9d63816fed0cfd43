use tracing::{debug, debug_span, trace, warn};

use extremum_core::{Mode, Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Point, Solution,
    bracket::GoldenBracket,
    init::{InitResult, init},
    solution::Status,
    state::{ShrinkDirection, State},
};

/// Core golden section search implementation.
///
/// Objectives are scored with [`Mode::transform`] before comparison, so the
/// same loop handles both minimization and maximization.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    mode: Mode,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bracket = GoldenBracket::new(bracket)?;

    let span = debug_span!("golden_section", ?mode, lower = bracket.left, upper = bracket.right);
    let _guard = span.enter();

    let width_tol = config.width_tol(bracket.width());
    debug!(width_tol, max_iters = config.max_iters(), "starting search");

    let mut state = match init(model, problem, &bracket, &mut observer, mode)? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly(solution) => {
            debug!(x = solution.x, "stopped by observer during init");
            return Ok(solution);
        }
    };

    let mut iters = 0;
    loop {
        if state.is_converged(width_tol) {
            return finish(model, problem, &state, iters);
        }

        if iters == config.max_iters() {
            let width = state.bracket().width();
            warn!(iters, width, width_tol, "bracket did not converge");
            return Err(Error::MaxIterationsExceeded { iters, width });
        }
        iters += 1;

        let direction = state.next_action(mode);
        let (eval_x, other) = match direction {
            ShrinkDirection::ShrinkLeft(x) => (x, state.right()),
            ShrinkDirection::ShrinkRight(x) => (x, state.left()),
        };

        let (point, snapshot) = match eval_and_observe(model, problem, eval_x, other, &mut observer)? {
            EvalOutcome::Continue { point, snapshot } => (point, Some(snapshot)),
            EvalOutcome::AssumeWorse => (Point::worst(eval_x, mode), None),
            EvalOutcome::StopEarly => {
                debug!(iters, "stopped by observer");
                return Ok(state.into_solution(Status::StoppedByObserver, iters));
            }
        };

        state.apply(direction, point);
        if let Some(snap) = snapshot {
            state.maybe_update_best(&point, mode, snap);
        }

        trace!(
            iter = iters,
            x = point.x,
            objective = point.objective,
            left = state.bracket().left,
            right = state.bracket().right,
            "shrunk bracket"
        );
    }
}

/// Evaluates the midpoint of the converged bracket and reports it.
fn finish<M, P>(
    model: &M,
    problem: &P,
    state: &State<M::Input, M::Output>,
    iters: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let x = state.bracket().midpoint();
    let eval = evaluate(model, problem, [x]).map_err(|e| Error::from_eval(x, e))?;

    debug!(x, objective = eval.objective, iters, "converged");

    Ok(Solution {
        status: Status::Converged,
        x,
        objective: eval.objective,
        snapshot: eval.snapshot,
        iters,
    })
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum EvalOutcome<I, O> {
    Continue {
        point: Point,
        snapshot: Snapshot<I, O>,
    },
    AssumeWorse,
    StopEarly,
}

/// Evaluate at `x`, emit event, and handle observer action.
fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<EvalOutcome<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match evaluate(model, problem, [x]) {
        Ok(eval) => {
            let point = Point::from(&eval);
            let event = Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                other,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue {
                    point,
                    snapshot: eval.snapshot,
                }),
            }
        }
        Err(e) => match Event::<M, P>::emit_failure(x, other, &e, observer) {
            Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
            Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
            None => Err(Error::from_eval(x, e)),
        },
    }
}
