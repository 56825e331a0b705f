use super::*;

// === EvalMode policy tests ===

#[test]
fn interpret_keeps_binders_terminal() {
    assert!(!EvalMode::Interpret.reduces_binders());
    assert!(!EvalMode::Bounded { budget: 10 }.reduces_binders());
}

#[test]
fn unfold_reduces_binders() {
    assert!(EvalMode::Unfold { budget: 10 }.reduces_binders());
}

#[test]
fn interpret_has_no_budget() {
    assert_eq!(EvalMode::Interpret.step_budget(), None);
}

#[test]
fn bounded_modes_carry_their_budget() {
    assert_eq!(EvalMode::Bounded { budget: 7 }.step_budget(), Some(7));
    assert_eq!(EvalMode::Unfold { budget: 9 }.step_budget(), Some(9));
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn interpret_depth_unlimited_on_native() {
    assert_eq!(EvalMode::Interpret.max_recursion_depth(), None);
}

#[test]
fn bounded_modes_limit_depth() {
    assert_eq!(
        EvalMode::Bounded { budget: 1 }.max_recursion_depth(),
        Some(10_000)
    );
    assert_eq!(
        EvalMode::Unfold { budget: 1 }.max_recursion_depth(),
        Some(10_000)
    );
}

#[test]
fn default_mode_is_interpret() {
    assert_eq!(EvalMode::default(), EvalMode::Interpret);
}

// === ModeState tests ===

#[test]
fn budget_allows_exactly_budget_steps() {
    let mut state = ModeState::new(&EvalMode::Bounded { budget: 3 });
    for _ in 0..3 {
        assert_eq!(state.enter(), Ok(()));
        state.leave();
    }
    assert_eq!(
        state.enter(),
        Err(EvalError::BudgetExceeded { budget: 3 })
    );
}

#[test]
fn depth_tracks_enter_and_leave() {
    let mut state = ModeState::new(&EvalMode::Interpret);
    assert_eq!(state.enter(), Ok(()));
    assert_eq!(state.enter(), Ok(()));
    assert_eq!(state.depth(), 2);
    state.leave();
    assert_eq!(state.depth(), 1);
    assert_eq!(state.steps(), 2);
}

#[test]
fn depth_limit_reports_the_limit() {
    let mut state = ModeState::new(&EvalMode::Bounded { budget: u32::MAX });
    for _ in 0..10_000 {
        assert_eq!(state.enter(), Ok(()));
    }
    assert_eq!(
        state.enter(),
        Err(EvalError::StackOverflow { depth: 10_000 })
    );
}

#[test]
fn reset_clears_counters() {
    let mut state = ModeState::new(&EvalMode::Bounded { budget: 1 });
    assert_eq!(state.enter(), Ok(()));
    state.reset();
    assert_eq!(state.steps(), 0);
    assert_eq!(state.depth(), 0);
    assert_eq!(state.enter(), Ok(()));
}

#[test]
fn leave_never_underflows() {
    let mut state = ModeState::new(&EvalMode::Interpret);
    state.leave();
    assert_eq!(state.depth(), 0);
}
