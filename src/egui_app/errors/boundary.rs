/**
 * Visual Error Boundary
 *
 * A steady/failed state machine around a subtree of the UI.
 *
 * # Transitions
 *
 * - steady to failed: when the guarded render computation aborts, or when
 *   `escalate` is invoked from an event handler. The configured error
 *   hook fires exactly once per transition.
 * - failed to steady: only through the fallback's reset control or when
 *   the reset key changes identity (a fresh mount). Never automatically.
 *
 * While failed the boundary renders the fallback view instead of its
 * children and does not re-attempt the failed computation. The boundary
 * is long-lived; it can cycle between the two states any number of times.
 */
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::egui_app::errors::caught::Caught;
use crate::egui_app::errors::fallback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundaryState {
    Steady,
    Failed,
}

pub struct ErrorBoundary {
    state: BoundaryState,
    error: Option<Caught>,
    reset_key: Option<u64>,
    on_error: Box<dyn FnMut(&Caught)>,
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorBoundary {
    /// A boundary whose error hook logs the failure.
    pub fn new() -> Self {
        Self::with_on_error(|error| {
            tracing::error!(caught = %error.describe(), "boundary caught a failure");
        })
    }

    /// A boundary with a custom error hook.
    pub fn with_on_error(on_error: impl FnMut(&Caught) + 'static) -> Self {
        Self {
            state: BoundaryState::Steady,
            error: None,
            reset_key: None,
            on_error: Box::new(on_error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.state == BoundaryState::Failed
    }

    /// The failure currently shown by the fallback, if any.
    pub fn current_error(&self) -> Option<&Caught> {
        self.error.as_ref()
    }

    /// Hand a failure to the boundary.
    ///
    /// The first escalation flips the state and fires the hook; while
    /// already failed, later escalations keep the first error and are
    /// only traced.
    pub fn escalate(&mut self, error: Caught) {
        match self.state {
            BoundaryState::Steady => {
                (self.on_error)(&error);
                self.error = Some(error);
                self.state = BoundaryState::Failed;
            }
            BoundaryState::Failed => {
                tracing::trace!(caught = %error.describe(), "escalation while already failed");
            }
        }
    }

    /// Return to steady and drop the stored failure. Nothing renders
    /// again until the next frame asks for the children.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Steady;
        self.error = None;
    }

    /// Tell the boundary which identity its subtree currently has. A
    /// changed key counts as a fresh mount and clears a failed state.
    pub fn sync_reset_key(&mut self, key: u64) {
        if self.reset_key != Some(key) {
            self.reset_key = Some(key);
            self.reset();
        }
    }

    /// Run a computation under the boundary. An abort mid-computation
    /// escalates its payload and yields `None`.
    pub fn guard<R>(&mut self, computation: impl FnOnce() -> R) -> Option<R> {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Some(value),
            Err(payload) => {
                self.escalate(Caught::Unknown(payload));
                None
            }
        }
    }

    /// Render the children, or the fallback while failed.
    pub fn show(&mut self, ui: &mut egui::Ui, children: impl FnOnce(&mut egui::Ui)) {
        if self.is_failed() {
            if fallback::render(ui, self.error.as_ref()) {
                self.reset();
            }
            return;
        }
        self.guard(|| children(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_boundary() -> (ErrorBoundary, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let hook_count = Rc::clone(&count);
        let boundary = ErrorBoundary::with_on_error(move |_| hook_count.set(hook_count.get() + 1));
        (boundary, count)
    }

    #[test]
    fn escalation_flips_to_failed_and_fires_the_hook_once() {
        let (mut boundary, count) = counting_boundary();
        boundary.escalate(Caught::Error(anyhow::anyhow!("boom")));
        assert!(boundary.is_failed());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn escalation_while_failed_keeps_the_first_error_and_stays_quiet() {
        let (mut boundary, count) = counting_boundary();
        boundary.escalate(Caught::Error(anyhow::anyhow!("first")));
        boundary.escalate(Caught::Error(anyhow::anyhow!("second")));
        assert_eq!(count.get(), 1);
        assert_eq!(boundary.current_error().unwrap().describe(), "first");
    }

    #[test]
    fn reset_returns_to_steady_with_nothing_retained() {
        let (mut boundary, _) = counting_boundary();
        boundary.escalate(Caught::Error(anyhow::anyhow!("boom")));
        boundary.reset();
        assert!(!boundary.is_failed());
        assert!(boundary.current_error().is_none());
    }

    #[test]
    fn the_hook_fires_once_per_transition_across_cycles() {
        let (mut boundary, count) = counting_boundary();
        boundary.escalate(Caught::Error(anyhow::anyhow!("one")));
        boundary.reset();
        boundary.escalate(Caught::Error(anyhow::anyhow!("two")));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn a_changed_reset_key_counts_as_a_fresh_mount() {
        let (mut boundary, _) = counting_boundary();
        boundary.sync_reset_key(1);
        boundary.escalate(Caught::Error(anyhow::anyhow!("boom")));
        assert!(boundary.is_failed());

        boundary.sync_reset_key(2);
        assert!(!boundary.is_failed());
    }

    #[test]
    fn an_unchanged_reset_key_does_not_reset() {
        let (mut boundary, _) = counting_boundary();
        boundary.sync_reset_key(1);
        boundary.escalate(Caught::Error(anyhow::anyhow!("boom")));
        boundary.sync_reset_key(1);
        assert!(boundary.is_failed());
    }

    #[test]
    fn an_aborting_computation_escalates_its_payload() {
        let (mut boundary, count) = counting_boundary();
        let result = boundary.guard(|| panic!("render exploded"));
        assert_eq!(result, None::<()>);
        assert!(boundary.is_failed());
        assert_eq!(count.get(), 1);
        assert!(boundary
            .current_error()
            .unwrap()
            .describe()
            .contains("render exploded"));
    }

    #[test]
    fn a_failed_boundary_does_not_rerun_the_computation() {
        let (mut boundary, _) = counting_boundary();
        boundary.escalate(Caught::Error(anyhow::anyhow!("boom")));

        let ran = Cell::new(false);
        // While failed the caller checks first, the way `show` does
        if !boundary.is_failed() {
            boundary.guard(|| ran.set(true));
        }
        assert!(!ran.get());
    }
}
