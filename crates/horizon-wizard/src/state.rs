//! Per-screen navigation state.
//!
//! [`ScreenState`] stores the raw capability flags a screen has set plus its
//! current problem message. The effective answers ([`ScreenState::can_go_next`],
//! [`ScreenState::can_finish`], ...) apply the precedence rules:
//!
//! - finishing requires the finish flag and no problem
//! - advancing requires the next flag, no finish flag and no problem
//!
//! [`NavigationState`] is the snapshot of those effective answers that the
//! controller publishes to the presentation shell.

/// Capability flags and validation problem for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    can_go_previous: bool,
    can_go_next: bool,
    can_cancel: bool,
    can_finish: bool,
    problem: Option<String>,
}

impl ScreenState {
    /// Create a state with explicit flags.
    pub fn new(
        can_go_previous: bool,
        can_go_next: bool,
        can_cancel: bool,
        can_finish: bool,
        problem: Option<String>,
    ) -> Self {
        Self {
            can_go_previous,
            can_go_next,
            can_cancel,
            can_finish,
            problem,
        }
    }

    /// Whether the previous button may be used.
    pub fn can_go_previous(&self) -> bool {
        self.can_go_previous
    }

    /// Whether the next button may be used.
    ///
    /// A screen that can finish is the last one, and a screen with a problem
    /// cannot be left forward.
    pub fn can_go_next(&self) -> bool {
        self.can_go_next && !self.can_finish && self.problem.is_none()
    }

    /// Whether the cancel button (and window close) may be used.
    pub fn can_cancel(&self) -> bool {
        self.can_cancel
    }

    /// Whether the finish button may be used.
    pub fn can_finish(&self) -> bool {
        self.can_finish && self.problem.is_none()
    }

    /// The stored next flag, ignoring precedence rules.
    pub fn next_flag(&self) -> bool {
        self.can_go_next
    }

    /// The stored finish flag, ignoring precedence rules.
    pub fn finish_flag(&self) -> bool {
        self.can_finish
    }

    /// The current problem, if any.
    pub fn problem(&self) -> Option<&str> {
        self.problem.as_deref()
    }

    /// Set the previous flag.
    pub fn set_can_go_previous(&mut self, value: bool) {
        self.can_go_previous = value;
    }

    /// Set the next flag.
    pub fn set_can_go_next(&mut self, value: bool) {
        self.can_go_next = value;
    }

    /// Set the cancel flag.
    pub fn set_can_cancel(&mut self, value: bool) {
        self.can_cancel = value;
    }

    /// Set the finish flag.
    pub fn set_can_finish(&mut self, value: bool) {
        self.can_finish = value;
    }

    /// Set or clear the problem.
    pub fn set_problem(&mut self, problem: Option<String>) {
        self.problem = problem;
    }

    /// Snapshot the effective flags for publication.
    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            can_cancel: self.can_cancel(),
            can_finish: self.can_finish(),
            problem: self.problem.clone(),
        }
    }
}

impl Default for ScreenState {
    /// A fresh screen may go back, forward and cancel, but not finish.
    fn default() -> Self {
        Self::new(true, true, true, false, None)
    }
}

/// Effective button enablement published to the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Previous button enabled.
    pub can_go_previous: bool,
    /// Next button enabled.
    pub can_go_next: bool,
    /// Cancel button enabled.
    pub can_cancel: bool,
    /// Finish button enabled.
    pub can_finish: bool,
    /// Problem shown in the notification area.
    pub problem: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ScreenState::default();
        assert!(state.can_go_previous());
        assert!(state.can_go_next());
        assert!(state.can_cancel());
        assert!(!state.can_finish());
        assert_eq!(state.problem(), None);
    }

    #[test]
    fn test_problem_blocks_next_and_finish() {
        let mut state = ScreenState::new(true, true, true, true, None);
        state.set_problem(Some("Name is required".into()));

        assert!(!state.can_go_next());
        assert!(!state.can_finish());
        // Stored flags are untouched
        assert!(state.next_flag());
        assert!(state.finish_flag());
        // Previous and cancel are not gated by a problem
        assert!(state.can_go_previous());
        assert!(state.can_cancel());

        state.set_problem(None);
        assert!(state.can_finish());
    }

    #[test]
    fn test_finish_flag_blocks_next() {
        let mut state = ScreenState::default();
        assert!(state.can_go_next());

        state.set_can_finish(true);
        assert!(!state.can_go_next());
        assert!(state.can_finish());
    }

    #[test]
    fn test_navigation_snapshot() {
        let mut state = ScreenState::default();
        state.set_can_go_previous(false);
        state.set_problem(Some("bad".into()));

        let nav = state.navigation();
        assert_eq!(
            nav,
            NavigationState {
                can_go_previous: false,
                can_go_next: false,
                can_cancel: true,
                can_finish: false,
                problem: Some("bad".into()),
            }
        );
    }
}
