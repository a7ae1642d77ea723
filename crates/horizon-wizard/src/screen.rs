//! Wizard screens.
//!
//! A [`Screen`] is one step of the wizard: it builds its content once in
//! [`Screen::init_ui`], describes itself for the header, and reports its
//! validation state through the [`ScreenContext`] it is handed.
//!
//! ```
//! use horizon_wizard::{Screen, ScreenContext, DataKey};
//!
//! const USER_NAME: DataKey<String> = DataKey::new("user_name");
//!
//! #[derive(Default)]
//! struct NameScreen {
//!     ctx: Option<ScreenContext>,
//! }
//!
//! impl NameScreen {
//!     // Called by the embedding toolkit when the text field changes.
//!     fn name_edited(&self, text: &str) {
//!         let Some(ctx) = &self.ctx else { return };
//!         if text.trim().is_empty() {
//!             ctx.set_problem(Some("Please enter a name".into()));
//!         } else {
//!             ctx.data().insert(&USER_NAME, text.to_string());
//!             ctx.clear_problem();
//!         }
//!     }
//! }
//!
//! impl Screen for NameScreen {
//!     fn name(&self) -> &str {
//!         "Your name"
//!     }
//!
//!     fn description(&self) -> Option<&str> {
//!         Some("How should we call you?")
//!     }
//!
//!     fn init_ui(&mut self, ctx: &ScreenContext) {
//!         ctx.set_problem(Some("Please enter a name".into()));
//!         self.ctx = Some(ctx.clone());
//!     }
//! }
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;

use crate::data::WizardData;
use crate::request::Navigator;
use crate::state::{NavigationState, ScreenState};

/// Handle to a screen's rendered content, assigned by the embedding toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(u64);

impl ContentId {
    /// Wrap a toolkit handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The toolkit handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One step of a wizard.
///
/// Hooks default to doing nothing. `on_enter` and `on_leave` only run on
/// forward traversal: returning to a screen with the previous button does not
/// call `on_enter`, and leaving it backwards does not call `on_leave`.
pub trait Screen: 'static {
    /// The step name, shown as the header title.
    fn name(&self) -> &str;

    /// The step description, shown as the header subtitle.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Build the screen's content. Called exactly once per instance, right
    /// after construction and before the screen is first shown.
    fn init_ui(&mut self, ctx: &ScreenContext);

    /// The content the shell should display for this screen.
    fn content(&self) -> Option<ContentId> {
        None
    }

    /// Called before the screen is displayed after a forward move.
    fn on_enter(&mut self, _ctx: &ScreenContext) {}

    /// Called before the screen is left by a forward move.
    fn on_leave(&mut self, _ctx: &ScreenContext) {}

    /// Called when the wizard is cancelled while this screen is current.
    fn on_cancelled(&mut self, _ctx: &ScreenContext) {}

    /// Called when the wizard is finished from this screen.
    fn on_finished(&mut self, _ctx: &ScreenContext) {}
}

/// A screen's view of its own state and of the wizard.
///
/// Clones share the same state, so a screen can hand one to a worker thread
/// that validates input in the background. Every capability or problem change
/// asks the controller to refresh its buttons.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    state: Arc<Mutex<ScreenState>>,
    data: WizardData,
    navigator: Navigator,
}

assert_impl_all!(ScreenContext: Send, Sync);

impl ScreenContext {
    pub(crate) fn new(data: WizardData, navigator: Navigator) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScreenState::default())),
            data,
            navigator,
        }
    }

    /// Wizard-scoped data.
    pub fn data(&self) -> &WizardData {
        &self.data
    }

    /// The request sender for programmatic navigation.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// A snapshot of the screen state.
    pub fn state(&self) -> ScreenState {
        self.state.lock().clone()
    }

    /// The effective button enablement for this screen.
    pub fn navigation(&self) -> NavigationState {
        self.state.lock().navigation()
    }

    /// Whether the previous button may be used.
    pub fn can_go_previous(&self) -> bool {
        self.state.lock().can_go_previous()
    }

    /// Whether the next button may be used.
    pub fn can_go_next(&self) -> bool {
        self.state.lock().can_go_next()
    }

    /// Whether the cancel button may be used.
    pub fn can_cancel(&self) -> bool {
        self.state.lock().can_cancel()
    }

    /// Whether the finish button may be used.
    pub fn can_finish(&self) -> bool {
        self.state.lock().can_finish()
    }

    /// The current problem, if any.
    pub fn problem(&self) -> Option<String> {
        self.state.lock().problem().map(str::to_owned)
    }

    /// Set a problem, or clear it with `None`.
    pub fn set_problem(&self, problem: Option<String>) {
        self.mutate(|state| state.set_problem(problem));
    }

    /// Clear the problem.
    pub fn clear_problem(&self) {
        self.set_problem(None);
    }

    /// Set whether the next button should be enabled.
    pub fn set_can_go_next(&self, value: bool) {
        self.mutate(|state| state.set_can_go_next(value));
    }

    /// Set whether the previous button should be enabled.
    pub fn set_can_go_previous(&self, value: bool) {
        self.mutate(|state| state.set_can_go_previous(value));
    }

    /// Set whether the cancel button (and window close) should be enabled.
    pub fn set_can_cancel(&self, value: bool) {
        self.mutate(|state| state.set_can_cancel(value));
    }

    /// Set whether the finish button should be enabled.
    pub fn set_can_finish(&self, value: bool) {
        self.mutate(|state| state.set_can_finish(value));
    }

    /// Programmatic switch to the next screen.
    pub fn force_next(&self) -> bool {
        self.navigator.force_next()
    }

    /// Programmatic switch to the previous screen.
    pub fn force_previous(&self) -> bool {
        self.navigator.force_previous()
    }

    /// Programmatic cancel.
    pub fn force_cancel(&self) -> bool {
        self.navigator.force_cancel()
    }

    /// Programmatic finish.
    pub fn force_finish(&self) -> bool {
        self.navigator.force_finish()
    }

    /// Set the availability computed from the flow's resolvers.
    ///
    /// The controller republishes right after, so no refresh is requested.
    pub(crate) fn set_availability(&self, can_go_previous: bool, can_go_next: bool) {
        let mut state = self.state.lock();
        state.set_can_go_previous(can_go_previous);
        state.set_can_go_next(can_go_next);
    }

    fn mutate(&self, f: impl FnOnce(&mut ScreenState)) {
        f(&mut self.state.lock());
        self.navigator.request_refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{NavigationRequest, RequestQueue};

    fn context() -> (ScreenContext, RequestQueue) {
        let queue = RequestQueue::new();
        let ctx = ScreenContext::new(WizardData::new(), queue.navigator());
        (ctx, queue)
    }

    #[test]
    fn test_mutations_request_refresh() {
        let (ctx, queue) = context();

        ctx.set_can_finish(true);
        ctx.set_problem(Some("Invalid port".into()));

        assert_eq!(queue.drain(), vec![NavigationRequest::Refresh]);
        assert!(!ctx.can_finish());
        assert_eq!(ctx.problem().as_deref(), Some("Invalid port"));

        ctx.clear_problem();
        assert!(ctx.can_finish());
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_availability_does_not_request_refresh() {
        let (ctx, queue) = context();

        ctx.set_availability(false, true);
        assert!(!ctx.can_go_previous());
        assert!(ctx.can_go_next());
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_force_requests() {
        let (ctx, queue) = context();

        ctx.force_previous();
        ctx.force_cancel();
        ctx.force_finish();
        ctx.force_next();

        assert_eq!(
            queue.drain(),
            vec![
                NavigationRequest::Previous,
                NavigationRequest::Cancel,
                NavigationRequest::Finish,
                NavigationRequest::Next,
            ]
        );
    }

    #[test]
    fn test_clones_share_state() {
        let (ctx, _queue) = context();
        let worker_ctx = ctx.clone();

        std::thread::spawn(move || worker_ctx.set_can_cancel(false))
            .join()
            .unwrap();

        assert!(!ctx.can_cancel());
        assert!(!ctx.state().can_cancel());
    }
}
