//! The embedding application's side of the wizard.
//!
//! A [`WizardFlow`] decides the screen order and what happens at the end.
//! The resolvers receive the wizard data so the order can branch on what the
//! user entered earlier:
//!
//! ```
//! use horizon_wizard::{DataKey, ScreenId, WizardData, WizardFlow};
//!
//! const ACTION: DataKey<&'static str> = DataKey::new("action");
//!
//! struct AccountFlow;
//!
//! impl WizardFlow for AccountFlow {
//!     fn previous_screen(&self, current: &ScreenId, _data: &WizardData) -> Option<ScreenId> {
//!         match current.as_str() {
//!             "create" | "remove" => Some("action".into()),
//!             _ => None,
//!         }
//!     }
//!
//!     fn next_screen(&self, current: &ScreenId, data: &WizardData) -> Option<ScreenId> {
//!         match (current.as_str(), data.get(&ACTION)) {
//!             ("action", Some("create")) => Some("create".into()),
//!             ("action", Some("remove")) => Some("remove".into()),
//!             _ => None,
//!         }
//!     }
//!
//!     fn finish(&mut self, _data: &WizardData) {}
//! }
//! ```

use crate::data::WizardData;
use crate::registry::ScreenId;

/// Screen order and end-of-wizard callbacks supplied by the application.
pub trait WizardFlow {
    /// The screen before `current`, or `None` if `current` is the first.
    fn previous_screen(&self, current: &ScreenId, data: &WizardData) -> Option<ScreenId>;

    /// The screen after `current`, or `None` if `current` is the last.
    fn next_screen(&self, current: &ScreenId, data: &WizardData) -> Option<ScreenId>;

    /// Called when the user finishes the wizard.
    fn finish(&mut self, data: &WizardData);

    /// Called when the user cancels. Return `false` to keep the wizard open,
    /// for instance after a declined confirmation dialog.
    fn on_cancel(&mut self, _data: &WizardData) -> bool {
        true
    }
}

type FinishFn = Box<dyn FnMut(&WizardData)>;
type CancelFn = Box<dyn FnMut(&WizardData) -> bool>;

/// A flow visiting a fixed list of screens in order.
///
/// ```
/// use horizon_wizard::{LinearFlow, WizardData, WizardFlow};
///
/// let flow = LinearFlow::new(["welcome", "options", "summary"]);
/// let data = WizardData::new();
///
/// assert_eq!(flow.next_screen(&"welcome".into(), &data), Some("options".into()));
/// assert_eq!(flow.previous_screen(&"welcome".into(), &data), None);
/// assert_eq!(flow.next_screen(&"summary".into(), &data), None);
/// ```
pub struct LinearFlow {
    screens: Vec<ScreenId>,
    on_finish: Option<FinishFn>,
    on_cancel: Option<CancelFn>,
}

impl LinearFlow {
    /// Create a flow over `screens`.
    pub fn new<I>(screens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ScreenId>,
    {
        Self {
            screens: screens.into_iter().map(Into::into).collect(),
            on_finish: None,
            on_cancel: None,
        }
    }

    /// Set the finish callback using builder pattern.
    pub fn on_finish<F>(mut self, f: F) -> Self
    where
        F: FnMut(&WizardData) + 'static,
    {
        self.on_finish = Some(Box::new(f));
        self
    }

    /// Set the cancel confirmation using builder pattern.
    pub fn confirm_cancel<F>(mut self, f: F) -> Self
    where
        F: FnMut(&WizardData) -> bool + 'static,
    {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// The screens in order.
    pub fn screens(&self) -> &[ScreenId] {
        &self.screens
    }

    fn position(&self, id: &ScreenId) -> Option<usize> {
        self.screens.iter().position(|s| s == id)
    }
}

impl WizardFlow for LinearFlow {
    fn previous_screen(&self, current: &ScreenId, _data: &WizardData) -> Option<ScreenId> {
        let pos = self.position(current)?;
        pos.checked_sub(1).map(|i| self.screens[i].clone())
    }

    fn next_screen(&self, current: &ScreenId, _data: &WizardData) -> Option<ScreenId> {
        let pos = self.position(current)?;
        self.screens.get(pos + 1).cloned()
    }

    fn finish(&mut self, data: &WizardData) {
        if let Some(f) = self.on_finish.as_mut() {
            f(data);
        }
    }

    fn on_cancel(&mut self, data: &WizardData) -> bool {
        self.on_cancel.as_mut().is_none_or(|f| f(data))
    }
}

impl std::fmt::Debug for LinearFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearFlow")
            .field("screens", &self.screens)
            .field("has_on_finish", &self.on_finish.is_some())
            .field("has_on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_linear_order() {
        let flow = LinearFlow::new(["a", "b", "c"]);
        let data = WizardData::new();

        assert_eq!(flow.screens().len(), 3);
        assert_eq!(flow.previous_screen(&"b".into(), &data), Some("a".into()));
        assert_eq!(flow.next_screen(&"b".into(), &data), Some("c".into()));
        assert_eq!(flow.previous_screen(&"a".into(), &data), None);
        assert_eq!(flow.next_screen(&"c".into(), &data), None);
        assert_eq!(flow.next_screen(&"unknown".into(), &data), None);
    }

    #[test]
    fn test_callbacks() {
        let finished = Rc::new(Cell::new(0));
        let finished_clone = finished.clone();

        let mut flow = LinearFlow::new(["a"])
            .on_finish(move |_| finished_clone.set(finished_clone.get() + 1))
            .confirm_cancel(|_| false);
        let data = WizardData::new();

        flow.finish(&data);
        assert_eq!(finished.get(), 1);
        assert!(!flow.on_cancel(&data));
    }

    #[test]
    fn test_cancel_allowed_by_default() {
        let mut flow = LinearFlow::new(["a"]);
        assert!(flow.on_cancel(&WizardData::new()));
    }
}
