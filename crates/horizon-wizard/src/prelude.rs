//! Prelude module for Horizon Wizard.
//!
//! ```
//! use horizon_wizard::prelude::*;
//! ```
//!
//! Brings in what a typical embedding needs: the controller and its builder,
//! the screen trait, flows, registrations, data keys and the headless shell.

pub use crate::controller::{Wizard, WizardBuilder, WizardStatus};
pub use crate::data::{DataKey, WizardData};
pub use crate::error::WizardError;
pub use crate::flow::{LinearFlow, WizardFlow};
pub use crate::registry::{ScreenCatalog, ScreenId, ScreenRegistration};
pub use crate::request::Navigator;
pub use crate::screen::{ContentId, Screen, ScreenContext};
pub use crate::shell::{HeadlessShell, PresentationShell, ShellChrome, ShellFrame};
pub use crate::state::NavigationState;
