//! Horizon Wizard - a Rust-native engine for guided multi-step dialogs.
//!
//! A wizard walks the user through a sequence of [`Screen`]s. The engine
//! decides which screen is visible, caches screen instances so input survives
//! back and forth navigation, shares a [`WizardData`] store between screens,
//! and keeps the navigation buttons in sync with each screen's validation
//! state. Rendering is left to a [`PresentationShell`] supplied by the
//! embedding toolkit.
//!
//! # Pieces
//!
//! - [`Wizard`] - the controller, built with [`Wizard::builder`]
//! - [`Screen`] and [`ScreenContext`] - one step and its view of the wizard
//! - [`WizardFlow`] - the application's screen order and end callbacks
//! - [`ScreenCatalog`] - how to build each screen, and which are clear points
//! - [`Navigator`] - programmatic navigation from any thread
//! - [`Langpack`] - translated button labels
//! - [`WizardConfig`] - window settings, loadable from TOML or JSON
//!
//! # Example
//!
//! ```
//! use horizon_wizard::prelude::*;
//!
//! const ACCEPTED: DataKey<bool> = DataKey::new("accepted");
//!
//! #[derive(Default)]
//! struct License;
//!
//! impl Screen for License {
//!     fn name(&self) -> &str {
//!         "License"
//!     }
//!
//!     fn init_ui(&mut self, ctx: &ScreenContext) {
//!         ctx.set_can_finish(true);
//!         ctx.set_problem(Some("Please accept the license".into()));
//!     }
//! }
//!
//! let shell = HeadlessShell::new();
//! let mut wizard = Wizard::builder("license", LinearFlow::new(["license"]), shell.clone())
//!     .screen(ScreenRegistration::of::<License>("license"))
//!     .build()
//!     .unwrap();
//! wizard.show().unwrap();
//!
//! // The problem blocks finishing.
//! assert!(!wizard.finish());
//!
//! // A worker thread validates and asks to finish.
//! let ctx = wizard.current_context().unwrap().clone();
//! std::thread::spawn(move || {
//!     ctx.data().insert(&ACCEPTED, true);
//!     ctx.clear_problem();
//!     ctx.force_finish();
//! })
//! .join()
//! .unwrap();
//!
//! wizard.refresh().unwrap();
//! assert_eq!(wizard.status(), &WizardStatus::Finished);
//! assert_eq!(wizard.data().get(&ACCEPTED), Some(true));
//! ```
//!
//! # Logging
//!
//! Everything is instrumented with `tracing` under the targets listed in
//! [`horizon_wizard_core::logging::targets`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod flow;
pub mod langpack;
pub mod prelude;
pub mod registry;
pub mod request;
pub mod screen;
pub mod shell;
pub mod side_image;
pub mod state;

pub use horizon_wizard_core::{ConnectionId, Signal};

pub use config::WizardConfig;
pub use controller::{Wizard, WizardBuilder, WizardStatus};
pub use data::{DataKey, WizardData};
pub use error::{LocaleRegistrationError, Result, WizardError};
pub use flow::{LinearFlow, WizardFlow};
pub use langpack::{system_locale, ActionLabel, ButtonLabels, Langpack, DEFAULT_LOCALE};
pub use registry::{ScreenBuildError, ScreenCatalog, ScreenId, ScreenRegistration, ScreenRegistry};
pub use request::{NavigationRequest, Navigator, RequestQueue};
pub use screen::{ContentId, Screen, ScreenContext};
pub use shell::{Color, HeadlessShell, Header, PresentationShell, ShellChrome, ShellFrame};
pub use side_image::SideImage;
pub use state::{NavigationState, ScreenState};
