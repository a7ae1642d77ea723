//! The wizard controller.
//!
//! [`Wizard`] is the single authority for which screen is visible and what
//! the user can do from there. It moves through
//! `Uninitialized -> Showing(id) -> Cancelled | Finished`, asks the
//! [`WizardFlow`] where each button leads, builds screens through the
//! [`ScreenCatalog`], and republishes the current screen's state to the
//! [`PresentationShell`] after every change.
//!
//! # Example
//!
//! ```
//! use horizon_wizard::prelude::*;
//!
//! #[derive(Default)]
//! struct Step(&'static str);
//!
//! impl Screen for Step {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn init_ui(&mut self, _ctx: &ScreenContext) {}
//! }
//!
//! let shell = HeadlessShell::new();
//! let mut wizard = Wizard::builder("welcome", LinearFlow::new(["welcome", "done"]), shell.clone())
//!     .name("Setup")
//!     .screen(ScreenRegistration::new("welcome", || Step("Welcome")))
//!     .screen(ScreenRegistration::new("done", || Step("Done")))
//!     .build()
//!     .unwrap();
//!
//! wizard.show().unwrap();
//! assert!(wizard.next().unwrap());
//! assert_eq!(shell.last_frame().unwrap().header.title, "Done");
//! ```
//!
//! # Threading
//!
//! Every method must be called on the thread that built the wizard; debug
//! builds assert it. Other threads reach the wizard through a [`Navigator`]
//! and the shared [`WizardData`]; their requests run on the next
//! [`Wizard::refresh`].

use std::fmt;
use std::path::PathBuf;

use horizon_wizard_core::logging::{span_names, targets};
use horizon_wizard_core::{PerfSpan, Signal, ThreadAffinity};

use crate::config::WizardConfig;
use crate::data::WizardData;
use crate::error::Result;
use crate::flow::WizardFlow;
use crate::langpack::Langpack;
use crate::registry::{ScreenCatalog, ScreenId, ScreenRegistration, ScreenRegistry};
use crate::request::{NavigationRequest, Navigator, RequestQueue};
use crate::screen::{Screen, ScreenContext};
use crate::shell::{Color, Header, PresentationShell, ShellChrome, ShellFrame};
use crate::side_image::SideImage;
use crate::state::NavigationState;

/// Lifecycle of a wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStatus {
    /// Built but not shown yet.
    Uninitialized,
    /// Displaying a screen.
    Showing(ScreenId),
    /// Closed through cancel or a window close request.
    Cancelled,
    /// Closed through finish.
    Finished,
}

impl WizardStatus {
    /// Whether the wizard was closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Finished)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Self::Forward => "next",
            Self::Backward => "previous",
        }
    }
}

/// Builder for [`Wizard`].
pub struct WizardBuilder {
    initial: ScreenId,
    flow: Box<dyn WizardFlow>,
    shell: Box<dyn PresentationShell>,
    config: WizardConfig,
    catalog: ScreenCatalog,
    langpack: Option<Langpack>,
    side_image: Option<SideImage>,
    data: Option<WizardData>,
}

impl WizardBuilder {
    /// Start building a wizard that opens on `initial`.
    pub fn new<F, S>(initial: impl Into<ScreenId>, flow: F, shell: S) -> Self
    where
        F: WizardFlow + 'static,
        S: PresentationShell + 'static,
    {
        Self {
            initial: initial.into(),
            flow: Box::new(flow),
            shell: Box::new(shell),
            config: WizardConfig::default(),
            catalog: ScreenCatalog::new(),
            langpack: None,
            side_image: None,
            data: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the window title.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the window size. 0 selects the default for that dimension.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config = self.config.with_size(width, height);
        self
    }

    /// Set the layout padding.
    pub fn padding(mut self, horizontal: u32, vertical: u32) -> Self {
        self.config = self.config.with_padding(horizontal, vertical);
        self
    }

    /// Set the locale of the button labels.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config = self.config.with_locale(locale);
        self
    }

    /// Set the header icon.
    pub fn header_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_header_icon(path);
        self
    }

    /// Set the header background image.
    pub fn header_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_header_image(path);
        self
    }

    /// Set an already loaded left-side image. Takes precedence over a path
    /// in the configuration.
    pub fn side_image(mut self, image: SideImage) -> Self {
        self.side_image = Some(image);
        self
    }

    /// Register a screen.
    pub fn screen(mut self, registration: ScreenRegistration) -> Self {
        self.catalog.register(registration);
        self
    }

    /// Register every screen of a catalog.
    pub fn catalog(mut self, catalog: ScreenCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use custom label tables.
    pub fn langpack(mut self, langpack: Langpack) -> Self {
        self.langpack = Some(langpack);
        self
    }

    /// Share an existing data store with the wizard.
    pub fn data(mut self, data: WizardData) -> Self {
        self.data = Some(data);
        self
    }

    /// Build the wizard.
    ///
    /// Fails only if the configured side image cannot be loaded. Screens are
    /// not built until [`Wizard::show`].
    pub fn build(self) -> Result<Wizard> {
        let side_image = match (self.side_image, &self.config.side_image) {
            (Some(image), _) => Some(image),
            (None, Some(path)) => Some(SideImage::load(path)?),
            (None, None) => None,
        };

        let mut langpack = self.langpack.unwrap_or_default();
        langpack.set_locale(&self.config.locale());

        let chrome = ShellChrome {
            title: self.config.name.clone(),
            size: self.config.size(),
            padding: self.config.padding(),
            header_icon: self.config.header_icon.clone(),
            header_image: self.config.header_image.clone(),
            side_image,
            actions_background: self.config.actions_background,
            problem_background: self.config.problem_background,
        };

        let requests = RequestQueue::new();
        let navigator = requests.navigator();

        tracing::debug!(
            target: targets::CONTROLLER,
            name = %chrome.title,
            initial = %self.initial,
            screens = self.catalog.len(),
            "wizard built"
        );

        Ok(Wizard {
            initial: self.initial,
            flow: self.flow,
            shell: self.shell,
            chrome,
            catalog: self.catalog,
            registry: ScreenRegistry::new(),
            langpack,
            data: self.data.unwrap_or_default(),
            requests,
            navigator,
            status: WizardStatus::Uninitialized,
            affinity: ThreadAffinity::current("Wizard"),
            current_screen_changed: Signal::new(),
            state_changed: Signal::new(),
            finished: Signal::new(),
            cancelled: Signal::new(),
        })
    }
}

impl fmt::Debug for WizardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardBuilder")
            .field("initial", &self.initial)
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// A guided multi-step dialog.
pub struct Wizard {
    initial: ScreenId,
    flow: Box<dyn WizardFlow>,
    shell: Box<dyn PresentationShell>,
    chrome: ShellChrome,
    catalog: ScreenCatalog,
    registry: ScreenRegistry,
    langpack: Langpack,
    data: WizardData,
    requests: RequestQueue,
    navigator: Navigator,
    status: WizardStatus,
    affinity: ThreadAffinity,

    /// Emitted with the new screen's identity after every transition.
    pub current_screen_changed: Signal<ScreenId>,
    /// Emitted with the published state after every republish.
    pub state_changed: Signal<NavigationState>,
    /// Emitted when the wizard is finished.
    pub finished: Signal<()>,
    /// Emitted when the wizard is cancelled.
    pub cancelled: Signal<()>,
}

impl Wizard {
    /// Start building a wizard that opens on `initial`.
    pub fn builder<F, S>(initial: impl Into<ScreenId>, flow: F, shell: S) -> WizardBuilder
    where
        F: WizardFlow + 'static,
        S: PresentationShell + 'static,
    {
        WizardBuilder::new(initial, flow, shell)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The wizard-scoped data store.
    pub fn data(&self) -> &WizardData {
        &self.data
    }

    /// A request sender for programmatic navigation from any thread.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// The lifecycle state.
    pub fn status(&self) -> &WizardStatus {
        &self.status
    }

    /// Whether a screen is displayed.
    pub fn is_showing(&self) -> bool {
        matches!(self.status, WizardStatus::Showing(_))
    }

    /// Whether the wizard was closed by cancel or a window close request.
    pub fn was_cancelled(&self) -> bool {
        self.status == WizardStatus::Cancelled
    }

    /// The screen the wizard opens on.
    pub fn initial_screen(&self) -> &ScreenId {
        &self.initial
    }

    /// The displayed screen.
    pub fn current_screen(&self) -> Option<&ScreenId> {
        match &self.status {
            WizardStatus::Showing(id) => Some(id),
            _ => None,
        }
    }

    /// The context of the displayed screen.
    pub fn current_context(&self) -> Option<&ScreenContext> {
        let id = self.current_screen()?;
        self.registry.get(id).map(|entry| &entry.ctx)
    }

    /// Serial number of the displayed screen instance.
    pub fn current_instance_serial(&self) -> Option<u64> {
        self.registry.serial(self.current_screen()?)
    }

    /// The screen instance cache.
    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    /// The registered screens.
    pub fn catalog(&self) -> &ScreenCatalog {
        &self.catalog
    }

    /// The window decoration.
    pub fn chrome(&self) -> &ShellChrome {
        &self.chrome
    }

    /// The button label tables.
    pub fn langpack(&self) -> &Langpack {
        &self.langpack
    }

    /// Mutable access to the label tables. Call
    /// [`update_gui_state`](Self::update_gui_state) to publish changes.
    pub fn langpack_mut(&mut self) -> &mut Langpack {
        &mut self.langpack
    }

    /// What the shell should display right now.
    pub fn current_frame(&self) -> Option<ShellFrame> {
        let id = self.current_screen()?;
        let entry = self.registry.get(id)?;
        Some(ShellFrame {
            screen: id.clone(),
            header: Header {
                title: entry.screen.name().to_string(),
                subtitle: entry.screen.description().map(str::to_string),
            },
            navigation: entry.ctx.navigation(),
            labels: self.langpack.labels(),
            content: entry.screen.content(),
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Display the initial screen.
    ///
    /// The initial screen's `on_enter` runs before the first frame is
    /// published. If the screen cannot be built the error is returned and
    /// the wizard stays unshown. Showing a wizard that is already showing
    /// does nothing; showing a closed wizard starts over on the initial
    /// screen with a fresh cache.
    pub fn show(&mut self) -> Result<()> {
        self.affinity.debug_assert_same_thread();
        if self.is_showing() {
            tracing::trace!(target: targets::CONTROLLER, "show ignored: already showing");
            return Ok(());
        }

        let _span = PerfSpan::new(span_names::TRANSITION);
        self.registry.clear();
        self.requests.discard();
        self.registry
            .materialize(&self.catalog, &self.initial, &self.data, &self.navigator)?;

        self.shell.open(&self.chrome);
        let initial = self.initial.clone();
        tracing::debug!(target: targets::CONTROLLER, screen = %initial, "wizard shown");
        self.activate(initial, true);
        Ok(())
    }

    /// Go to the next screen.
    ///
    /// The current screen's `on_leave` runs first, so data it commits is
    /// visible to the flow. Returns `Ok(false)` without doing anything if the
    /// current screen cannot go next. If the flow has no next screen or the
    /// next screen cannot be built, the wizard stays on the current screen.
    pub fn next(&mut self) -> Result<bool> {
        self.transition(Direction::Forward)
    }

    /// Go to the previous screen. Screen hooks do not run.
    pub fn previous(&mut self) -> Result<bool> {
        self.transition(Direction::Backward)
    }

    /// Cancel the wizard.
    ///
    /// Does nothing if the current screen cannot cancel or the flow declines.
    /// Otherwise the screen's `on_cancelled` runs, the data store is cleared
    /// and the shell is closed.
    pub fn cancel(&mut self) -> bool {
        self.affinity.debug_assert_same_thread();
        let Some(ctx) = self.current_context() else {
            tracing::trace!(target: targets::CONTROLLER, "cancel ignored: not showing");
            return false;
        };
        if !ctx.can_cancel() {
            tracing::trace!(target: targets::CONTROLLER, "cancel rejected: disabled");
            return false;
        }
        if !self.flow.on_cancel(&self.data) {
            tracing::debug!(target: targets::CONTROLLER, "cancel declined by the flow");
            return false;
        }

        self.with_current(|screen, ctx| screen.on_cancelled(ctx));
        self.data.clear();
        self.close(WizardStatus::Cancelled);
        self.cancelled.emit(());
        true
    }

    /// Finish the wizard.
    ///
    /// Does nothing unless the current screen can finish, which requires the
    /// finish flag and no problem. Otherwise the screen's `on_finished` runs,
    /// then the flow's `finish`, and the shell is closed.
    pub fn finish(&mut self) -> bool {
        self.affinity.debug_assert_same_thread();
        let Some(ctx) = self.current_context() else {
            tracing::trace!(target: targets::CONTROLLER, "finish ignored: not showing");
            return false;
        };
        if !ctx.can_finish() {
            tracing::trace!(target: targets::CONTROLLER, problem = ?ctx.problem(), "finish rejected");
            return false;
        }

        self.with_current(|screen, ctx| screen.on_finished(ctx));
        self.flow.finish(&self.data);
        self.close(WizardStatus::Finished);
        self.finished.emit(());
        true
    }

    /// Handle a window close request from the shell.
    ///
    /// Honours the same guard and confirmation as [`cancel`](Self::cancel),
    /// then closes the wizard as cancelled. Unlike `cancel`, the screen's
    /// `on_cancelled` does not run and the data store is kept.
    pub fn close_requested(&mut self) -> bool {
        self.affinity.debug_assert_same_thread();
        let Some(ctx) = self.current_context() else {
            tracing::trace!(target: targets::CONTROLLER, "close request ignored: not showing");
            return false;
        };
        if !ctx.can_cancel() || !self.flow.on_cancel(&self.data) {
            tracing::debug!(target: targets::CONTROLLER, "close request declined");
            return false;
        }

        self.close(WizardStatus::Cancelled);
        self.cancelled.emit(());
        true
    }

    /// Drop every cached screen.
    ///
    /// The displayed screen stays on screen until the wizard leaves it and is
    /// rebuilt on its next visit.
    pub fn reset_screens(&mut self) {
        self.affinity.debug_assert_same_thread();
        match self.current_screen().cloned() {
            Some(current) => self.registry.retire_all(&current),
            None => self.registry.clear(),
        }
        tracing::debug!(target: targets::CONTROLLER, "screens reset");
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Apply pending requests, then republish the current screen's state.
    ///
    /// Forced requests go through the same guards as button clicks. Requests
    /// left after the wizard closes are dropped. A failed transition does not
    /// stop the batch; the first error is returned after republishing.
    pub fn refresh(&mut self) -> Result<()> {
        self.affinity.debug_assert_same_thread();
        let _span = PerfSpan::new(span_names::REQUESTS);

        let mut first_error = None;
        for request in self.requests.drain() {
            if !self.is_showing() {
                tracing::warn!(target: targets::CONTROLLER, ?request, "wizard not showing, request dropped");
                continue;
            }
            tracing::trace!(target: targets::CONTROLLER, ?request, "applying request");
            let applied = match request {
                NavigationRequest::Next => self.next().map(drop),
                NavigationRequest::Previous => self.previous().map(drop),
                NavigationRequest::Cancel => {
                    self.cancel();
                    Ok(())
                }
                NavigationRequest::Finish => {
                    self.finish();
                    Ok(())
                }
                NavigationRequest::Refresh => Ok(()),
            };
            if let Err(err) = applied {
                first_error.get_or_insert(err);
            }
        }

        self.update_gui_state();
        first_error.map_or(Ok(()), Err)
    }

    /// Republish the current screen's header, buttons and problem.
    ///
    /// Idempotent. Does nothing when no screen is displayed.
    pub fn update_gui_state(&mut self) {
        self.affinity.debug_assert_same_thread();
        let Some(frame) = self.current_frame() else {
            return;
        };
        self.shell.publish(&frame);
        self.state_changed.emit(frame.navigation);
    }

    /// Select the button label locale and republish.
    pub fn set_locale(&mut self, locale: &str) {
        self.langpack.set_locale(locale);
        self.update_gui_state();
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    /// Set or remove the header background image.
    pub fn set_header_image(&mut self, path: Option<PathBuf>) {
        self.restyle(|chrome| chrome.header_image = path);
    }

    /// Set or remove the header icon.
    pub fn set_header_icon(&mut self, path: Option<PathBuf>) {
        self.restyle(|chrome| chrome.header_icon = path);
    }

    /// Set or remove the left-side image.
    pub fn set_side_image(&mut self, image: Option<SideImage>) {
        self.restyle(|chrome| chrome.side_image = image);
    }

    /// Set the button bar background.
    pub fn set_actions_background(&mut self, color: Color) {
        self.restyle(|chrome| chrome.actions_background = Some(color));
    }

    /// Set the problem area background.
    pub fn set_problem_background(&mut self, color: Color) {
        self.restyle(|chrome| chrome.problem_background = Some(color));
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn transition(&mut self, direction: Direction) -> Result<bool> {
        self.affinity.debug_assert_same_thread();
        let Some(current) = self.current_screen().cloned() else {
            tracing::trace!(target: targets::CONTROLLER, action = direction.name(), "ignored: not showing");
            return Ok(false);
        };
        let Some(ctx) = self.current_context() else {
            tracing::error!(target: targets::CONTROLLER, screen = %current, "displayed screen is not cached");
            return Ok(false);
        };

        let allowed = match direction {
            Direction::Forward => ctx.can_go_next(),
            Direction::Backward => ctx.can_go_previous(),
        };
        if !allowed {
            tracing::trace!(target: targets::CONTROLLER, screen = %current, action = direction.name(), "rejected: disabled");
            return Ok(false);
        }

        let _span = PerfSpan::new(span_names::TRANSITION);

        // on_leave commits the screen's input, so the flow resolves after it
        let destination = match direction {
            Direction::Forward => {
                self.with_current(|screen, ctx| screen.on_leave(ctx));
                self.flow.next_screen(&current, &self.data)
            }
            Direction::Backward => self.flow.previous_screen(&current, &self.data),
        };
        let Some(destination) = destination else {
            tracing::trace!(target: targets::CONTROLLER, screen = %current, action = direction.name(), "no destination");
            return Ok(false);
        };

        if let Err(err) = self
            .registry
            .materialize(&self.catalog, &destination, &self.data, &self.navigator)
        {
            tracing::error!(
                target: targets::CONTROLLER,
                from = %current,
                to = %destination,
                error = %err,
                "transition failed"
            );
            return Err(err);
        }

        tracing::debug!(
            target: targets::CONTROLLER,
            from = %current,
            to = %destination,
            action = direction.name(),
            "transition"
        );
        self.registry.release_retired();
        self.activate(destination, direction == Direction::Forward);
        Ok(true)
    }

    /// Make a cached screen current and publish it.
    fn activate(&mut self, id: ScreenId, run_on_enter: bool) {
        let can_go_previous = self.flow.previous_screen(&id, &self.data).is_some();
        let can_go_next = self.flow.next_screen(&id, &self.data).is_some();
        self.status = WizardStatus::Showing(id.clone());

        if let Some(entry) = self.registry.get_mut(&id) {
            entry.ctx.set_availability(can_go_previous, can_go_next);
            if run_on_enter {
                entry.screen.on_enter(&entry.ctx);
            }
        }

        self.update_gui_state();
        self.current_screen_changed.emit(id);
    }

    fn with_current(&mut self, f: impl FnOnce(&mut dyn Screen, &ScreenContext)) {
        let WizardStatus::Showing(id) = &self.status else {
            return;
        };
        if let Some(entry) = self.registry.get_mut(id) {
            f(entry.screen.as_mut(), &entry.ctx);
        }
    }

    fn close(&mut self, status: WizardStatus) {
        tracing::debug!(target: targets::CONTROLLER, ?status, "wizard closed");
        self.status = status;
        self.shell.close();
        self.registry.clear();
        let dropped = self.requests.discard();
        if dropped > 0 {
            tracing::warn!(target: targets::CONTROLLER, dropped, "pending requests dropped on close");
        }
    }

    fn restyle(&mut self, f: impl FnOnce(&mut ShellChrome)) {
        self.affinity.debug_assert_same_thread();
        f(&mut self.chrome);
        if self.is_showing() {
            self.shell.restyle(&self.chrome);
        }
    }
}

impl fmt::Debug for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("status", &self.status)
            .field("initial", &self.initial)
            .field("registry", &self.registry)
            .field("data", &self.data)
            .field("locale", &self.langpack.locale())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::LinearFlow;
    use crate::shell::HeadlessShell;

    #[derive(Default)]
    struct Step;

    impl Screen for Step {
        fn name(&self) -> &str {
            "Step"
        }

        fn init_ui(&mut self, _ctx: &ScreenContext) {}
    }

    fn wizard(shell: HeadlessShell) -> Wizard {
        Wizard::builder("a", LinearFlow::new(["a", "b"]), shell)
            .name("Test")
            .locale("en")
            .screen(ScreenRegistration::of::<Step>("a"))
            .screen(ScreenRegistration::of::<Step>("b"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_status_transitions() {
        let shell = HeadlessShell::new();
        let mut wizard = wizard(shell.clone());
        assert_eq!(wizard.status(), &WizardStatus::Uninitialized);
        assert!(!wizard.next().unwrap());

        wizard.show().unwrap();
        assert_eq!(wizard.status(), &WizardStatus::Showing("a".into()));
        assert!(shell.is_open());
        assert_eq!(shell.chrome().unwrap().size, (700, 500));

        assert!(wizard.cancel());
        assert!(wizard.status().is_closed());
        assert!(wizard.was_cancelled());
        assert!(wizard.registry().is_empty());
        assert!(!shell.is_open());
    }

    #[test]
    fn test_availability_follows_resolvers() {
        let mut wizard = wizard(HeadlessShell::new());
        wizard.show().unwrap();

        let ctx = wizard.current_context().unwrap();
        assert!(!ctx.can_go_previous());
        assert!(ctx.can_go_next());

        wizard.next().unwrap();
        let ctx = wizard.current_context().unwrap();
        assert!(ctx.can_go_previous());
        assert!(!ctx.can_go_next());
    }

    #[test]
    fn test_show_twice_is_noop() {
        let shell = HeadlessShell::new();
        let mut wizard = wizard(shell.clone());
        wizard.show().unwrap();
        wizard.show().unwrap();
        assert_eq!(shell.open_count(), 1);
    }

    #[test]
    fn test_restyle_only_when_showing() {
        let shell = HeadlessShell::new();
        let mut wizard = wizard(shell.clone());

        wizard.set_actions_background(Color::WHITE);
        assert_eq!(shell.restyle_count(), 0);

        wizard.show().unwrap();
        wizard.set_problem_background(Color::from_rgb8(255, 200, 200));
        assert_eq!(shell.restyle_count(), 1);
        assert_eq!(
            shell.chrome().unwrap().actions_background,
            Some(Color::WHITE)
        );
    }
}
