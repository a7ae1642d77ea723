//! Screen identities, factories and the instance cache.
//!
//! The [`ScreenCatalog`] says how to build every screen a flow may reach and
//! which of them are clear points. The [`ScreenRegistry`] holds the instances
//! built so far, so that user input survives back and forth navigation.
//!
//! ```
//! use horizon_wizard::{Screen, ScreenCatalog, ScreenContext, ScreenRegistration};
//!
//! #[derive(Default)]
//! struct Welcome;
//!
//! impl Screen for Welcome {
//!     fn name(&self) -> &str {
//!         "Welcome"
//!     }
//!
//!     fn init_ui(&mut self, _ctx: &ScreenContext) {}
//! }
//!
//! let catalog = ScreenCatalog::new()
//!     .with(ScreenRegistration::of::<Welcome>("welcome"))
//!     .with(ScreenRegistration::new("restart", || Welcome).as_clear_point());
//!
//! assert!(catalog.contains(&"welcome".into()));
//! assert!(catalog.is_clear_point(&"restart".into()));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use horizon_wizard_core::logging::targets;

use crate::data::WizardData;
use crate::error::{Result, WizardError};
use crate::request::Navigator;
use crate::screen::{Screen, ScreenContext};

/// Identity of a screen variant.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(Arc<str>);

impl ScreenId {
    /// Create an identity.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The identity as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScreenId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ScreenId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl Borrow<str> for ScreenId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ScreenId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ScreenId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Error a fallible screen factory may report.
pub type ScreenBuildError = Box<dyn std::error::Error + Send + Sync>;

type ScreenFactory = Arc<dyn Fn() -> std::result::Result<Box<dyn Screen>, ScreenBuildError> + Send + Sync>;

/// How to build one screen, and whether reaching it resets the cache.
#[derive(Clone)]
pub struct ScreenRegistration {
    id: ScreenId,
    factory: ScreenFactory,
    clear_point: bool,
}

impl ScreenRegistration {
    /// Register a screen built by an infallible factory.
    pub fn new<S, F>(id: impl Into<ScreenId>, factory: F) -> Self
    where
        S: Screen,
        F: Fn() -> S + Send + Sync + 'static,
    {
        Self::fallible(id, move || Ok(Box::new(factory()) as Box<dyn Screen>))
    }

    /// Register a screen constructed through `Default`.
    pub fn of<S>(id: impl Into<ScreenId>) -> Self
    where
        S: Screen + Default,
    {
        Self::new(id, S::default)
    }

    /// Register a screen whose construction may fail.
    pub fn fallible<F>(id: impl Into<ScreenId>, factory: F) -> Self
    where
        F: Fn() -> std::result::Result<Box<dyn Screen>, ScreenBuildError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            factory: Arc::new(factory),
            clear_point: false,
        }
    }

    /// Mark this screen as a clear point using builder pattern.
    ///
    /// When a clear point becomes current, every cached screen is dropped
    /// along with its user input, and is rebuilt on its next visit.
    pub fn as_clear_point(mut self) -> Self {
        self.clear_point = true;
        self
    }

    /// The screen identity.
    pub fn id(&self) -> &ScreenId {
        &self.id
    }

    /// Whether this screen is a clear point.
    pub fn is_clear_point(&self) -> bool {
        self.clear_point
    }

    fn build(&self) -> Result<Box<dyn Screen>> {
        (self.factory)().map_err(|err| {
            tracing::error!(target: targets::REGISTRY, id = %self.id, error = %err, "cannot instantiate the screen");
            WizardError::invalid_screen(self.id.clone(), err.to_string())
        })
    }
}

impl fmt::Debug for ScreenRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenRegistration")
            .field("id", &self.id)
            .field("clear_point", &self.clear_point)
            .finish()
    }
}

/// Every screen a wizard may show, keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct ScreenCatalog {
    registrations: HashMap<ScreenId, ScreenRegistration>,
}

impl ScreenCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registration using builder pattern.
    pub fn with(mut self, registration: ScreenRegistration) -> Self {
        self.register(registration);
        self
    }

    /// Add a registration, returning the one it replaces.
    pub fn register(&mut self, registration: ScreenRegistration) -> Option<ScreenRegistration> {
        self.registrations
            .insert(registration.id.clone(), registration)
    }

    /// Look up a registration.
    pub fn get(&self, id: &ScreenId) -> Option<&ScreenRegistration> {
        self.registrations.get(id)
    }

    /// Whether an identity is registered.
    pub fn contains(&self, id: &ScreenId) -> bool {
        self.registrations.contains_key(id)
    }

    /// Whether an identity is registered as a clear point.
    pub fn is_clear_point(&self, id: &ScreenId) -> bool {
        self.get(id).is_some_and(ScreenRegistration::is_clear_point)
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

/// A built screen and its context.
pub(crate) struct MaterializedScreen {
    pub(crate) screen: Box<dyn Screen>,
    pub(crate) ctx: ScreenContext,
    pub(crate) serial: u64,
}

/// Cache of screen instances built during one wizard session.
#[derive(Default)]
pub struct ScreenRegistry {
    screens: HashMap<ScreenId, MaterializedScreen>,
    /// Displayed instance dropped from the cache but still on screen.
    retired: Option<(ScreenId, MaterializedScreen)>,
    built: u64,
}

impl ScreenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an instance of the screen is cached.
    pub fn contains(&self, id: &ScreenId) -> bool {
        self.screens.contains_key(id)
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Total number of instances built so far, including dropped ones.
    pub fn built(&self) -> u64 {
        self.built
    }

    /// Serial number of the live instance of a screen, cached or retired.
    ///
    /// Serials are unique within a registry, so a changed serial means the
    /// screen was rebuilt.
    pub fn serial(&self, id: &ScreenId) -> Option<u64> {
        self.get(id).map(|entry| entry.serial)
    }

    /// Whether `id` is the retired displayed instance.
    pub fn is_retired(&self, id: &ScreenId) -> bool {
        self.retired.as_ref().is_some_and(|(retired, _)| retired == id)
    }

    /// Drop every instance, retired included.
    pub fn clear(&mut self) {
        self.screens.clear();
        self.retired = None;
    }

    /// Drop every cached instance.
    ///
    /// The `displayed` instance is moved out of the cache but kept alive
    /// until [`release_retired`](Self::release_retired), so the screen on
    /// display keeps working while its next visit builds a new instance.
    pub fn retire_all(&mut self, displayed: &ScreenId) {
        if let Some(entry) = self.screens.remove(displayed) {
            self.retired = Some((displayed.clone(), entry));
        }
        tracing::debug!(
            target: targets::REGISTRY,
            %displayed,
            dropped = self.screens.len(),
            "cache cleared"
        );
        self.screens.clear();
    }

    /// Drop the retired instance, if any.
    pub(crate) fn release_retired(&mut self) {
        if let Some((id, _)) = self.retired.take() {
            tracing::trace!(target: targets::REGISTRY, %id, "retired screen released");
        }
    }

    pub(crate) fn get(&self, id: &ScreenId) -> Option<&MaterializedScreen> {
        self.screens.get(id).or_else(|| match &self.retired {
            Some((retired, entry)) if retired == id => Some(entry),
            _ => None,
        })
    }

    pub(crate) fn get_mut(&mut self, id: &ScreenId) -> Option<&mut MaterializedScreen> {
        if let Some(entry) = self.screens.get_mut(id) {
            return Some(entry);
        }
        match &mut self.retired {
            Some((retired, entry)) if retired == id => Some(entry),
            _ => None,
        }
    }

    /// Make sure an instance of `id` is cached.
    ///
    /// A cached instance is reused unless `id` is a clear point. Otherwise
    /// the screen is built and its `init_ui` runs; a clear point then empties
    /// the cache before the new instance is stored. If construction fails the
    /// cache is left untouched.
    ///
    /// Returns `true` if a new instance was built.
    pub(crate) fn materialize(
        &mut self,
        catalog: &ScreenCatalog,
        id: &ScreenId,
        data: &WizardData,
        navigator: &Navigator,
    ) -> Result<bool> {
        let registration = catalog.get(id).ok_or_else(|| {
            tracing::error!(target: targets::REGISTRY, %id, "screen is not registered");
            WizardError::invalid_screen(id.clone(), "screen is not registered")
        })?;

        if !registration.is_clear_point() && self.screens.contains_key(id) {
            tracing::trace!(target: targets::REGISTRY, %id, "reusing cached screen");
            return Ok(false);
        }

        let mut screen = registration.build()?;
        let ctx = ScreenContext::new(data.clone(), navigator.clone());
        screen.init_ui(&ctx);

        if registration.is_clear_point() {
            tracing::debug!(
                target: targets::REGISTRY,
                %id,
                dropped = self.screens.len(),
                "clear point reached, dropping cached screens"
            );
            self.screens.clear();
        }

        self.built += 1;
        let serial = self.built;
        tracing::debug!(target: targets::REGISTRY, %id, serial, "screen materialized");
        self.screens
            .insert(id.clone(), MaterializedScreen { screen, ctx, serial });
        Ok(true)
    }
}

impl fmt::Debug for ScreenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cached: Vec<_> = self.screens.keys().collect();
        cached.sort();
        f.debug_struct("ScreenRegistry")
            .field("cached", &cached)
            .field("retired", &self.retired.as_ref().map(|(id, _)| id))
            .field("built", &self.built)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestQueue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static INITS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Plain;

    impl Screen for Plain {
        fn name(&self) -> &str {
            "Plain"
        }

        fn init_ui(&mut self, ctx: &ScreenContext) {
            INITS.fetch_add(1, Ordering::SeqCst);
            ctx.set_can_go_previous(false);
        }
    }

    #[derive(Debug)]
    struct Unavailable;

    impl fmt::Display for Unavailable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("license server unreachable")
        }
    }

    impl std::error::Error for Unavailable {}

    fn catalog() -> ScreenCatalog {
        ScreenCatalog::new()
            .with(ScreenRegistration::of::<Plain>("a"))
            .with(ScreenRegistration::of::<Plain>("b"))
            .with(ScreenRegistration::of::<Plain>("reset").as_clear_point())
            .with(ScreenRegistration::fallible("broken", || {
                Err(Box::new(Unavailable) as ScreenBuildError)
            }))
    }

    #[test]
    fn test_screen_id() {
        let id = ScreenId::new("welcome");
        assert_eq!(id, "welcome");
        assert_eq!(id.to_string(), "welcome");
        assert_eq!(format!("{id:?}"), "ScreenId(\"welcome\")");
        assert_eq!(ScreenId::from("welcome".to_string()), id);
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.is_clear_point(&"reset".into()));
        assert!(!catalog.is_clear_point(&"a".into()));
        assert!(!catalog.is_clear_point(&"missing".into()));

        let replaced = catalog.register(ScreenRegistration::of::<Plain>("a").as_clear_point());
        assert!(replaced.is_some_and(|r| !r.is_clear_point()));
        assert!(catalog.is_clear_point(&"a".into()));
    }

    #[test]
    fn test_materialize_caches_and_resets() {
        let catalog = catalog();
        let data = WizardData::new();
        let queue = RequestQueue::new();
        let mut registry = ScreenRegistry::new();

        let before = INITS.load(Ordering::SeqCst);
        assert!(registry.materialize(&catalog, &"a".into(), &data, &queue.navigator()).unwrap());
        assert!(!registry.materialize(&catalog, &"a".into(), &data, &queue.navigator()).unwrap());
        assert!(registry.materialize(&catalog, &"b".into(), &data, &queue.navigator()).unwrap());
        assert!(INITS.load(Ordering::SeqCst) >= before + 2);
        assert_eq!(registry.len(), 2);

        let serial_a = registry.serial(&"a".into());
        assert!(registry.materialize(&catalog, &"reset".into(), &data, &queue.navigator()).unwrap());
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(&"a".into()));

        registry.materialize(&catalog, &"a".into(), &data, &queue.navigator()).unwrap();
        assert_ne!(registry.serial(&"a".into()), serial_a);
        assert_eq!(registry.built(), 4);

        // init_ui ran against the new context
        let entry = registry.get(&"a".into()).unwrap();
        assert!(!entry.ctx.can_go_previous());
        assert_eq!(entry.screen.name(), "Plain");
    }

    #[test]
    fn test_materialize_failures_leave_cache_intact() {
        let catalog = catalog();
        let data = WizardData::new();
        let queue = RequestQueue::new();
        let mut registry = ScreenRegistry::new();
        registry.materialize(&catalog, &"a".into(), &data, &queue.navigator()).unwrap();

        let err = registry
            .materialize(&catalog, &"missing".into(), &data, &queue.navigator())
            .unwrap_err();
        assert!(err.is_invalid_screen());

        let err = registry
            .materialize(&catalog, &"broken".into(), &data, &queue.navigator())
            .unwrap_err();
        assert!(err.to_string().contains("license server unreachable"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_retire_all_keeps_displayed_alive() {
        let catalog = catalog();
        let data = WizardData::new();
        let queue = RequestQueue::new();
        let mut registry = ScreenRegistry::new();
        registry.materialize(&catalog, &"a".into(), &data, &queue.navigator()).unwrap();
        registry.materialize(&catalog, &"b".into(), &data, &queue.navigator()).unwrap();
        let old_b = registry.serial(&"b".into());

        registry.retire_all(&"b".into());
        assert!(registry.is_empty());
        assert!(!registry.contains(&"b".into()));
        assert!(registry.is_retired(&"b".into()));
        assert!(registry.get(&"b".into()).is_some());
        assert_eq!(registry.serial(&"b".into()), old_b);

        // Revisiting builds a fresh instance
        assert!(registry
            .materialize(&catalog, &"b".into(), &data, &queue.navigator())
            .unwrap());
        registry.release_retired();
        assert!(!registry.is_retired(&"b".into()));
        assert_ne!(registry.serial(&"b".into()), old_b);

        registry.retire_all(&"b".into());
        registry.clear();
        assert!(registry.get(&"b".into()).is_none());
    }
}
