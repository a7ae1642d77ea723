//! Logging facilities for Horizon Wizard.
//!
//! Horizon Wizard uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_wizard=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Horizon Wizard for tracing.
pub mod span_names {
    /// Screen transition span.
    pub const TRANSITION: &str = "horizon_wizard::transition";
    /// Request queue drain span.
    pub const REQUESTS: &str = "horizon_wizard::requests";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_wizard_core";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_wizard_core::signal";
    /// Controller (transitions, guards, refresh) target.
    pub const CONTROLLER: &str = "horizon_wizard::controller";
    /// Screen catalog and instance cache target.
    pub const REGISTRY: &str = "horizon_wizard::registry";
    /// Forced navigation request target.
    pub const REQUEST: &str = "horizon_wizard::request";
    /// Button label tables target.
    pub const LANGPACK: &str = "horizon_wizard::langpack";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_wizard::config";
    /// Image loading and scaling target.
    pub const IMAGE: &str = "horizon_wizard::image";
}

/// A guard that records a performance span while alive.
///
/// ```
/// use horizon_wizard_core::logging::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("materialize");
///     // ... timed work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_wizard::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
