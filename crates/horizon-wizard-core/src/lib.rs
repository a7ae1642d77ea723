//! Core systems for Horizon Wizard.
//!
//! This crate provides the foundational pieces shared by the wizard engine:
//!
//! - **Signal/Slot System**: Type-safe notification of wizard state changes
//! - **Thread Affinity**: Verification that transitions stay on the UI thread
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_wizard_core::Signal;
//!
//! let finished = Signal::<()>::new();
//! let conn_id = finished.connect(|_| println!("wizard finished"));
//!
//! finished.emit(());
//! finished.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
pub mod thread_check;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
