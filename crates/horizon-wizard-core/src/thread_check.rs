//! UI thread ownership checks.
//!
//! A wizard's transitions, screen hooks and shell calls all belong to the
//! thread that built it. Other threads reach it through its request queue and
//! shared data store only. [`ThreadAffinity`] remembers the owning thread
//! and a label for the owner, so violations are reported by name.
//!
//! ```
//! use horizon_wizard_core::thread_check::ThreadAffinity;
//!
//! let affinity = ThreadAffinity::current("Wizard");
//! affinity.assert_same_thread();
//!
//! let foreign = std::thread::spawn(move || affinity.is_same_thread());
//! assert!(!foreign.join().unwrap());
//! ```

use std::fmt;
use std::thread::ThreadId;

/// The thread an object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    owner: &'static str,
    thread_id: ThreadId,
}

impl ThreadAffinity {
    /// Bind `owner` to the calling thread.
    pub fn current(owner: &'static str) -> Self {
        Self {
            owner,
            thread_id: std::thread::current().id(),
        }
    }

    /// Label of the owning object.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// The owning thread.
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Whether the calling thread is the owning thread.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    fn check(&self) -> Result<(), WrongThread> {
        if self.is_same_thread() {
            return Ok(());
        }
        let current = std::thread::current();
        Err(WrongThread {
            owner: self.owner,
            owner_thread: self.thread_id,
            current_thread: current.id(),
            current_name: current.name().map(str::to_owned),
        })
    }

    /// Panic if called from a foreign thread. Always on.
    #[track_caller]
    pub fn assert_same_thread(&self) {
        if let Err(err) = self.check() {
            wrong_thread(err);
        }
    }

    /// Panic if called from a foreign thread, in debug builds only.
    #[inline]
    #[track_caller]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }
}

/// A call made from a thread other than the owner's.
#[derive(Debug)]
struct WrongThread {
    owner: &'static str,
    owner_thread: ThreadId,
    current_thread: ThreadId,
    current_name: Option<String>,
}

impl fmt::Display for WrongThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} used from thread \"{}\" ({:?}) but belongs to {:?}",
            self.owner,
            self.current_name.as_deref().unwrap_or("<unnamed>"),
            self.current_thread,
            self.owner_thread,
        )
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn wrong_thread(err: WrongThread) -> ! {
    tracing::error!(target: "horizon_wizard_core", error = %err, "thread affinity violation");
    panic!(
        "{err}\n\n\
        Screen transitions, screen hooks and shell updates run on the UI thread.\n\
        From other threads, request navigation with `Navigator::force_next()` and\n\
        friends, and report validation through a cloned `ScreenContext`."
    )
}
