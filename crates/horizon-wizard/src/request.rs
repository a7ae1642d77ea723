//! Programmatic navigation requests.
//!
//! Screens and background workers do not drive the controller directly. They
//! send a [`NavigationRequest`] through a [`Navigator`], and the controller
//! drains the queue on its UI thread every time it refreshes. Requests are
//! then subject to exactly the same guards as button clicks.
//!
//! ```
//! use horizon_wizard::{NavigationRequest, RequestQueue};
//!
//! let queue = RequestQueue::new();
//! let navigator = queue.navigator();
//!
//! std::thread::spawn(move || navigator.force_next()).join().unwrap();
//!
//! assert_eq!(queue.drain(), vec![NavigationRequest::Next]);
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use horizon_wizard_core::logging::targets;
use static_assertions::assert_impl_all;

/// A request for the controller, issued by application code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationRequest {
    /// Advance to the next screen.
    Next,
    /// Go back to the previous screen.
    Previous,
    /// Cancel the wizard.
    Cancel,
    /// Finish the wizard.
    Finish,
    /// Republish the current screen's state.
    Refresh,
}

impl NavigationRequest {
    /// Whether this request asks for a transition (anything but a refresh).
    pub fn is_transition(self) -> bool {
        !matches!(self, Self::Refresh)
    }
}

/// Sending half of the request queue.
///
/// Cloneable and `Send + Sync`; hand clones to worker threads freely.
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: Sender<NavigationRequest>,
}

assert_impl_all!(Navigator: Send, Sync);

impl Navigator {
    /// Send a request.
    ///
    /// Returns `false` when the wizard is gone and nobody will read it.
    pub fn request(&self, request: NavigationRequest) -> bool {
        match self.sender.send(request) {
            Ok(()) => {
                tracing::trace!(target: targets::REQUEST, ?request, "request queued");
                true
            }
            Err(_) => {
                tracing::warn!(target: targets::REQUEST, ?request, "wizard dropped, request ignored");
                false
            }
        }
    }

    /// Programmatic switch to the next screen.
    pub fn force_next(&self) -> bool {
        self.request(NavigationRequest::Next)
    }

    /// Programmatic switch to the previous screen.
    pub fn force_previous(&self) -> bool {
        self.request(NavigationRequest::Previous)
    }

    /// Programmatic cancel.
    pub fn force_cancel(&self) -> bool {
        self.request(NavigationRequest::Cancel)
    }

    /// Programmatic finish.
    pub fn force_finish(&self) -> bool {
        self.request(NavigationRequest::Finish)
    }

    /// Ask for the buttons and problem area to be refreshed.
    pub fn request_refresh(&self) -> bool {
        self.request(NavigationRequest::Refresh)
    }
}

/// The controller's end of the request channel.
#[derive(Debug)]
pub struct RequestQueue {
    sender: Sender<NavigationRequest>,
    receiver: Receiver<NavigationRequest>,
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Create a sending handle.
    pub fn navigator(&self) -> Navigator {
        Navigator {
            sender: self.sender.clone(),
        }
    }

    /// Number of requests waiting.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Take every pending request.
    ///
    /// Duplicates collapse into their first occurrence: asking twice for
    /// `Next` before the controller polls advances once.
    pub fn drain(&self) -> Vec<NavigationRequest> {
        let mut drained = Vec::new();
        while let Ok(request) = self.receiver.try_recv() {
            if !drained.contains(&request) {
                drained.push(request);
            }
        }
        drained
    }

    /// Drop every pending request.
    pub fn discard(&self) -> usize {
        self.receiver.try_iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_collapses_duplicates() {
        let queue = RequestQueue::new();
        let navigator = queue.navigator();

        navigator.request_refresh();
        navigator.force_next();
        navigator.request_refresh();
        navigator.force_next();
        navigator.force_finish();
        assert_eq!(queue.pending(), 5);

        assert_eq!(
            queue.drain(),
            vec![
                NavigationRequest::Refresh,
                NavigationRequest::Next,
                NavigationRequest::Finish
            ]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_requests_from_many_threads_are_not_lost() {
        let queue = RequestQueue::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let navigator = queue.navigator();
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        navigator.force_cancel();
                    } else {
                        navigator.force_previous();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(drained.contains(&NavigationRequest::Cancel));
        assert!(drained.contains(&NavigationRequest::Previous));
    }

    #[test]
    fn test_discard() {
        let queue = RequestQueue::new();
        let navigator = queue.navigator();
        navigator.force_next();
        navigator.force_finish();

        assert_eq!(queue.discard(), 2);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_is_transition() {
        assert!(NavigationRequest::Next.is_transition());
        assert!(!NavigationRequest::Refresh.is_transition());
    }
}
