//! Selection listener interface.
//!
//! The host screen implements [`SelectionListener`] and registers itself
//! with [`MenuBar::set_listener`](crate::menu_bar::MenuBar::set_listener).
//! The bar only keeps a [`Weak`] handle, so the host can own the bar
//! without forming a reference cycle.

use std::rc::{Rc, Weak};

/// Receives "selection moved to index K" notifications from a menu bar.
pub trait SelectionListener {
    /// The user picked tab `index`; the host should bring the matching
    /// content into view.
    fn scroll_to(&self, index: usize);
}

/// Non-owning handle to a listener.
#[derive(Default)]
pub struct ListenerHandle {
    inner: Option<Weak<dyn SelectionListener>>,
}

impl ListenerHandle {
    /// Build a handle that does not keep `listener` alive.
    pub fn new<L: SelectionListener + 'static>(listener: &Rc<L>) -> Self {
        let weak: Weak<L> = Rc::downgrade(listener);
        Self { inner: Some(weak) }
    }

    /// Notify the listener if it is still alive. Returns whether it was.
    pub fn notify(&self, index: usize) -> bool {
        match self.inner.as_ref().and_then(Weak::upgrade) {
            Some(listener) => {
                listener.scroll_to(index);
                true
            }
            None => false,
        }
    }

    /// Whether a live listener is attached.
    pub fn is_attached(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<usize>>,
    }

    impl SelectionListener for Recorder {
        fn scroll_to(&self, index: usize) {
            self.calls.borrow_mut().push(index);
        }
    }

    #[test]
    fn test_notify_reaches_live_listener() {
        let recorder = Rc::new(Recorder::default());
        let handle = ListenerHandle::new(&recorder);

        assert!(handle.is_attached());
        assert!(handle.notify(3));
        assert_eq!(*recorder.calls.borrow(), vec![3]);
    }

    #[test]
    fn test_handle_does_not_keep_listener_alive() {
        let recorder = Rc::new(Recorder::default());
        let handle = ListenerHandle::new(&recorder);
        assert_eq!(Rc::strong_count(&recorder), 1);

        drop(recorder);
        assert!(!handle.is_attached());
        assert!(!handle.notify(1));
    }

    #[test]
    fn test_default_handle_is_detached() {
        let handle = ListenerHandle::default();
        assert!(!handle.is_attached());
        assert!(!handle.notify(0));
    }
}
