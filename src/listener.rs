use leptos::prelude::on_cleanup;

type Release = Box<dyn FnOnce(&'static str) + Send + Sync>;

/// Owns one browser registration and releases it exactly once, either
/// explicitly, on drop, or when the reactive owner is cleaned up.
pub struct ScopedListener {
    event: &'static str,
    release: Option<Release>,
}

impl ScopedListener {
    pub fn new<F>(event: &'static str, release: F) -> Self
    where
        F: FnOnce(&'static str) + Send + Sync + 'static,
    {
        Self {
            event,
            release: Some(Box::new(release)),
        }
    }

    /// Guards a registration handle, consuming it with `remove` on release.
    pub fn for_handle<H, F>(event: &'static str, handle: H, remove: F) -> Self
    where
        H: Send + Sync + 'static,
        F: FnOnce(H) + Send + Sync + 'static,
    {
        Self::new(event, move |_| remove(handle))
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("releasing {} registration", self.event);
            release(self.event);
        }
    }

    /// Ties the registration to the current reactive owner, so unmounting the
    /// component that acquired it deregisters it.
    pub fn scoped(self) {
        let mut guard = self;
        on_cleanup(move || guard.release());
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ScopedListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedListener")
            .field("event", &self.event)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) + Send + Sync) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |event| sink.lock().unwrap().push(event))
    }

    #[test]
    fn test_release_once() {
        let (calls, record) = recorder();
        let mut guard = ScopedListener::new("scroll", record);
        assert!(guard.is_active());
        guard.release();
        guard.release();
        assert!(!guard.is_active());
        drop(guard);
        assert_eq!(*calls.lock().unwrap(), ["scroll"]);
    }

    #[test]
    fn test_release_on_drop() {
        let (calls, record) = recorder();
        {
            let guard = ScopedListener::new("resize", record);
            assert_eq!(guard.event(), "resize");
        }
        assert_eq!(*calls.lock().unwrap(), ["resize"]);
    }

    #[test]
    fn test_release_on_owner_cleanup() {
        let (calls, record) = recorder();
        let owner = Owner::new();
        owner.with(|| {
            ScopedListener::new("scroll", record).scoped();
        });
        assert!(calls.lock().unwrap().is_empty());

        owner.cleanup();
        assert_eq!(*calls.lock().unwrap(), ["scroll"]);
    }

    /// Stands in for `WindowListenerHandle`, which needs a browser window.
    struct FakeHandle {
        removed: Arc<Mutex<u32>>,
    }

    impl FakeHandle {
        fn remove(self) {
            *self.removed.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_scroll_handle_removed_once_on_unmount() {
        let removed = Arc::new(Mutex::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let handle = FakeHandle {
                removed: removed.clone(),
            };
            let guard = ScopedListener::for_handle("scroll", handle, FakeHandle::remove);
            assert_eq!(guard.event(), "scroll");
            guard.scoped();
        });
        assert_eq!(*removed.lock().unwrap(), 0);

        owner.cleanup();
        assert_eq!(*removed.lock().unwrap(), 1);
        owner.cleanup();
        drop(owner);
        assert_eq!(*removed.lock().unwrap(), 1);
    }
}
