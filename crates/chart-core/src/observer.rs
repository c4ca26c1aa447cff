// File: crates/chart-core/src/observer.rs
// Summary: Ordered registry of callbacks fired after each render-triggering mutation.

use tracing::warn;

type Callback<S> = Box<dyn FnMut(&S) -> anyhow::Result<()>>;

/// Callbacks run synchronously, once each, in registration order. Duplicates are
/// kept and fire separately.
///
/// A callback that returns an error is logged and the remaining callbacks still
/// run. Callbacks only receive a shared reference to the subject, so they cannot
/// start another mutation while a notification is in progress.
pub struct RenderObserverRegistry<S> {
    callbacks: Vec<Callback<S>>,
}

impl<S> RenderObserverRegistry<S> {
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    pub fn register<F>(&mut self, callback: F)
    where
        F: FnMut(&S) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Invoke every callback with `subject`. Returns how many callbacks failed.
    pub fn notify_all(&mut self, subject: &S) -> usize {
        let mut failed = 0;
        for (i, cb) in self.callbacks.iter_mut().enumerate() {
            if let Err(e) = cb(subject) {
                failed += 1;
                warn!(observer = i, error = %e, "render observer failed");
            }
        }
        failed
    }
}

impl<S> Default for RenderObserverRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
