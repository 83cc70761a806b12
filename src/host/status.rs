use std::fmt;

type Release = Box<dyn FnOnce() + Send>;

/// Handle to a visible status message.
///
/// The message is released exactly once, either through `dispose` or when
/// the handle is dropped.
pub struct StatusMessage {
    release: Option<Release>,
}

impl StatusMessage {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for StatusMessage {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusMessage")
            .field("active", &self.release.is_some())
            .finish()
    }
}
