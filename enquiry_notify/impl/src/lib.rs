use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
    time::Duration,
};

use enquiry_models::notification::{Severity, Toast, ToastPosition};
use enquiry_notify_contracts::NotificationService;
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::{debug, warn};

/// Toast overlay showing at most one message at a time.
///
/// Renderers observe the visible toast through [`subscribe`](Self::subscribe).
/// Every toast is dismissed automatically after
/// [`ToastConfig::auto_close`], which requires `notify` to be called from
/// within a tokio runtime. Outside of a runtime toasts stay until replaced or
/// dismissed explicitly.
#[derive(Debug)]
pub struct ToastNotificationServiceImpl {
    config: ToastConfig,
    next_id: AtomicU64,
    current: Arc<watch::Sender<Option<Toast>>>,
    auto_dismiss: Mutex<Option<JoinHandle<()>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    pub auto_close: Duration,
    pub position: ToastPosition,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close: Duration::from_secs(3),
            position: ToastPosition::default(),
        }
    }
}

impl ToastNotificationServiceImpl {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(0),
            current: Arc::new(watch::Sender::new(None)),
            auto_dismiss: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Toast>> {
        self.current.subscribe()
    }

    /// Returns the toast that is currently visible.
    pub fn current(&self) -> Option<Toast> {
        self.current.borrow().clone()
    }

    fn replace_auto_dismiss(&self, task: Option<JoinHandle<()>>) {
        let mut slot = self
            .auto_dismiss
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = std::mem::replace(&mut *slot, task) {
            previous.abort();
        }
    }
}

impl NotificationService for ToastNotificationServiceImpl {
    fn notify(&self, message: &str, severity: Severity) {
        self.dismiss();

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(id, %severity, message, "showing toast");
        self.current.send_replace(Some(Toast {
            id,
            message: message.into(),
            severity,
            position: self.config.position,
        }));

        let Ok(runtime) = Handle::try_current() else {
            warn!(id, "no async runtime available, toast will not be dismissed automatically");
            return;
        };
        let current = Arc::clone(&self.current);
        let auto_close = self.config.auto_close;
        let task = runtime.spawn(async move {
            tokio::time::sleep(auto_close).await;
            current.send_if_modified(|toast| {
                let expired = toast.as_ref().is_some_and(|toast| toast.id == id);
                if expired {
                    debug!(id, "toast expired");
                    *toast = None;
                }
                expired
            });
        });
        self.replace_auto_dismiss(Some(task));
    }

    fn dismiss(&self) {
        self.replace_auto_dismiss(None);
        self.current.send_if_modified(|toast| toast.take().is_some());
    }
}

impl Drop for ToastNotificationServiceImpl {
    fn drop(&mut self) {
        self.replace_auto_dismiss(None);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_sut() -> ToastNotificationServiceImpl {
        ToastNotificationServiceImpl::new(ToastConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn show() {
        // Arrange
        let sut = make_sut();

        // Act
        sut.notify("Please enter your name!", Severity::Error);

        // Assert
        assert_eq!(
            sut.current(),
            Some(Toast {
                id: 0,
                message: "Please enter your name!".into(),
                severity: Severity::Error,
                position: ToastPosition::TopCenter,
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn new_toast_replaces_visible_one() {
        // Arrange
        let sut = make_sut();
        sut.notify("first", Severity::Info);

        // Act
        sut.notify("second", Severity::Success);

        // Assert
        let toast = sut.current().unwrap();
        assert_eq!(toast.id, 1);
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_dismiss() {
        // Arrange
        let sut = make_sut();
        sut.notify("hello", Severity::Info);

        // Act
        tokio::time::sleep(Duration::from_millis(2900)).await;
        let before = sut.current();
        tokio::time::sleep(Duration::from_millis(200)).await;
        let after = sut.current();

        // Assert
        assert!(before.is_some());
        assert_eq!(after, None);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_dismiss_keeps_newer_toast() {
        // Arrange
        let sut = make_sut();
        sut.notify("first", Severity::Info);
        tokio::time::sleep(Duration::from_secs(2)).await;
        sut.notify("second", Severity::Info);

        // Act
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let at_first_deadline = sut.current();
        tokio::time::sleep(Duration::from_secs(2)).await;
        let at_second_deadline = sut.current();

        // Assert
        assert_eq!(at_first_deadline.unwrap().message, "second");
        assert_eq!(at_second_deadline, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss() {
        // Arrange
        let sut = make_sut();
        let mut rx = sut.subscribe();
        sut.notify("hello", Severity::Info);
        rx.borrow_and_update();

        // Act
        sut.dismiss();

        // Assert
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribe() {
        // Arrange
        let sut = make_sut();
        let mut rx = sut.subscribe();

        // Act
        sut.notify("hello", Severity::Success);

        // Assert
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().message, "hello");
    }

    #[test]
    fn without_runtime() {
        // Arrange
        let sut = make_sut();

        // Act
        sut.notify("hello", Severity::Info);

        // Assert
        assert_eq!(sut.current().unwrap().message, "hello");
    }
}
