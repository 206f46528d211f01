use enquiry_models::notification::{Severity, Toast};
use tokio::{sync::watch, task::JoinHandle};

/// Prints every toast shown by the form to stdout.
///
/// The task finishes once the notification service is dropped.
pub fn spawn_toast_renderer(mut toasts: watch::Receiver<Option<Toast>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while toasts.changed().await.is_ok() {
            if let Some(toast) = &*toasts.borrow_and_update() {
                println!("{}", render(toast));
            }
        }
    })
}

pub fn render(toast: &Toast) -> String {
    let icon = match toast.severity {
        Severity::Info => "i",
        Severity::Success => "✓",
        Severity::Error => "✗",
    };
    format!("[{icon}] {}", toast.message)
}
