use enquiry_models::notification::Severity;

/// Dispatches transient messages to the visitor.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Show `message`, replacing whatever message is currently visible.
    fn notify(&self, message: &str, severity: Severity);

    /// Hide the currently visible message, if any.
    fn dismiss(&self);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_notify(mut self, message: &'static str, severity: Severity) -> Self {
        self.expect_notify()
            .once()
            .withf(move |m, s| m == message && *s == severity)
            .return_const(());
        self
    }
}
