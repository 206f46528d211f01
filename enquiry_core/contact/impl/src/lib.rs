use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use close::ScheduledClose;
use enquiry_core_contact_contracts::{ContactFormService, ContactInputError, ContactSubmitError};
use enquiry_extern_contracts::form_sink::FormSinkApiService;
use enquiry_models::{
    contact::{
        ContactField, ContactFieldMapping, ContactRequest, FormVariant, RequiredFields,
        DEFAULT_PAGE_TITLE, DEFAULT_QUERY,
    },
    notification::Severity,
};
use enquiry_notify_contracts::NotificationService;
use tracing::{debug, error, info, instrument, warn};

mod close;
pub mod input;
pub mod payload;
pub mod validate;

#[cfg(test)]
mod tests;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! Our team will contact you shortly.";
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or call us directly.";

/// Callback invoked when the host should close the form.
pub type OnClose = Arc<dyn Fn() + Send + Sync>;

pub struct ContactFormServiceImpl<FormSink, Notify> {
    form_sink: FormSink,
    notify: Notify,
    config: ContactFormConfig,
    props: ContactFormProps,
    required: RequiredFields,
    state: Mutex<ContactRequest>,
    submitting: AtomicBool,
    close: ScheduledClose,
}

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    /// Time between a successful submission and the close callback.
    pub close_delay: Duration,
    pub field_mapping: Arc<ContactFieldMapping>,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_secs(2),
            field_mapping: Default::default(),
        }
    }
}

/// Options chosen by the host embedding the form.
#[derive(Clone)]
pub struct ContactFormProps {
    pub variant: FormVariant,
    /// Category tag sent with every request and restored on reset.
    pub query: String,
    pub page_title: String,
    pub on_close: Option<OnClose>,
}

impl Default for ContactFormProps {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            query: DEFAULT_QUERY.into(),
            page_title: DEFAULT_PAGE_TITLE.into(),
            on_close: None,
        }
    }
}

impl fmt::Debug for ContactFormProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactFormProps")
            .field("variant", &self.variant)
            .field("query", &self.query)
            .field("page_title", &self.page_title)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl<FormSink, Notify> ContactFormServiceImpl<FormSink, Notify> {
    pub fn new(
        form_sink: FormSink,
        notify: Notify,
        config: ContactFormConfig,
        props: ContactFormProps,
    ) -> Self {
        Self {
            form_sink,
            notify,
            config,
            required: props.variant.required_fields(),
            state: Mutex::new(ContactRequest::new(props.query.as_str())),
            props,
            submitting: AtomicBool::new(false),
            close: ScheduledClose::default(),
        }
    }

    fn state(&self) -> MutexGuard<'_, ContactRequest> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reset(&self) {
        *self.state() = ContactRequest::new(self.props.query.as_str());
        info!("contact form reset");
    }
}

impl<FormSink, Notify> ContactFormService for ContactFormServiceImpl<FormSink, Notify>
where
    FormSink: FormSinkApiService,
    Notify: NotificationService,
{
    fn variant(&self) -> FormVariant {
        self.props.variant
    }

    fn page_title(&self) -> String {
        self.props.page_title.clone()
    }

    fn form(&self) -> ContactRequest {
        self.state().clone()
    }

    fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    #[instrument(skip(self, value))]
    fn set_field(&self, field: ContactField, value: String) -> Result<(), ContactInputError> {
        if !field.is_editable() {
            return Err(ContactInputError::ReadOnly(field));
        }

        if field == ContactField::ContactNumber {
            if let Err(err) = input::check_contact_number(&value) {
                warn!("rejected contact number input");
                self.notify.notify(&err.to_string(), Severity::Error);
                return Err(err);
            }
        }

        self.state().set(field, value);
        Ok(())
    }

    #[instrument(skip(self), fields(variant = ?self.props.variant))]
    async fn submit(&self) -> Result<(), ContactSubmitError> {
        let Some(_submitting) = SubmittingGuard::acquire(&self.submitting) else {
            debug!("submission already in progress");
            return Err(ContactSubmitError::InProgress);
        };

        let request = self.form();
        let request = match validate::validate(&request, &self.required) {
            Ok(request) => request,
            Err(err) => {
                warn!(%err, "contact request is invalid");
                self.notify.notify(&err.to_string(), Severity::Error);
                return Err(err.into());
            }
        };

        let payload = payload::to_payload(&request, &self.config.field_mapping);
        info!("sending contact request");
        if let Err(err) = self.form_sink.submit(payload).await {
            error!("Failed to send contact request: {err:#}");
            self.notify.notify(SUBMIT_FAILURE_MESSAGE, Severity::Error);
            return Err(err.into());
        }

        info!("contact request sent");
        self.notify.notify(SUBMIT_SUCCESS_MESSAGE, Severity::Success);
        self.reset();

        if let Some(on_close) = &self.props.on_close {
            self.close
                .schedule(self.config.close_delay, Arc::clone(on_close));
        }

        Ok(())
    }
}

/// Holds the submitting flag for the duration of a submission and clears it
/// again on every exit path.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
