use enquiry_config::Config;
use enquiry_core_contact_impl::{
    ContactFormConfig, ContactFormProps, ContactFormServiceImpl, OnClose,
};
use enquiry_extern_impl::{
    form_sink::{FormSinkApiServiceConfig, FormSinkApiServiceImpl},
    http::HttpClient,
};
use enquiry_models::{contact::FormVariant, notification::Toast};
use enquiry_notify_impl::{ToastConfig, ToastNotificationServiceImpl};
use tokio::sync::watch;

pub type ContactForm = ContactFormServiceImpl<FormSinkApiServiceImpl, ToastNotificationServiceImpl>;

/// What the host decides about the form it embeds.
#[derive(Default)]
pub struct HostOptions {
    pub variant: FormVariant,
    /// Overrides the configured default category.
    pub query: Option<String>,
    pub on_close: Option<OnClose>,
}

/// Builds a contact form wired to the configured form sink, together with a
/// receiver for the toasts it shows.
pub fn contact_form(
    config: &Config,
    options: HostOptions,
) -> anyhow::Result<(ContactForm, watch::Receiver<Option<Toast>>)> {
    let client = HttpClient::new(config.form_sink.timeout.map(Into::into))?;
    let form_sink = FormSinkApiServiceImpl::new(
        FormSinkApiServiceConfig {
            endpoint: config.form_sink.endpoint.clone().into(),
        },
        client,
    );

    let notify = ToastNotificationServiceImpl::new(ToastConfig {
        auto_close: config.notifications.auto_close.into(),
        position: config.notifications.position,
    });
    let toasts = notify.subscribe();

    let form_config = ContactFormConfig {
        close_delay: config.contact.close_delay.into(),
        field_mapping: config.form_sink.fields.clone().into(),
    };
    let props = ContactFormProps {
        variant: options.variant,
        query: options
            .query
            .unwrap_or_else(|| config.contact.query.clone()),
        page_title: config.contact.page_title.clone(),
        on_close: options.on_close,
    };

    Ok((
        ContactFormServiceImpl::new(form_sink, notify, form_config, props),
        toasts,
    ))
}
