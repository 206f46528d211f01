use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use enquiry_config::Config;
use enquiry_core_contact_contracts::ContactFormService;
use enquiry_core_contact_impl::OnClose;
use enquiry_models::contact::{ContactField, FormVariant};
use tokio::sync::Notify;
use tracing::info;

use crate::{
    environment::{self, HostOptions},
    terminal,
};

#[derive(Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    contact_number: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Category of the request, defaults to the configured one
    #[arg(long)]
    query: Option<String>,
    /// Use the compact popup form which only asks for name, email and
    /// contact number, and wait for it to close after sending
    #[arg(long)]
    popup: bool,
}

impl SubmitArgs {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let Self {
            name,
            email,
            contact_number,
            address,
            message,
            query,
            popup,
        } = self;

        let closed = Arc::new(Notify::new());
        let on_close: Option<OnClose> = popup.then(|| {
            let closed = Arc::clone(&closed);
            Arc::new(move || closed.notify_one()) as OnClose
        });

        let (form, toasts) = environment::contact_form(
            &config,
            HostOptions {
                variant: if popup {
                    FormVariant::Popup
                } else {
                    FormVariant::FullPage
                },
                query,
                on_close,
            },
        )?;
        let renderer = terminal::spawn_toast_renderer(toasts);

        let result = async {
            for (field, value) in [
                (ContactField::Name, name),
                (ContactField::Email, email),
                (ContactField::ContactNumber, contact_number),
                (ContactField::Address, address),
                (ContactField::Message, message),
            ] {
                form.set_field(field, value)
                    .with_context(|| format!("Invalid value for {}", field.label()))?;
            }

            form.submit().await.context("Failed to send contact request")?;

            if form.variant().is_popup() {
                closed.notified().await;
                info!("Contact form closed");
            }

            anyhow::Ok(())
        }
        .await;

        drop(form);
        renderer.await?;

        result
    }
}
