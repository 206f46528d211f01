use std::{io::Write, sync::Arc};

use anyhow::{bail, Context};
use clap::Args;
use enquiry_config::Config;
use enquiry_core_contact_contracts::{ContactFormService, ContactInputError, ContactSubmitError};
use enquiry_core_contact_impl::OnClose;
use enquiry_models::contact::FormVariant;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::Notify,
};

use crate::{
    environment::{self, HostOptions},
    terminal,
};

#[derive(Debug, Args)]
pub struct FillArgs {
    /// Category of the request, defaults to the configured one
    #[arg(long)]
    query: Option<String>,
    /// Use the compact popup form
    #[arg(long)]
    popup: bool,
}

impl FillArgs {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let closed = Arc::new(Notify::new());
        let on_close: Option<OnClose> = self.popup.then(|| {
            let closed = Arc::clone(&closed);
            Arc::new(move || closed.notify_one()) as OnClose
        });

        let (form, toasts) = environment::contact_form(
            &config,
            HostOptions {
                variant: if self.popup {
                    FormVariant::Popup
                } else {
                    FormVariant::FullPage
                },
                query: self.query,
                on_close,
            },
        )?;
        let renderer = terminal::spawn_toast_renderer(toasts);

        let mut stdin = BufReader::new(tokio::io::stdin());
        let result = fill(&form, &mut stdin, &mut std::io::stdout()).await;
        if result.is_ok() && form.variant().is_popup() {
            closed.notified().await;
        }

        drop(form);
        renderer.await?;

        result
    }
}

/// Prompts for every visible field and submits the form.
///
/// An empty answer keeps the current value. Rejected input is asked for again
/// and a failed validation starts over with the values entered so far.
pub async fn fill(
    form: &impl ContactFormService,
    input: &mut (impl AsyncBufRead + Unpin),
    output: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "{}", form.page_title())?;

    loop {
        for field in form.variant().required_fields().iter() {
            loop {
                let current = form.form().get(field).to_owned();
                if current.is_empty() {
                    write!(output, "{}: ", field.label())?;
                } else {
                    write!(output, "{} [{current}]: ", field.label())?;
                }
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line).await? == 0 {
                    bail!("Input closed before the form was submitted");
                }
                let value = line.trim_end_matches(['\r', '\n']);
                if value.is_empty() {
                    break;
                }

                match form.set_field(field, value.into()) {
                    Ok(()) => break,
                    Err(ContactInputError::NonNumeric) => continue,
                    Err(err) => return Err(err.into()),
                }
            }
        }

        match form.submit().await {
            Ok(()) => return Ok(()),
            Err(ContactSubmitError::Validation(_)) => continue,
            Err(err) => return Err(err).context("Failed to send contact request"),
        }
    }
}
