use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing, Router,
};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;

const FORM_RESPONSE_ROUTE: &str = "/forms/d/:form_id/formResponse";

/// Submissions to this form id are recorded but answered with a server error.
pub const FAILING_FORM_ID: &str = "broken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form_id: String,
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Shared log of everything the fake backend received.
#[derive(Debug, Clone, Default)]
pub struct Submissions(Arc<Mutex<Vec<Submission>>>);

impl Submissions {
    pub async fn all(&self) -> Vec<Submission> {
        self.0.lock().await.clone()
    }
}

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting form sink testing server on {host}:{port}");
    info!("Form response endpoint: http://{host}:{port}/forms/d/FORM_ID/formResponse");
    info!("Submissions to form id {FAILING_FORM_ID:?} are answered with status 500");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(Submissions::default()))
        .await
        .context("Failed to start HTTP server")
}

/// Starts the server on a random port in the background and returns its
/// address together with the submission log.
pub async fn spawn_server(host: IpAddr) -> anyhow::Result<(SocketAddr, Submissions)> {
    let listener = TcpListener::bind((host, 0))
        .await
        .with_context(|| format!("Failed to bind to {host}"))?;
    let addr = listener.local_addr()?;

    let submissions = Submissions::default();
    let router = router(submissions.clone());
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok((addr, submissions))
}

pub fn router(submissions: Submissions) -> Router<()> {
    Router::new()
        .route(FORM_RESPONSE_ROUTE, routing::post(form_response))
        .with_state(submissions)
}

async fn form_response(
    State(submissions): State<Submissions>,
    Path(form_id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let mut fields = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return err.into_response(),
        };
        let name = field.name().unwrap_or_default().to_owned();
        match field.text().await {
            Ok(value) => fields.push((name, value)),
            Err(err) => return err.into_response(),
        }
    }

    info!(%form_id, ?fields, "Received form submission");
    let failing = form_id == FAILING_FORM_ID;
    submissions.0.lock().await.push(Submission { form_id, fields });

    if failing {
        return (StatusCode::INTERNAL_SERVER_ERROR, Html("<p>Something went wrong.</p>"))
            .into_response();
    }

    Html("<p>Your response has been recorded.</p>").into_response()
}
