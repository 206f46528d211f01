use std::future::Future;

use thiserror::Error;

/// Fire-and-forget sink of a hosted form backend.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormSinkApiService: Send + Sync + 'static {
    /// Transmit the payload as a single form submission.
    ///
    /// The response of the backend is neither inspected nor returned. The
    /// submission counts as sent once the request has been transmitted; only
    /// transport level failures (connectivity, DNS, timeouts) are reported.
    fn submit(
        &self,
        payload: FormPayload,
    ) -> impl Future<Output = Result<(), FormSinkTransportError>> + Send;
}

#[derive(Debug, Error)]
#[error("Failed to transmit form submission: {0}")]
pub struct FormSinkTransportError(#[from] pub anyhow::Error);

/// Ordered list of `(field identifier, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload(Vec<(String, String)>);

impl FormPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for FormPayload {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(feature = "mock")]
impl MockFormSinkApiService {
    pub fn with_submit(mut self, payload: FormPayload, result: Result<(), String>) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    result.map_err(|err| FormSinkTransportError(anyhow::anyhow!(err))),
                ))
            });
        self
    }
}
