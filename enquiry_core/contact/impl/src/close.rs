use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::OnClose;

/// Pending invocation of the close callback.
///
/// Scheduling again replaces a pending invocation. Dropping cancels it.
#[derive(Debug, Default)]
pub(crate) struct ScheduledClose(Mutex<Option<JoinHandle<()>>>);

impl ScheduledClose {
    pub(crate) fn schedule(&self, delay: Duration, on_close: OnClose) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime available, closing contact form immediately");
            on_close();
            return;
        };

        info!(?delay, "scheduling contact form close");
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("closing contact form");
            on_close();
        });
        self.replace(Some(task));
    }

    fn replace(&self, task: Option<JoinHandle<()>>) {
        let mut slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = std::mem::replace(&mut *slot, task) {
            previous.abort();
        }
    }
}

impl Drop for ScheduledClose {
    fn drop(&mut self) {
        self.replace(None);
    }
}
