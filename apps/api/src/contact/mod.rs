// Contact intake: validate a form submission and log it. Nothing is stored or forwarded.

pub mod handlers;
pub mod validation;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::contact::validation::ContactSubmission;

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub message: &'static str,
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Logs an accepted submission exactly once and returns its receipt.
pub fn record_submission(submission: &ContactSubmission) -> ContactReceipt {
    let receipt = ContactReceipt {
        message: "Message received successfully",
        id: Uuid::new_v4(),
        received_at: Utc::now(),
    };

    info!(
        target: "contact",
        id = %receipt.id,
        name = %submission.name,
        email = %submission.email,
        body = %submission.message,
        "Contact form submission"
    );

    receipt
}

#[cfg(test)]
pub(crate) mod testing {
    //! Counts `contact` log events so tests can assert on logging side effects.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};

    #[derive(Clone, Default)]
    pub struct ContactEventCounter(Arc<AtomicUsize>);

    impl ContactEventCounter {
        pub fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl<S: Subscriber> Layer<S> for ContactEventCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() == "contact" {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
}
