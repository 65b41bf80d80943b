use uuid::Uuid;

use crate::errors::FormError;
use crate::notify::Notifier;
use crate::storage::SubmissionSink;
use crate::wizard::session::WizardSession;
use crate::wizard::state::FieldValue;

/// Drives one [`WizardSession`] against its two external collaborators: the
/// submission sink receiving finalized records and the notification channel
/// receiving `(title, message)` pairs for failures and confirmations.
pub struct WizardController<'a> {
    session: WizardSession,
    sink: &'a mut dyn SubmissionSink,
    notifier: &'a mut dyn Notifier,
}

impl<'a> WizardController<'a> {
    pub fn new(
        session: WizardSession,
        sink: &'a mut dyn SubmissionSink,
        notifier: &'a mut dyn Notifier,
    ) -> Self {
        Self {
            session,
            sink,
            notifier,
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: FieldValue) {
        self.session.set_field(key, value);
    }

    /// Attempts to advance. On validation failure the reason is surfaced
    /// through the notifier and `false` is returned; nothing else changes.
    pub fn next(&mut self) -> bool {
        match self.session.next() {
            Ok(_) => true,
            Err(failure) => {
                self.notifier.warn("Incomplete step", &failure.message);
                false
            }
        }
    }

    pub fn previous(&mut self) -> usize {
        self.session.previous()
    }

    /// Finalizes and hands the record to the sink. Below the terminal step the
    /// call is ignored apart from a notification; on validation failure the
    /// reason is surfaced exactly as for [`next`](Self::next). Returns the
    /// stored record id on success, after resetting the session.
    pub fn submit(&mut self) -> Result<Option<Uuid>, FormError> {
        let record = match self.session.finalize() {
            Ok(record) => record,
            Err(failure) => {
                self.notifier.warn("Submission blocked", &failure.message);
                return Ok(None);
            }
        };

        let id = self.sink.submit(&record)?;
        tracing::info!(
            flow = self.session.kind().slug(),
            %id,
            "record submitted"
        );
        self.notifier.confirm(
            &format!("{} submitted", self.session.kind().title()),
            &format!("Recorded as {id}"),
        );
        self.session.reset();
        Ok(Some(id))
    }
}
