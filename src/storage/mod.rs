pub mod json_backend;

use uuid::Uuid;

use crate::errors::FormError;
use crate::forms::SubmittedRecord;

pub use json_backend::JsonArchive;

pub type Result<T> = std::result::Result<T, FormError>;

/// Abstraction over destinations for finalized wizard records. The wizard
/// controller guarantees records are fully validated before they arrive here.
pub trait SubmissionSink {
    fn submit(&mut self, record: &SubmittedRecord) -> Result<Uuid>;
}

/// Vec-backed sink for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<SubmittedRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SubmittedRecord] {
        &self.records
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, record: &SubmittedRecord) -> Result<Uuid> {
        self.records.push(record.clone());
        Ok(record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FlowPayload, SessionFeedback};

    #[test]
    fn memory_sink_keeps_submission_order() {
        let mut sink = MemorySink::new();
        for rating in [3, 5] {
            let record = SubmittedRecord::new(FlowPayload::SessionFeedback(SessionFeedback {
                rating,
                highlights: "Good pace".into(),
                improvements: None,
                coach: None,
                would_recommend: true,
            }));
            let id = sink.submit(&record).unwrap();
            assert_eq!(id, record.id);
        }
        assert_eq!(sink.records().len(), 2);
    }
}
