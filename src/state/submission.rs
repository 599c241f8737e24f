//! Submission controller: validate, then commit or reject

use crate::state::{validate, ErrorSet, FieldName, FieldSet, FormState};
use serde::Serialize;

/// Snapshot of a field set that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmittedRecord {
    fields: FieldSet,
}

impl SubmittedRecord {
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn get(&self, name: FieldName) -> &str {
        self.fields.get(name)
    }
}

impl From<FieldSet> for SubmittedRecord {
    fn from(fields: FieldSet) -> Self {
        Self { fields }
    }
}

/// Downstream consumer of accepted records
#[cfg_attr(test, mockall::automock)]
pub trait RecordSink {
    fn accept(&mut self, record: &SubmittedRecord);
}

/// Sink that reports each accepted record as a log event
#[derive(Debug, Default)]
pub struct LogSink;

impl RecordSink for LogSink {
    fn accept(&mut self, record: &SubmittedRecord) {
        match serde_json::to_string(record) {
            Ok(json) => tracing::info!(record = %json, "Submission accepted"),
            Err(err) => tracing::warn!("Submission accepted but could not be serialized: {err}"),
        }
    }
}

/// Validate the current fields and either commit them or surface the errors.
///
/// On success the form is reset and the record is kept as its last
/// submission. On failure the typed values stay and the errors replace
/// whatever the form showed before.
pub fn submit(form: &mut FormState) -> Result<SubmittedRecord, ErrorSet> {
    let errors = validate(form.fields());
    if errors.is_empty() {
        let record = SubmittedRecord::from(form.fields().clone());
        form.commit(record.clone());
        Ok(record)
    } else {
        let invalid: Vec<&str> = errors.fields().map(FieldName::key).collect();
        tracing::debug!(?invalid, "Submission rejected");
        form.replace_errors(errors.clone());
        Err(errors)
    }
}

/// Runs [`submit`] and forwards accepted records to a [`RecordSink`]
#[derive(Debug, Default)]
pub struct SubmissionController<S: RecordSink = LogSink> {
    sink: S,
}

impl<S: RecordSink> SubmissionController<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn submit(&mut self, form: &mut FormState) -> Result<SubmittedRecord, ErrorSet> {
        let record = submit(form)?;
        self.sink.accept(&record);
        Ok(record)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
