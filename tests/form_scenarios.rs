//! End-to-end form scenarios through the public API

use pretty_assertions::assert_eq;
use user_form_tui::error::FormError;
use user_form_tui::state::{
    submit, validate, FieldName, FieldSet, FormState, Phase, RecordSink, SubmissionController,
    SubmittedRecord,
};

/// Sink that keeps every record it receives
#[derive(Default)]
struct CollectingSink {
    records: Vec<SubmittedRecord>,
}

impl RecordSink for CollectingSink {
    fn accept(&mut self, record: &SubmittedRecord) {
        self.records.push(record.clone());
    }
}

fn valid_fields() -> FieldSet {
    FieldSet::new()
        .with(FieldName::Name, "Asha")
        .with(FieldName::Contact, "9876543210")
        .with(FieldName::Email, "a@b.com")
        .with(FieldName::Address, "12 MG Road")
        .with(FieldName::Pincode, "560001")
        .with(FieldName::City, "Bengaluru")
}

fn form_with(fields: &FieldSet) -> FormState {
    let mut form = FormState::new();
    for (name, value) in fields.iter() {
        form.on_field_change(name.key(), value).unwrap();
    }
    form
}

fn invalid_fields(fields: &FieldSet) -> Vec<FieldName> {
    validate(fields).fields().collect()
}

#[test]
fn short_contact_only_flags_contact() {
    let fields = valid_fields().with(FieldName::Contact, "12345");
    let errors = validate(&fields);

    assert_eq!(invalid_fields(&fields), vec![FieldName::Contact]);
    assert_eq!(
        errors.get(FieldName::Contact),
        Some("Contact number must be 10 digits")
    );
}

#[test]
fn pincode_leading_zero_is_rejected() {
    let zero = valid_fields().with(FieldName::Pincode, "012345");
    assert_eq!(invalid_fields(&zero), vec![FieldName::Pincode]);

    let ok = valid_fields().with(FieldName::Pincode, "560001");
    assert!(validate(&ok).is_empty());
}

#[test]
fn email_requires_top_level_domain() {
    let bare = valid_fields().with(FieldName::Email, "a@b");
    assert_eq!(invalid_fields(&bare), vec![FieldName::Email]);

    let ok = valid_fields().with(FieldName::Email, "a@b.com");
    assert!(validate(&ok).is_empty());
}

#[test]
fn valid_submission_resets_form_and_reaches_sink() {
    let mut form = form_with(&valid_fields());
    let mut controller = SubmissionController::new(CollectingSink::default());

    let record = controller.submit(&mut form).unwrap();

    assert_eq!(record.fields(), &valid_fields());
    assert_eq!(form.fields(), &FieldSet::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.phase(), Phase::SubmittedDisplay);
    assert_eq!(controller.sink().records, vec![record]);
}

#[test]
fn failed_submission_then_correction_succeeds() {
    let typed = valid_fields()
        .with(FieldName::Contact, "12345")
        .with(FieldName::City, "");
    let mut form = form_with(&typed);

    let errors = submit(&mut form).unwrap_err();
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![FieldName::Contact, FieldName::City]
    );
    assert_eq!(form.fields(), &typed);

    // Editing clears only the edited field's error
    form.on_field_change("contact", "9876543210").unwrap();
    assert_eq!(
        form.errors().fields().collect::<Vec<_>>(),
        vec![FieldName::City]
    );

    form.on_field_change("city", "Mysuru").unwrap();
    let record = submit(&mut form).unwrap();
    assert_eq!(record.get(FieldName::City), "Mysuru");
    assert!(form.fields().is_empty());
}

#[test]
fn every_single_violation_is_reported_alone() {
    let breakages = [
        (FieldName::Name, "   "),
        (FieldName::Contact, "98765"),
        (FieldName::Email, "asha@mail"),
        (FieldName::Address, ""),
        (FieldName::Pincode, "56001a"),
        (FieldName::City, ""),
    ];
    for (name, bad) in breakages {
        let fields = valid_fields().with(name, bad);
        assert_eq!(invalid_fields(&fields), vec![name], "breaking {name}");
    }
}

#[test]
fn unlisted_city_never_reaches_a_submission() {
    let mut form = form_with(&valid_fields().with(FieldName::City, ""));

    let result = form.on_field_change("city", "Chennai");
    assert_eq!(result, Err(FormError::UnknownCity("Chennai".to_string())));

    let errors = submit(&mut form).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldName::City]);
    assert!(form.last_submission().is_none());
}
