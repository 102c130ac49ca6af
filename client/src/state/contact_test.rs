use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(Field::Name, name.to_owned());
    form.set_field(Field::Email, email.to_owned());
    form.set_field(Field::Message, message.to_owned());
    form
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_minimal_address() {
    assert!(looks_like_email("a@b.c"));
    assert!(looks_like_email("j@x.com"));
    assert!(looks_like_email("first.last@sub.domain.org"));
}

#[test]
fn email_shape_rejects_missing_parts() {
    assert!(!looks_like_email("abc"));
    assert!(!looks_like_email("@b.c"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("a@.c"));
    assert!(!looks_like_email("a@b."));
    assert!(!looks_like_email("a @b.c"));
    assert!(!looks_like_email("a@ b.c"));
}

#[test]
fn email_shape_is_an_unanchored_search() {
    assert!(looks_like_email("mail me at a@b.c please"));
    assert!(looks_like_email("a@b..c"));
    assert!(looks_like_email("x y@z.w"));
    assert!(looks_like_email("@@a@b.c"));
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert!(!looks_like_email("a@b.\u{FEFF}"));
    assert!(!looks_like_email("a\u{FEFF}@b.c"));
    assert!(looks_like_email("\u{FEFF}a@b.c\u{FEFF}"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn empty_input_fails_every_field_as_required() {
    let errors = validate(&ContactInput::default());
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[&Field::Name], FieldError::Required(Field::Name));
    assert_eq!(errors[&Field::Email], FieldError::Required(Field::Email));
    assert_eq!(errors[&Field::Message], FieldError::Required(Field::Message));
}

#[test]
fn whitespace_only_counts_as_empty() {
    let input = ContactInput { name: "  ".into(), email: "\t".into(), message: "\n".into() };
    let errors = validate(&input);
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[&Field::Email], FieldError::Required(Field::Email));
}

#[test]
fn byte_order_mark_alone_counts_as_empty() {
    let input = ContactInput { name: "\u{FEFF}".into(), email: " \u{FEFF} ".into(), message: "hi".into() };
    let errors = validate(&input);
    assert_eq!(errors[&Field::Name], FieldError::Required(Field::Name));
    assert_eq!(errors[&Field::Email], FieldError::Required(Field::Email));
    assert!(!errors.contains_key(&Field::Message));
}

#[test]
fn malformed_email_is_invalid_not_required() {
    let input = ContactInput { name: "Jane".into(), email: "abc".into(), message: "hi".into() };
    let errors = validate(&input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[&Field::Email], FieldError::Invalid(Field::Email));
}

#[test]
fn valid_input_has_no_errors() {
    let input = ContactInput { name: "Jane".into(), email: "j@x.com".into(), message: "hi".into() };
    assert!(validate(&input).is_empty());
}

#[test]
fn error_messages_read_naturally() {
    assert_eq!(FieldError::Required(Field::Name).to_string(), "Name is required");
    assert_eq!(FieldError::Required(Field::Email).to_string(), "Email is required");
    assert_eq!(FieldError::Invalid(Field::Email).to_string(), "Email is invalid");
    assert_eq!(FieldError::Required(Field::Message).to_string(), "Message is required");
}

#[test]
fn field_keys_match_form_controls() {
    let keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, ["name", "email", "message"]);
}

// =============================================================
// ContactForm lifecycle
// =============================================================

#[test]
fn rejected_submit_keeps_fields_and_sets_errors() {
    let mut form = filled("Jane", "nope", "");
    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.input.name, "Jane");
    assert_eq!(form.error(Field::Email), Some(FieldError::Invalid(Field::Email)));
    assert_eq!(form.error(Field::Message), Some(FieldError::Required(Field::Message)));
    assert_eq!(form.error(Field::Name), None);
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = ContactForm::default();
    form.submit();
    assert_eq!(form.errors.len(), 3);

    form.set_field(Field::Email, "j".into());
    assert_eq!(form.error(Field::Email), None);
    assert!(form.error(Field::Name).is_some());
    assert!(form.error(Field::Message).is_some());
}

#[test]
fn valid_submit_acknowledges_then_resets() {
    let mut form = filled("Jane", "j@x.com", "hi");
    let SubmitOutcome::Submitted(ticket) = form.submit() else {
        panic!("valid form should submit");
    };
    assert!(form.errors.is_empty());
    assert!(form.is_submitted());
    assert_eq!(form.input.name, "Jane");

    assert!(form.finish_reset(ticket));
    assert_eq!(form.input, ContactInput::default());
    assert_eq!(form.input.name, "");
    assert_eq!(form.input.email, "");
    assert_eq!(form.input.message, "");
    assert_eq!(form.phase, FormPhase::Editing);
}

#[test]
fn reset_ticket_applies_once() {
    let mut form = filled("Jane", "j@x.com", "hi");
    let SubmitOutcome::Submitted(ticket) = form.submit() else {
        panic!("valid form should submit");
    };
    assert!(form.finish_reset(ticket));
    form.set_field(Field::Name, "Again".into());
    assert!(!form.finish_reset(ticket));
    assert_eq!(form.input.name, "Again");
}

#[test]
fn previous_submission_ticket_is_stale() {
    let mut form = filled("Jane", "j@x.com", "hi");
    let SubmitOutcome::Submitted(first) = form.submit() else {
        panic!("valid form should submit");
    };
    let SubmitOutcome::Submitted(second) = form.submit() else {
        panic!("valid form should submit");
    };
    assert!(!form.finish_reset(first));
    assert!(form.is_submitted());
    assert!(form.finish_reset(second));
}
