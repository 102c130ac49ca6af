//! Contact form fields, validation, and the post-submit acknowledgment.
//!
//! TRADE-OFFS
//! ==========
//! Submission never leaves the browser: a valid form flips to `Submitted`,
//! logs, and resets itself after `FORM_RESET_DELAY`. The reset is ticketed so
//! a timer that outlives its form (or a later submission) cannot clobber the
//! fields.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// How long the acknowledgment stays up before the form resets.
pub const FORM_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control `name`/`id` attribute.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        })
    }
}

/// Inline validation failure for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{0} is invalid")]
    Invalid(Field),
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Every rule runs on every pass; the map holds one entry per failing field.
#[must_use]
pub fn validate(input: &ContactInput) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        let value = input.get(field);
        if is_blank(value) {
            errors.insert(field, FieldError::Required(field));
        } else if field == Field::Email && !looks_like_email(value) {
            errors.insert(field, FieldError::Invalid(field));
        }
    }
    errors
}

/// Whitespace as browsers match it: Unicode white space plus the byte-order
/// mark, which `char::is_whitespace` leaves out.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(s: &str) -> bool {
    s.chars().all(is_space)
}

/// True when `s` contains `<non-ws>+@<non-ws>+.<non-ws>+` anywhere.
///
/// Equivalent to an unanchored `\S+@\S+\.\S+`: some `@` has a non-space
/// character before it, and within the non-space run after it there is a
/// `.` with at least one character on each side.
#[must_use]
pub fn looks_like_email(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.iter().enumerate().any(|(at, &c)| {
        if c != '@' || at == 0 || is_space(chars[at - 1]) {
            return false;
        }
        let run_end = chars[at + 1..]
            .iter()
            .position(|&ch| is_space(ch))
            .map_or(chars.len(), |p| at + 1 + p);
        (at + 2..run_end.saturating_sub(1)).any(|dot| chars[dot] == '.')
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Identifies one scheduled reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Outcome of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now on the form.
    Rejected,
    /// Accepted; call `finish_reset` with the ticket after `FORM_RESET_DELAY`.
    Submitted(ResetTicket),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub input: ContactInput,
    pub errors: FieldErrors,
    pub phase: FormPhase,
    seq: u64,
}

impl ContactForm {
    /// User edit: store the value and clear that field's error only.
    pub fn set_field(&mut self, field: Field, value: String) {
        *self.input.get_mut(field) = value;
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected;
        }
        log::info!(
            "contact form submitted: name={:?} email={:?} message_len={}",
            self.input.name,
            self.input.email,
            self.input.message.len()
        );
        self.phase = FormPhase::Submitted;
        self.seq += 1;
        SubmitOutcome::Submitted(ResetTicket(self.seq))
    }

    /// Deferred reset after submission. Returns whether it applied.
    pub fn finish_reset(&mut self, ticket: ResetTicket) -> bool {
        if self.phase != FormPhase::Submitted || ticket.0 != self.seq {
            return false;
        }
        self.input = ContactInput::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
        true
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }
}
