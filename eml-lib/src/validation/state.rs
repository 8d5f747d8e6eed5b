//! Form validation state and aggregate readiness.

use std::fmt;

use super::field::{Field, FieldCheck, PasswordFlags, PasswordHint};
use super::rules::{
    check_password_contains_letter, check_password_length, check_passwords_match, validate_email,
    validate_real_name,
};
use super::sanitize::sanitize_against_pictographs;
use crate::model::RegistrationRecord;

/// What happened to a field change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The text was stored and the field re-validated.
    Accepted,
    /// The text contained a pictograph and was dropped; state is unchanged.
    Rejected,
}

/// Owned copy of everything the form renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub real_name: String,
    pub email: String,
    pub name_error: &'static str,
    pub email_error: &'static str,
    pub confirm_error: &'static str,
    pub flags: PasswordFlags,
    pub length_hint: PasswordHint,
    pub letter_hint: PasswordHint,
    pub all_allowed: bool,
}

/// Raw field values plus the derived checks feeding one readiness flag.
///
/// All mutation goes through [`on_field_change`](Self::on_field_change) and
/// [`reset`](Self::reset), both of which recompute `all_allowed` before
/// returning, so [`is_ready`](Self::is_ready) never observes a stale value.
#[derive(Clone, Default)]
pub struct FormValidationState {
    real_name: String,
    email: String,
    password: String,
    confirm_password: String,

    name_check: FieldCheck,
    email_check: FieldCheck,
    confirm_check: FieldCheck,
    flags: PasswordFlags,

    all_allowed: bool,
}

impl FormValidationState {
    /// Creates a clean form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every value, check and flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies an input change to a field.
    ///
    /// The text is filtered first; a rejected keystroke leaves the form as it
    /// was. Password changes also re-run the match check against the current
    /// confirmation value, and vice versa.
    pub fn on_field_change(&mut self, field: Field, raw: &str) -> InputOutcome {
        let accepted = sanitize_against_pictographs(self.value(field), raw);
        if !std::ptr::eq(accepted, raw) {
            log::debug!("Dropped pictograph input for field {}", field);
            return InputOutcome::Rejected;
        }

        match field {
            Field::RealName => {
                self.real_name = raw.to_string();
                self.name_check = FieldCheck::from_message(validate_real_name(raw));
            }
            Field::Email => {
                self.email = raw.to_string();
                self.email_check = FieldCheck::from_message(validate_email(raw));
            }
            Field::Password => {
                self.password = raw.to_string();
                self.flags = PasswordFlags {
                    contains_letter: check_password_contains_letter(raw),
                    length_valid: check_password_length(raw),
                };
                self.check_match();
            }
            Field::ConfirmPassword => {
                self.confirm_password = raw.to_string();
                self.check_match();
            }
        }

        self.recompute();
        InputOutcome::Accepted
    }

    fn check_match(&mut self) {
        self.confirm_check =
            FieldCheck::from_message(check_passwords_match(&self.password, &self.confirm_password));
    }

    fn recompute(&mut self) {
        self.all_allowed = self.name_check.message().is_empty()
            && self.email_check.message().is_empty()
            && self.flags.length_valid
            && self.flags.contains_letter
            && self.confirm_check.message().is_empty();
    }

    /// Returns `true` if submission is permitted.
    pub fn is_ready(&self) -> bool {
        self.all_allowed
    }

    /// Current accepted text of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::RealName => &self.real_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Inline error message for a field; empty when there is nothing to show.
    ///
    /// The password field has no message of its own, see [`length_hint`](Self::length_hint)
    /// and [`letter_hint`](Self::letter_hint).
    pub fn error(&self, field: Field) -> &'static str {
        match field {
            Field::RealName => self.name_check.message(),
            Field::Email => self.email_check.message(),
            Field::Password => "",
            Field::ConfirmPassword => self.confirm_check.message(),
        }
    }

    pub fn check(&self, field: Field) -> Option<FieldCheck> {
        match field {
            Field::RealName => Some(self.name_check),
            Field::Email => Some(self.email_check),
            Field::Password => None,
            Field::ConfirmPassword => Some(self.confirm_check),
        }
    }

    pub fn password_flags(&self) -> PasswordFlags {
        self.flags
    }

    pub fn length_hint(&self) -> PasswordHint {
        PasswordHint::resolve(&self.password, self.flags.length_valid)
    }

    pub fn letter_hint(&self) -> PasswordHint {
        PasswordHint::resolve(&self.password, self.flags.contains_letter)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            real_name: self.real_name.clone(),
            email: self.email.clone(),
            name_error: self.name_check.message(),
            email_error: self.email_check.message(),
            confirm_error: self.confirm_check.message(),
            flags: self.flags,
            length_hint: self.length_hint(),
            letter_hint: self.letter_hint(),
            all_allowed: self.all_allowed,
        }
    }

    /// The payload sent to the registration API.
    pub fn record(&self) -> RegistrationRecord {
        RegistrationRecord {
            name: self.real_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for FormValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidationState")
            .field("real_name", &self.real_name)
            .field("email", &self.email)
            .field("name_check", &self.name_check)
            .field("email_check", &self.email_check)
            .field("confirm_check", &self.confirm_check)
            .field("flags", &self.flags)
            .field("all_allowed", &self.all_allowed)
            .finish_non_exhaustive()
    }
}
