//! Form fields and per-field check results.

use std::fmt;

/// One of the registration form's input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RealName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::RealName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Field label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::RealName => "Nome",
            Field::Email => "Email",
            Field::Password => "Senha",
            Field::ConfirmPassword => "Confirmar Senha",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::RealName => "real_name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        };
        f.write_str(name)
    }
}

/// Result of the last check run against a message-producing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldCheck {
    /// The field has not been edited since the form was reset.
    #[default]
    Pending,
    /// The last check passed.
    Passed,
    /// The last check failed with this message.
    Failed(&'static str),
}

impl FieldCheck {
    /// Builds a check from a rule's message, where empty means valid.
    pub fn from_message(message: &'static str) -> Self {
        if message.is_empty() {
            FieldCheck::Passed
        } else {
            FieldCheck::Failed(message)
        }
    }

    /// Message to render under the field; empty unless the check failed.
    pub fn message(&self) -> &'static str {
        match self {
            FieldCheck::Failed(message) => *message,
            FieldCheck::Pending | FieldCheck::Passed => "",
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, FieldCheck::Passed)
    }
}

/// Display state of a password rule hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHint {
    /// Password is empty; no error styling.
    Neutral,
    Met,
    Unmet,
}

impl PasswordHint {
    pub(crate) fn resolve(password: &str, flag: bool) -> Self {
        if flag {
            PasswordHint::Met
        } else if password.is_empty() {
            PasswordHint::Neutral
        } else {
            PasswordHint::Unmet
        }
    }
}

/// Password strength flags, recomputed on every password change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordFlags {
    pub contains_letter: bool,
    pub length_valid: bool,
}

impl PasswordFlags {
    pub fn all(&self) -> bool {
        self.contains_letter && self.length_valid
    }
}
