//! Per-field validation rules.
//!
//! Every rule is a pure function of the current field text. Message-producing
//! rules return an empty string when the value is valid.

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_NAME: &str = "Nome inválido";
pub const INVALID_EMAIL: &str = "Email inválido";
pub const PASSWORDS_MUST_MATCH: &str = "As senhas devem corresponder";

/// Hint label for the password length rule.
pub const PASSWORD_LENGTH_HINT: &str = "Mínimo 8 caracteres";
/// Hint label for the password letter rule.
pub const PASSWORD_LETTER_HINT: &str = "Conter pelo menos uma letra";

/// Minimum number of characters a password must exceed.
const PASSWORD_MIN_EXCLUSIVE: usize = 7;

// Letter runs joined by a single hyphen, space or apostrophe.
static REAL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\p{L}+[- '])*\p{L}+$").expect("Invalid real name pattern"));

// local@domain.tld, `\w` restricted to ASCII word characters.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*",
        r"@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*",
        r"(\.[A-Za-z0-9_]{2,3})+$",
    ))
    .expect("Invalid email pattern")
});

static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("Invalid letter pattern"));

/// Validates a real name: Unicode letter runs, at least two characters.
pub fn validate_real_name(text: &str) -> &'static str {
    if REAL_NAME.is_match(text) && text.chars().count() > 1 {
        ""
    } else {
        INVALID_NAME
    }
}

/// Validates a conventional `local@domain.tld` address.
pub fn validate_email(text: &str) -> &'static str {
    if EMAIL.is_match(text) { "" } else { INVALID_EMAIL }
}

/// Returns `true` if the password is longer than seven characters.
pub fn check_password_length(text: &str) -> bool {
    text.chars().count() > PASSWORD_MIN_EXCLUSIVE
}

/// Returns `true` if the password contains a letter from any alphabet.
pub fn check_password_contains_letter(text: &str) -> bool {
    LETTER.is_match(text)
}

/// Compares the two latest password values.
pub fn check_passwords_match(password: &str, confirm_password: &str) -> &'static str {
    if password == confirm_password {
        ""
    } else {
        PASSWORDS_MUST_MATCH
    }
}
