//! Line-oriented driver for the registration form.
//!
//! Each entered line replaces the field's whole value and goes through the
//! same change handler a keystroke would.

use std::io;
use std::io::Write;

use eml_lib::validation::{
    Field, FormValidationState, InputOutcome, PASSWORD_LENGTH_HINT, PASSWORD_LETTER_HINT,
    PasswordHint,
};
use eml_lib::{IdentityPersistor, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

pub async fn run(persistor: &IdentityPersistor) -> io::Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut form = FormValidationState::new();
    form.reset();

    println!("Cadastro");
    loop {
        for field in Field::ALL {
            if !fill_field(&mut input, &mut form, field).await? {
                return Ok(());
            }
        }

        loop {
            let Some(answer) = prompt(&mut input, "Cadastrar? [s/editar/sair]").await? else {
                return Ok(());
            };
            match answer.trim() {
                "sair" => return Ok(()),
                "editar" => break,
                _ => {}
            }

            match persistor.submit(&form).await {
                SubmitOutcome::Registered { identity, persisted } => {
                    println!("Bem-vindo(a), {}!", identity.real_name);
                    if !persisted {
                        log::warn!("Continuing without a cached identity");
                    }
                    return Ok(());
                }
                SubmitOutcome::NotReady => break,
                // Rejections already raised an alert; other failures are only logged.
                SubmitOutcome::Rejected | SubmitOutcome::Failed => {}
            }
        }
    }
}

/// Prompts until the field holds a valid value. Returns `false` on EOF.
async fn fill_field(
    input: &mut Input,
    form: &mut FormValidationState,
    field: Field,
) -> io::Result<bool> {
    loop {
        let Some(text) = prompt(input, field.label()).await? else {
            return Ok(false);
        };
        if form.on_field_change(field, &text) == InputOutcome::Rejected {
            continue;
        }
        render_feedback(form, field);
        if is_settled(form, field) {
            return Ok(true);
        }
    }
}

fn is_settled(form: &FormValidationState, field: Field) -> bool {
    match form.check(field) {
        Some(check) => check.passed(),
        None => form.password_flags().all(),
    }
}

fn render_feedback(form: &FormValidationState, field: Field) {
    if field == Field::Password {
        println!("  {} {}", hint_marker(form.length_hint()), PASSWORD_LENGTH_HINT);
        println!("  {} {}", hint_marker(form.letter_hint()), PASSWORD_LETTER_HINT);
        return;
    }

    let error = form.error(field);
    if !error.is_empty() {
        println!("  {}", error);
    }
}

fn hint_marker(hint: PasswordHint) -> &'static str {
    match hint {
        PasswordHint::Neutral => "•",
        PasswordHint::Met => "✓",
        PasswordHint::Unmet => "✗",
    }
}

async fn prompt(input: &mut Input, label: &str) -> io::Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    input.next_line().await
}
