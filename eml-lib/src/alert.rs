//! User-visible alert surface.

/// Fire-and-forget sink for messages the user must see, such as a rejected
/// registration.
///
/// Any `Fn(&str)` closure is an alert surface:
///
/// ```
/// use eml_lib::alert::AlertSurface;
///
/// let alerts = |message: &str| eprintln!("{message}");
/// alerts.show_alert("Dados de usuário inválidos!");
/// ```
pub trait AlertSurface: Send + Sync {
    fn show_alert(&self, message: &str);
}

impl<F> AlertSurface for F
where
    F: Fn(&str) + Send + Sync,
{
    fn show_alert(&self, message: &str) {
        self(message)
    }
}
