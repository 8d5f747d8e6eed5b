//! Registration payload and the cached local identity.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Body sent to the registration API.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Locally cached copy of a registered user.
///
/// Stored as JSON under [`USER_INFO_KEY`](crate::persistor::USER_INFO_KEY):
///
/// ```json
/// {"id":"42","realName":"Ana Maria","email":"ana@x.com"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalIdentity {
    /// Identifier assigned by the registration API.
    pub id: String,
    pub real_name: String,
    pub email: String,
}

impl LocalIdentity {
    pub fn new(
        id: impl Into<String>,
        real_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            real_name: real_name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_json_shape() {
        let identity = LocalIdentity::new("42", "Ana Maria", "ana@x.com");
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, r#"{"id":"42","realName":"Ana Maria","email":"ana@x.com"}"#);
    }

    #[test]
    fn test_record_json_shape() {
        let record = RegistrationRecord {
            name: "Ana Maria".into(),
            email: "ana@x.com".into(),
            password: "abcdefg1".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Ana Maria", "email": "ana@x.com", "password": "abcdefg1"})
        );
        assert!(!format!("{:?}", record).contains("abcdefg1"));
    }
}
