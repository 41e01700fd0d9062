//! Customer records exchanged with the customers backend.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::CustomerId;

/// A customer registration payload.
///
/// This is exactly what the sign-up form sends: seven string fields with
/// camelCase keys. The date parts the form uses to build `birth_date` are
/// not part of it.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub mobile: String,
    /// `D/M/YYYY`, unpadded.
    pub birth_date: String,
    pub gender: String,
}

impl fmt::Debug for NewCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCustomer")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("mobile", &self.mobile)
            .field("birth_date", &self.birth_date)
            .field("gender", &self.gender)
            .finish()
    }
}

/// A registered customer as returned by the backend.
///
/// Any extra fields in the response (including whatever the backend does
/// with the password) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub gender: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> NewCustomer {
        NewCustomer {
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
            name: "Ada".to_string(),
            address: "1 Analytical Way".to_string(),
            mobile: "0100000000".to_string(),
            birth_date: "10/12/1990".to_string(),
            gender: "female".to_string(),
        }
    }

    #[test]
    fn test_new_customer_has_seven_camel_case_keys() {
        let value = serde_json::to_value(draft()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "address",
                "birthDate",
                "email",
                "gender",
                "mobile",
                "name",
                "password"
            ]
        );
    }

    #[test]
    fn test_new_customer_debug_redacts_password() {
        let output = format!("{:?}", draft());
        assert!(output.contains("ada@example.com"));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("correct horse"));
    }

    #[test]
    fn test_customer_ignores_unknown_fields() {
        let json = r#"{
            "id": "5a1b2c3d4e5f6a7b8c9d0e1f",
            "email": "ada@example.com",
            "password": "$argon2id$...",
            "name": "Ada",
            "birthDate": "10/12/1990"
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, CustomerId::new("5a1b2c3d4e5f6a7b8c9d0e1f"));
        assert_eq!(customer.birth_date, "10/12/1990");
        assert_eq!(customer.gender, "");
    }

    #[test]
    fn test_customer_with_document_id_and_minimal_fields() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":"5a1b2c3d4e5f6a7b8c9d0e1f","email":"ada@example.com","birthDate":"15/6/1990"}"#,
        )
        .unwrap();

        assert_eq!(customer.id.as_str(), "5a1b2c3d4e5f6a7b8c9d0e1f");
        assert_eq!(customer.birth_date, "15/6/1990");
        assert_eq!(customer.name, "");
    }

    #[test]
    fn test_customer_with_numeric_id() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":7,"email":"ada@example.com"}"#).unwrap();
        assert_eq!(customer.id, CustomerId::new("7"));
    }
}
