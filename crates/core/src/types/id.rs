//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are assigned by
//! the backend; the storefront never mints them.
//!
//! The backend hands out opaque string ids (document ids such as
//! `5a1b2c3d4e5f6a7b8c9d0e1f`). Numeric ids are accepted too and kept in
//! their decimal form, so an id always serializes back as a JSON string.

use serde::Deserialize;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a plain JSON string
/// - `Deserialize` from a JSON string or integer
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - Conversion methods: `new()`, `as_str()`
///
/// # Example
///
/// ```rust
/// # use shopfront_core::define_id;
/// define_id!(CartId);
/// define_id!(InvoiceId);
///
/// let cart_id = CartId::new("c-1");
/// let invoice_id = InvoiceId::new("c-1");
/// assert_eq!(cart_id.as_str(), invoice_id.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: CartId = invoice_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its string form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                <$crate::types::id::RawId as ::serde::Deserialize>::deserialize(deserializer)
                    .map(|raw| Self(raw.into_string()))
            }
        }
    };
}

/// Wire form of an id: a string, or an integer from older backends.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl RawId {
    #[doc(hidden)]
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Text(id) => id,
            Self::Signed(id) => id.to_string(),
            Self::Unsigned(id) => id.to_string(),
        }
    }
}

define_id!(CustomerId);
define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_round_trips_as_string() {
        let id: CustomerId = serde_json::from_str(r#""5a1b2c3d4e5f6a7b8c9d0e1f""#).unwrap();
        assert_eq!(id, CustomerId::new("5a1b2c3d4e5f6a7b8c9d0e1f"));
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""5a1b2c3d4e5f6a7b8c9d0e1f""#
        );
        assert_eq!(id.to_string(), "5a1b2c3d4e5f6a7b8c9d0e1f");
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let id: CustomerId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");

        let id: ProductId = serde_json::from_str("-3").unwrap();
        assert_eq!(id, ProductId::new("-3"));
    }

    #[test]
    fn test_other_json_types_are_rejected() {
        assert!(serde_json::from_str::<CustomerId>("null").is_err());
        assert!(serde_json::from_str::<CustomerId>("4.5").is_err());
        assert!(serde_json::from_str::<CustomerId>(r#"{"id":"x"}"#).is_err());
    }
}
