//! Email address syntax.

/// Reasons an email address is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// The local part (before @) is empty, too long, or has a bad character.
    #[error("email local part is invalid")]
    InvalidLocalPart,
    /// The domain part (after @) is empty or has a malformed label.
    #[error("email domain is invalid")]
    InvalidDomain,
}

/// Maximum length of an email address (RFC 5321).
const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the local part.
const MAX_LOCAL_LENGTH: usize = 64;

/// Maximum length of a single domain label.
const MAX_LABEL_LENGTH: usize = 63;

/// Check that `s` is a syntactically valid email address.
///
/// Validation follows the rule web sign-up forms conventionally apply: an
/// atom-based local part and a hostname-shaped domain. A top-level domain is
/// not required, so `user@localhost` is accepted.
///
/// ## Constraints
///
/// - Length: 1-254 characters (RFC 5321 limit)
/// - Local part: 1-64 characters from ``A-Za-z0-9!#$%&'*+/=?^_`{|}~-``,
///   with single dots allowed between atoms
/// - Domain: dot-separated labels of 1-63 ASCII alphanumerics or hyphens,
///   never starting or ending with a hyphen
///
/// ## Examples
///
/// ```
/// use shopfront_core::{EmailError, validate_email};
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("user.name+tag@domain.co.uk").is_ok());
///
/// assert_eq!(validate_email(""), Err(EmailError::Empty));
/// assert_eq!(validate_email("no-at-symbol"), Err(EmailError::MissingAtSymbol));
/// assert!(validate_email("user..name@example.com").is_err());
/// assert!(validate_email("user@-example.com").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the input is empty, too long, has no @ symbol,
/// or has a malformed local part or domain.
pub fn validate_email(s: &str) -> Result<(), EmailError> {
    if s.is_empty() {
        return Err(EmailError::Empty);
    }

    if s.len() > MAX_EMAIL_LENGTH {
        return Err(EmailError::TooLong {
            max: MAX_EMAIL_LENGTH,
        });
    }

    // The local part cannot contain '@', so the first one splits.
    let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;

    if !is_valid_local_part(local) {
        return Err(EmailError::InvalidLocalPart);
    }

    if !is_valid_domain(domain) {
        return Err(EmailError::InvalidDomain);
    }

    Ok(())
}

/// Returns `true` if `s` is a syntactically valid email address.
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    validate_email(s).is_ok()
}

const fn is_atom_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'/'
                | b'='
                | b'?'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'|'
                | b'}'
                | b'~'
                | b'-'
        )
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LENGTH {
        return false;
    }

    // Splitting on '.' yields an empty atom for leading, trailing or doubled dots.
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.bytes().all(is_atom_char))
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }

    domain.split('.').all(|label| {
        let bytes = label.as_bytes();
        match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => {
                bytes.len() <= MAX_LABEL_LENGTH
                    && first.is_ascii_alphanumeric()
                    && last.is_ascii_alphanumeric()
                    && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
            }
            _ => false,
        }
    })
}
