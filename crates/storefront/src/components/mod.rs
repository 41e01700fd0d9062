//! Page components: form state plus the logic that acts on it.

pub mod sign_up;

pub use sign_up::{SignUpComponent, SignUpServices};
