//! Authentication module for Mirolite.
//!
//! Covers password hashing (Argon2id), JWT access tokens, and the
//! registration/login service used by the web handlers.

mod password;
mod service;
mod token;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use service::{AuthService, MAX_USERNAME_LENGTH};
pub use token::{Claims, TokenSigner, DEFAULT_TOKEN_EXPIRY_SECS};
