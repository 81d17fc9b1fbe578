//! User accounts. Passwords are stored as Argon2 hashes and never leave this module
//! except through [`credentials`].

pub mod credentials;
pub mod entity;
pub mod error;

pub use error::*;
