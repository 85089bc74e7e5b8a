//! # paperflow-auth
//!
//! Authentication primitives for Paperflow: JWT access/refresh tokens and
//! Argon2id password hashing with policy validation.

pub mod jwt;
pub mod password;

pub use jwt::claims::{Claims, TokenType};
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::{JwtEncoder, TokenPair};
pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
