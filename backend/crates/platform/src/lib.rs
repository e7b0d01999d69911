//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, one-way)
//! - Signed session tokens (HMAC-SHA256, stateless)
//! - Cookie management

pub mod cookie;
pub mod password;
pub mod token;
