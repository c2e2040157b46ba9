//! Credential handling.
//!
//! The credential store boundary: given a candidate password and a stored
//! hash, produce a match verdict; given a plaintext, produce a storable hash.

pub mod password;
