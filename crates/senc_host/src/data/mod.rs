//! Data-access and decryption service contracts.

pub mod service;
