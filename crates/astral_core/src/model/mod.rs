//! Records handed to core by the app shell.
//!
//! # Responsibility
//! - Define the contact shape used as input to chart and compatibility APIs.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Core derives values from contacts but never mutates or stores them.

pub mod contact;
