//! Receipt Types
//!
//! This crate defines the data model shared by the rule engine, the score
//! store and the HTTP layer. It has no behaviour of its own beyond a couple of
//! accessors; everything that interprets the string fields lives in
//! `receipt-rules`.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;
pub use types::{Item, Points, Receipt};
