//! Payment form validation engine for cardform
//!
//! A stateless set of per-field validators, a Luhn checksum, a card-network
//! classifier, and the display formatters for the two masked inputs. Every
//! function is a pure computation over its arguments: nothing here reads
//! the clock (the expiry validator takes "today" as a parameter), touches
//! shared state, or performs I/O, so the whole crate is safe to call from
//! any thread.
//!
//! Invalid input is never a panic; it is an `Err(ValidationError)` naming
//! the field, a message fit for display, and the constraint that failed.
//!
//! # Examples
//!
//! ## Single fields
//!
//! ```
//! use cardform_validation::{CardNumber, CardholderName, Cvv, FieldKey};
//!
//! assert!(CardholderName::validate("Mary-Jane O'Brien").is_ok());
//! assert!(CardNumber::validate("4532 0151 1283 0366").is_ok());
//! assert!(Cvv::validate("123").is_ok());
//!
//! let err = CardNumber::validate("4532015112830367").unwrap_err();
//! assert_eq!(err.field, FieldKey::CardNumber);
//! assert_eq!(err.constraint, "luhn");
//! ```
//!
//! ## Whole-form validation
//!
//! ```
//! use cardform_validation::{CheckoutForm, FieldKey, FormRules};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let rules = FormRules::checkout();
//!
//! let mut form = CheckoutForm {
//!     name: "Jo".into(),
//!     card_number: "4532-0151-1283-0366".into(),
//!     expiry: "06/27".into(),
//!     cvv: "123".into(),
//!     amount: "10.5".into(),
//! };
//! assert!(rules.validate(&form, today).is_ok());
//!
//! form.expiry = "05/25".into();
//! let errors = rules.validate(&form, today).unwrap_err();
//! assert_eq!(errors.failed_fields(), vec![FieldKey::Expiry]);
//! ```
//!
//! ## Live display helpers
//!
//! ```
//! use cardform_validation::{CardNetwork, format};
//!
//! assert_eq!(format::card_number("41111111"), "4111 1111");
//! assert_eq!(format::expiry("0627"), "06/27");
//! assert_eq!(
//!     CardNetwork::detect_for_display("4111 1111"),
//!     Some(CardNetwork::Visa)
//! );
//! ```

mod errors;
mod field;
pub mod format;
pub mod luhn;
mod network;
mod rules;
mod validators;

pub use errors::*;
pub use field::*;
pub use network::*;
pub use rules::*;
pub use validators::*;
