//! Core types for the Checkout delivery platform client.
//!
//! This crate provides the domain types shared by the client SDK. Nothing in
//! here performs I/O:
//!
//! - **Options**: `PaymentMethod`, `CourierOption`, `DeliveryType`
//! - **Statuses**: `OrderStatus` with the platform's display labels
//! - **Payloads**: `Order`, `OrderItem`, `Customer`, `Delivery`
//! - **Identifiers**: `OrderId`
//!
//! # Wire values
//!
//! Every closed enumeration parses from the exact string the platform uses
//! and rejects anything else with a [`ValidationError`]:
//!
//! ```
//! use checkout_core::{CourierOption, PaymentMethod};
//!
//! assert_eq!("nocashpay".parse::<PaymentMethod>(), Ok(PaymentMethod::NonCash));
//! assert!("express".parse::<CourierOption>().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod delivery;
pub mod error;
pub mod ids;
pub mod options;
pub mod order;
pub mod status;

pub use delivery::{Delivery, DeliveryInput};
pub use error::{Result, ValidationError};
pub use ids::OrderId;
pub use options::{CourierOption, DeliveryType, PaymentMethod};
pub use order::{Customer, Order, OrderItem};
pub use status::OrderStatus;
