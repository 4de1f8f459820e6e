//! Checkout Client SDK.
//!
//! This crate provides a client library for the Checkout delivery platform:
//! place and street lookup, delivery cost calculation, and order management.
//!
//! GET endpoints authenticate with a session ticket that the client obtains
//! and renews on its own; see [`TicketCache`]. POST endpoints carry the API
//! key in the request body.
//!
//! # Example
//!
//! ```no_run
//! use checkout_client::{Calculation, CheckoutClient, Order, OrderItem, PaymentMethod};
//!
//! # async fn example() -> Result<(), checkout_client::ClientError> {
//! let client = CheckoutClient::new("your-api-key")?;
//!
//! // Find the destination and price the delivery
//! let places = client.get_places("Москва").await?;
//! println!("Places: {places:?}");
//!
//! let offers = client
//!     .calculation(&Calculation::new("place-id", 1500.0, 1.2, 1))
//!     .await?;
//! println!("Offers: {offers}");
//!
//! // Place the order
//! let order = Order::new(PaymentMethod::Cash)
//!     .with_item(OrderItem::new("Kettle", "K-1", 1, 1500.0, 1.2))
//!     .with_shop_order_id("S-100");
//! let created = client.create_order(&order).await?;
//! println!("Created order {}", created["order"]["id"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
pub mod endpoint;
mod error;
mod ticket;
mod types;

pub use checkout_core::{
    CourierOption, Customer, Delivery, DeliveryInput, DeliveryType, Order, OrderId, OrderItem,
    OrderStatus, PaymentMethod, ValidationError,
};
pub use client::CheckoutClient;
pub use config::{ClientOptions, DEFAULT_HOST, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use endpoint::Endpoint;
pub use error::ClientError;
pub use ticket::{TicketCache, DEFAULT_TICKET_TTL};
pub use types::{Calculation, PostcodeQuery};
