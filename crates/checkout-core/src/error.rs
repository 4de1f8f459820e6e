//! Validation errors for Checkout domain types.

/// Result type for local validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A value was rejected before any request was built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Payment method outside the accepted set.
    #[error("payment method must be \"cash\" or \"nocashpay\", got {0:?}")]
    PaymentMethod(String),

    /// Courier option outside the accepted set.
    #[error("courier option must be one of none, checking, partial, fastest; got {0:?}")]
    CourierOption(String),

    /// Delivery type outside the accepted set.
    #[error("delivery type must be one of mail, express, pvz, postamat; got {0:?}")]
    DeliveryType(String),

    /// Order status unknown to the platform.
    #[error("unknown order status: {0:?}")]
    OrderStatus(String),

    /// Order id that cannot be appended to an endpoint path.
    #[error("invalid order id: {0:?}")]
    OrderId(String),
}
