//! Remote endpoint table.
//!
//! Paths are relative to the configured host. Endpoints addressed by an order
//! id or a credential append it to the table path.

/// A logical platform operation with a fixed URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Session ticket issuance; the API key is appended.
    Ticket,
    /// Place search.
    PlacesByQuery,
    /// Delivery cost and term calculation.
    Calculation,
    /// Street search within a place.
    StreetsByQuery,
    /// Postal code by street address.
    PostalCodeByAddress,
    /// Place by postal code.
    PlaceByPostalCode,
    /// Order creation; an order id is appended for edits.
    CreateOrder,
    /// Order status change; the order id is appended.
    Status,
    /// Order status history and details; the order id is appended.
    StatusHistory,
    /// Platform-wide status history; the order id is appended.
    PlatformStatusHistory,
}

impl Endpoint {
    /// Every endpoint in the table.
    pub const ALL: &'static [Self] = &[
        Self::Ticket,
        Self::PlacesByQuery,
        Self::Calculation,
        Self::StreetsByQuery,
        Self::PostalCodeByAddress,
        Self::PlaceByPostalCode,
        Self::CreateOrder,
        Self::Status,
        Self::StatusHistory,
        Self::PlatformStatusHistory,
    ];

    /// Logical operation name used by the platform documentation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ticket => "getTicket",
            Self::PlacesByQuery => "getPlacesByQuery",
            Self::Calculation => "calculation",
            Self::StreetsByQuery => "getStreetsByQuery",
            Self::PostalCodeByAddress => "getPostalCodeByAddress",
            Self::PlaceByPostalCode => "getPlaceByPostalCode",
            Self::CreateOrder => "createOrder",
            Self::Status => "status",
            Self::StatusHistory => "statushistory",
            Self::PlatformStatusHistory => "platformstatushistory",
        }
    }

    /// Path relative to the host.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Ticket => "service/login/ticket/",
            Self::PlacesByQuery => "service/checkout/getPlacesByQuery/",
            Self::Calculation => "service/checkout/calculation/",
            Self::StreetsByQuery => "service/checkout/getStreetsByQuery/",
            Self::PostalCodeByAddress => "service/checkout/getPostalCodeByAddress/",
            Self::PlaceByPostalCode => "service/checkout/getPlaceByPostalCode/",
            Self::CreateOrder => "service/order/create/",
            Self::Status => "service/order/status/",
            Self::StatusHistory => "service/order/statushistory/",
            Self::PlatformStatusHistory => "service/order/platformstatushistory/",
        }
    }

    /// Look up an endpoint by its logical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|endpoint| endpoint.name() == name)
    }

    /// Path with a suffix appended, for endpoints addressed by id.
    #[must_use]
    pub fn with_suffix(self, suffix: impl std::fmt::Display) -> String {
        format!("{}{suffix}", self.path())
    }
}

/// Resolve a logical name or a literal path suffix to a path.
///
/// Names found in the table map to their path; anything else is returned as is.
#[must_use]
pub fn resolve(name: &str) -> &str {
    Endpoint::from_name(name).map_or(name, |endpoint| endpoint.path())
}
