//! Request types for the lookup and calculation endpoints.

use serde::Serialize;

/// Parameters of a delivery cost and term calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    /// Destination place id from a place lookup.
    pub place_id: String,
    /// Total order price.
    pub total_sum: f64,
    /// Declared value for insurance (defaults to `total_sum`).
    pub assessed_sum: f64,
    /// Total weight in kilograms.
    pub total_weight: f64,
    /// Number of items in the order.
    pub items_count: u32,
}

impl Calculation {
    /// Create a calculation whose declared value equals the order price.
    #[must_use]
    pub fn new(place_id: impl Into<String>, total_sum: f64, total_weight: f64, items_count: u32) -> Self {
        Self {
            place_id: place_id.into(),
            total_sum,
            assessed_sum: total_sum,
            total_weight,
            items_count,
        }
    }

    /// Set a declared value that differs from the order price.
    #[must_use]
    pub fn with_assessed_sum(mut self, assessed_sum: f64) -> Self {
        self.assessed_sum = assessed_sum;
        self
    }
}

/// Street address used to look up a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcodeQuery {
    /// Street id from a street lookup.
    pub street_id: String,
    /// House number.
    pub house: String,
    /// Housing (корпус), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housing: Option<String>,
    /// Building (строение), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

impl PostcodeQuery {
    /// Create a query for a house on a street.
    #[must_use]
    pub fn new(street_id: impl Into<String>, house: impl Into<String>) -> Self {
        Self {
            street_id: street_id.into(),
            house: house.into(),
            housing: None,
            building: None,
        }
    }

    /// Set the housing.
    #[must_use]
    pub fn with_housing(mut self, housing: impl Into<String>) -> Self {
        self.housing = Some(housing.into());
        self
    }

    /// Set the building.
    #[must_use]
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }
}
