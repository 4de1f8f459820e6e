//! Delivery descriptors attached to orders.
//!
//! A [`Delivery`] is built locally from one of the offers returned by the
//! cost calculation and sent as part of an order. No request is made here.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::options::{CourierOption, DeliveryType};

/// A validated delivery descriptor.
///
/// Serializes to the platform's delivery object. The address goes under
/// `addressExpress` for mail and courier delivery and under `addressPvz` for
/// pick-up points and parcel lockers.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// Delivery service id from the calculation response.
    pub delivery_id: u64,
    /// FIAS id of the destination place.
    pub place_fias_id: String,
    /// Delivery channel.
    pub delivery_type: DeliveryType,
    /// Courier option applied to the offer.
    pub courier_option: CourierOption,
    /// Delivery cost quoted by the calculation.
    pub cost: f64,
    /// Minimum delivery term in days.
    pub min_term: u32,
    /// Maximum delivery term in days.
    pub max_term: u32,
    /// Street address object, or the pick-up point id.
    pub address: Value,
}

/// Unvalidated delivery fields, typically straight from user input.
#[derive(Debug, Clone, Default)]
pub struct DeliveryInput {
    /// Delivery service id.
    pub delivery_id: u64,
    /// FIAS id of the destination place.
    pub place_fias_id: String,
    /// Delivery type wire value (`mail`, `express`, `pvz`, `postamat`).
    pub delivery_type: String,
    /// Courier option wire value; `None` means `"none"`.
    pub courier_option: Option<String>,
    /// Delivery cost.
    pub cost: f64,
    /// Minimum delivery term in days.
    pub min_term: u32,
    /// Maximum delivery term in days.
    pub max_term: u32,
    /// Street address object, or the pick-up point id.
    pub address: Value,
}

impl Delivery {
    /// Validate raw fields into a delivery descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CourierOption`] or
    /// [`ValidationError::DeliveryType`] when a value is outside its closed set.
    pub fn create(input: DeliveryInput) -> Result<Self, ValidationError> {
        let courier_option = match input.courier_option.as_deref() {
            Some(option) => option.parse()?,
            None => CourierOption::default(),
        };
        let delivery_type = input.delivery_type.parse()?;

        Ok(Self {
            delivery_id: input.delivery_id,
            place_fias_id: input.place_fias_id,
            delivery_type,
            courier_option,
            cost: input.cost,
            min_term: input.min_term,
            max_term: input.max_term,
            address: input.address,
        })
    }

    /// Field name the address is sent under.
    #[must_use]
    pub fn address_key(&self) -> &'static str {
        self.delivery_type.address_key()
    }
}

impl Serialize for Delivery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        map.serialize_entry("deliveryId", &self.delivery_id)?;
        map.serialize_entry("placeFiasId", &self.place_fias_id)?;
        map.serialize_entry("courierOptions", &[self.courier_option])?;
        map.serialize_entry("type", &self.delivery_type)?;
        map.serialize_entry("cost", &self.cost)?;
        map.serialize_entry("minTerm", &self.min_term)?;
        map.serialize_entry("maxTerm", &self.max_term)?;
        map.serialize_entry(self.address_key(), &self.address)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(delivery_type: &str, courier_option: Option<&str>) -> DeliveryInput {
        DeliveryInput {
            delivery_id: 7,
            place_fias_id: "0c5b2444-70a0-4932-980c-b4dc0d3f02b5".to_string(),
            delivery_type: delivery_type.to_string(),
            courier_option: courier_option.map(str::to_string),
            cost: 350.0,
            min_term: 2,
            max_term: 4,
            address: json!({"postindex": "101000", "street": "Tverskaya", "house": "1"}),
        }
    }

    #[test]
    fn courier_delivery_uses_express_address() {
        let delivery = Delivery::create(input("express", Some("checking"))).unwrap();
        let value = serde_json::to_value(&delivery).unwrap();

        assert_eq!(
            value,
            json!({
                "deliveryId": 7,
                "placeFiasId": "0c5b2444-70a0-4932-980c-b4dc0d3f02b5",
                "courierOptions": ["checking"],
                "type": "express",
                "cost": 350.0,
                "minTerm": 2,
                "maxTerm": 4,
                "addressExpress": {"postindex": "101000", "street": "Tverskaya", "house": "1"},
            })
        );
    }

    #[test]
    fn pickup_delivery_uses_pvz_address() {
        let mut raw = input("pvz", None);
        raw.address = json!("PVZ-118");
        let value = serde_json::to_value(Delivery::create(raw).unwrap()).unwrap();

        assert_eq!(value["addressPvz"], "PVZ-118");
        assert!(value.get("addressExpress").is_none());
        assert_eq!(value["courierOptions"], json!(["none"]));
    }

    #[test]
    fn mail_and_postamat_address_keys() {
        assert_eq!(Delivery::create(input("mail", None)).unwrap().address_key(), "addressExpress");
        assert_eq!(Delivery::create(input("postamat", None)).unwrap().address_key(), "addressPvz");
    }

    #[test]
    fn rejects_unknown_courier_option() {
        let err = Delivery::create(input("express", Some("overnight"))).unwrap_err();
        assert_eq!(err, ValidationError::CourierOption("overnight".to_string()));
    }

    #[test]
    fn rejects_unknown_delivery_type() {
        let err = Delivery::create(input("teleport", Some("fastest"))).unwrap_err();
        assert_eq!(err, ValidationError::DeliveryType("teleport".to_string()));
    }
}
