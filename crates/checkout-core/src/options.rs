//! Closed option sets accepted by order and delivery payloads.

wire_enum! {
    /// How the customer pays for an order.
    PaymentMethod, PaymentMethod {
        /// Cash on delivery.
        Cash => "cash",
        /// Paid in advance by the shop's own payment channel.
        NonCash => "nocashpay",
    }
}

wire_enum! {
    /// Qualifier on a delivery offer that changes how the carrier handles the parcel.
    CourierOption, CourierOption {
        /// No extra courier service.
        None => "none",
        /// Customer may inspect the contents before paying.
        Checking => "checking",
        /// Customer may accept part of the order.
        Partial => "partial",
        /// Fastest available delivery.
        Fastest => "fastest",
    }
}

impl Default for CourierOption {
    fn default() -> Self {
        Self::None
    }
}

wire_enum! {
    /// Delivery channel of an offer.
    DeliveryType, DeliveryType {
        /// Russian Post.
        Mail => "mail",
        /// Courier to the door.
        Express => "express",
        /// Pick-up point.
        Pvz => "pvz",
        /// Parcel locker.
        Postamat => "postamat",
    }
}

impl DeliveryType {
    /// Whether the parcel goes to a street address rather than a pick-up location.
    #[must_use]
    pub const fn is_address_delivery(self) -> bool {
        matches!(self, Self::Mail | Self::Express)
    }

    /// Field name under which a delivery carries its address.
    #[must_use]
    pub const fn address_key(self) -> &'static str {
        if self.is_address_delivery() {
            "addressExpress"
        } else {
            "addressPvz"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn payment_method_wire_values() {
        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert_eq!("nocashpay".parse::<PaymentMethod>(), Ok(PaymentMethod::NonCash));
        assert_eq!(PaymentMethod::NonCash.to_string(), "nocashpay");
    }

    #[test]
    fn payment_method_rejects_prepay() {
        assert_eq!(
            "prepay".parse::<PaymentMethod>(),
            Err(ValidationError::PaymentMethod("prepay".to_string()))
        );
    }

    #[test]
    fn courier_option_accepts_only_known_values() {
        for option in CourierOption::ALL {
            assert_eq!(option.as_str().parse::<CourierOption>(), Ok(*option));
        }
        assert!(matches!(
            "fast".parse::<CourierOption>(),
            Err(ValidationError::CourierOption(_))
        ));
        assert!("NONE".parse::<CourierOption>().is_err());
    }

    #[test]
    fn delivery_type_rejects_unknown() {
        assert!(matches!(
            "drone".parse::<DeliveryType>(),
            Err(ValidationError::DeliveryType(value)) if value == "drone"
        ));
    }

    #[test]
    fn address_key_follows_delivery_type() {
        assert_eq!(DeliveryType::Mail.address_key(), "addressExpress");
        assert_eq!(DeliveryType::Express.address_key(), "addressExpress");
        assert_eq!(DeliveryType::Pvz.address_key(), "addressPvz");
        assert_eq!(DeliveryType::Postamat.address_key(), "addressPvz");
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&DeliveryType::Postamat).unwrap();
        assert_eq!(json, "\"postamat\"");

        let parsed: CourierOption = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(parsed, CourierOption::Partial);

        assert!(serde_json::from_str::<PaymentMethod>("\"prepay\"").is_err());
    }
}
