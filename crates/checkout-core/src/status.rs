//! Order statuses reported by the platform.

wire_enum! {
    /// Lifecycle status of a platform order.
    OrderStatus, OrderStatus {
        /// Cancelled before the parcel was shipped.
        Canceled => "CANCELED_BEFORE_SHIPMENT",
        /// Created and awaiting processing.
        Created => "CREATED",
        /// Formed by the warehouse.
        Formed => "FORMED",
        /// Handed to the carrier.
        InSending => "IN_SENDING",
        /// Delivered to the customer.
        Delivered => "DELIVERED",
        /// Customer accepted part of the order.
        PartiallyDelivered => "PARTIALY_DELIVERED",
        /// Cancelled at the moment of delivery.
        CanceledAtDelivery => "CANCELED_AT_DELIVERY",
        /// Lost or damaged in transit.
        LossDamage => "LOSS_DAMAGE",
        /// Customer return delivered back to the shop.
        Confirmed => "CONFIRMED",
    }
}

impl OrderStatus {
    /// Display label used in the platform's merchant interface.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Canceled => "Отмена до отправки",
            Self::Created => "Создан",
            Self::Formed => "Сформирован",
            Self::InSending => "В отправке",
            Self::Delivered => "Доставлен",
            Self::PartiallyDelivered => "Доставлен частично",
            Self::CanceledAtDelivery => "Отмена при доставке",
            Self::LossDamage => "Потеря, порча",
            Self::Confirmed => "Доставка клиентского возврата",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_wire_values() {
        assert_eq!(OrderStatus::Canceled.as_str(), "CANCELED_BEFORE_SHIPMENT");
        assert_eq!(OrderStatus::InSending.as_str(), "IN_SENDING");
        assert_eq!(
            "PARTIALY_DELIVERED".parse::<OrderStatus>(),
            Ok(OrderStatus::PartiallyDelivered)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(OrderStatus::Created.label(), "Создан");
        assert_eq!(OrderStatus::LossDamage.label(), "Потеря, порча");
    }

    #[test]
    fn deserializes_from_history_payload() {
        let statuses: Vec<OrderStatus> =
            serde_json::from_str(r#"["CREATED", "FORMED", "DELIVERED"]"#).unwrap();
        assert_eq!(
            statuses,
            [OrderStatus::Created, OrderStatus::Formed, OrderStatus::Delivered]
        );
        assert!(serde_json::from_str::<OrderStatus>("\"SHIPPED\"").is_err());
    }
}
