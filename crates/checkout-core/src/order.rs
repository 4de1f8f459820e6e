//! Order payloads for creating and editing platform orders.

use serde::{Deserialize, Serialize};

use crate::delivery::Delivery;
use crate::options::PaymentMethod;

/// A line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name.
    pub name: String,
    /// Product code in the shop catalogue.
    pub code: String,
    /// Variant code, if the product has variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_code: Option<String>,
    /// Number of units.
    pub quantity: u32,
    /// Declared value per unit, for insurance.
    pub assessed_cost: f64,
    /// Amount the customer pays per unit.
    pub pay_cost: f64,
    /// Weight per unit in kilograms.
    pub weight: f64,
}

impl OrderItem {
    /// Create an item whose declared value equals its price.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>, quantity: u32, cost: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            variant_code: None,
            quantity,
            assessed_cost: cost,
            pay_cost: cost,
            weight,
        }
    }

    /// Set the variant code.
    #[must_use]
    pub fn with_variant_code(mut self, code: impl Into<String>) -> Self {
        self.variant_code = Some(code.into());
        self
    }

    /// Set a declared value that differs from the price.
    #[must_use]
    pub fn with_assessed_cost(mut self, cost: f64) -> Self {
        self.assessed_cost = cost;
        self
    }
}

/// The customer receiving an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name.
    pub fullname: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Customer {
    /// Create a customer with only a name.
    #[must_use]
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
            email: None,
            phone: None,
        }
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// An order as sent to the create and edit endpoints.
///
/// Absent fields are left out of the JSON body entirely; the platform treats
/// `null` differently from a missing key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Line items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub goods: Vec<OrderItem>,
    /// Chosen delivery offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    /// Receiving customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Customer>,
    /// Free-form comment for the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Order number in the shop's own system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_order_id: Option<String>,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Delivery cost overriding the platform's own calculation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced_cost: Option<f64>,
}

impl Order {
    /// Create an empty order with the given payment method.
    #[must_use]
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            goods: Vec::new(),
            delivery: None,
            user: None,
            comment: None,
            shop_order_id: None,
            payment_method,
            forced_cost: None,
        }
    }

    /// Replace the line items.
    #[must_use]
    pub fn with_goods(mut self, goods: impl IntoIterator<Item = OrderItem>) -> Self {
        self.goods = goods.into_iter().collect();
        self
    }

    /// Append a line item.
    #[must_use]
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.goods.push(item);
        self
    }

    /// Set the delivery offer.
    #[must_use]
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// Set the receiving customer.
    #[must_use]
    pub fn with_user(mut self, user: Customer) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the shop's own order number.
    #[must_use]
    pub fn with_shop_order_id(mut self, id: impl Into<String>) -> Self {
        self.shop_order_id = Some(id.into());
        self
    }

    /// Force the delivery cost.
    #[must_use]
    pub fn with_forced_cost(mut self, cost: f64) -> Self {
        self.forced_cost = Some(cost);
        self
    }
}
