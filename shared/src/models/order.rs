//! Sale Order Model

use serde::{Deserialize, Serialize};

/// Payment method for a sale order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Settled in full on the issue date
    #[default]
    Cash,
    /// Scheduled installments against a delivery base date
    Installment,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub description: String,
    /// Quantity in `unit` (decimal, weighed goods allowed)
    pub quantity: f64,
    /// Unit of measure (e.g. "KG", "UND")
    pub unit: String,
    /// Price per unit in currency units
    pub unit_price: f64,
}

impl OrderItem {
    pub fn new(
        description: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        unit_price: f64,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit: unit.into(),
            unit_price,
        }
    }
}

/// Sale order entity
///
/// `total`, `per_installment` and `payment_terms` are recomputed from the
/// line items and offsets every time the order is posted; values supplied by
/// the caller are never trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleOrder {
    /// None until persisted
    pub id: Option<String>,
    /// Issue date (plain YYYY-MM-DD)
    pub issue_date: String,
    /// Delivery date, base for installment due dates
    pub delivery_date: Option<String>,
    /// Customer reference (None = walk-in)
    pub customer_id: Option<String>,
    /// Informational display name
    pub customer_name: Option<String>,
    /// Seller name, mandatory
    pub seller: String,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
    /// Number of installments (>= 1)
    pub installment_count: u32,
    /// Day offsets from the base date, one per installment
    pub installment_offsets: Vec<i64>,
    /// Offsets joined with '/', recomputed at post time
    pub payment_terms: Option<String>,
    /// Commission percentage (0-100)
    pub commission_pct: f64,
    /// Markup / pass-through percentage (0-100)
    pub markup_pct: f64,
    /// Manual gross commission override; > 0 wins over `commission_pct`
    pub manual_commission: f64,
    /// Total amount in currency units
    pub total: f64,
    /// Per-installment amount in currency units
    pub per_installment: f64,
    pub created_at: Option<String>,
}

impl SaleOrder {
    /// New unpersisted cash order with everything else defaulted
    pub fn new(issue_date: impl Into<String>, seller: impl Into<String>) -> Self {
        Self {
            id: None,
            issue_date: issue_date.into(),
            delivery_date: None,
            customer_id: None,
            customer_name: None,
            seller: seller.into(),
            items: Vec::new(),
            payment_method: PaymentMethod::Cash,
            installment_count: 1,
            installment_offsets: Vec::new(),
            payment_terms: None,
            commission_pct: 0.0,
            markup_pct: 0.0,
            manual_commission: 0.0,
            total: 0.0,
            per_installment: 0.0,
            created_at: None,
        }
    }
}
