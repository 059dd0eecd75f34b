use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIT: &str = "ml";

/// Whether an order picks a listed drink or builds one from ingredients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderMode {
    #[default]
    Existing,
    Custom,
}

/// One ingredient line of a custom drink, edited in place by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSelection {
    #[serde(rename = "type")]
    pub kind: String,
    pub item: String,
    pub amount: f64,
    pub unit: String,
}

impl Default for CustomSelection {
    fn default() -> Self {
        Self {
            kind: String::new(),
            item: String::new(),
            amount: 0.0,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl CustomSelection {
    pub fn new(kind: impl Into<String>, item: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            item: item.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// type and item chosen and a positive, finite amount
    pub fn is_complete(&self) -> bool {
        !self.kind.is_empty() && !self.item.is_empty() && self.amount.is_finite() && self.amount > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderItem {
    /// a listed drink, referenced by its catalog id
    Catalog {
        id: String,
        name: String,
        quantity: u32,
    },
    Custom {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
}

impl OrderItem {
    /// catalog id for listed drinks, ingredient name for custom lines
    pub fn reference(&self) -> &str {
        match self {
            OrderItem::Catalog { id, .. } => id,
            OrderItem::Custom { name, .. } => name,
        }
    }
}

impl From<&CustomSelection> for OrderItem {
    fn from(selection: &CustomSelection) -> Self {
        OrderItem::Custom {
            name: selection.item.clone(),
            amount: Some(selection.amount),
            unit: Some(selection.unit.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "type")]
    pub mode: OrderMode,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryType {
    DineIn,
    Takeaway,
    Delivery,
}

/// How the order reaches the member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fulfillment {
    DineIn { branch_id: String },
    Takeaway { branch_id: String },
    Delivery { address: String },
}

impl Fulfillment {
    pub fn delivery_type(&self) -> DeliveryType {
        match self {
            Fulfillment::DineIn { .. } => DeliveryType::DineIn,
            Fulfillment::Takeaway { .. } => DeliveryType::Takeaway,
            Fulfillment::Delivery { .. } => DeliveryType::Delivery,
        }
    }
}

/// Order plus fulfillment metadata, as posted to `/api/postOrder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalOrder {
    #[serde(flatten)]
    pub order: Order,
    pub delivery_type: DeliveryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    pub member_id: String,
    pub pickup_time: String,
}
