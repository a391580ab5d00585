use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

pub const ORDER_STATUS_PENDING: &str = "pending";

/// Denormalized snapshot of a product at order time. Not a live reference:
/// later catalog edits never touch persisted orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    /// Present when the order was placed by an authenticated caller.
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    /// Client-supplied; not recomputed from the catalog.
    pub total: f64,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub notes: String,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            customer_name: props.customer_name,
            customer_phone: props.customer_phone,
            customer_email: props.customer_email,
            customer_address: props.customer_address,
            items: props.items,
            total: props.total,
            notes: props.notes,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: Option<UserId>,
        customer_name: String,
        customer_phone: String,
        customer_email: String,
        customer_address: String,
        items: Vec<OrderItem>,
        total: f64,
        notes: String,
        status: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            customer_name,
            customer_phone,
            customer_email,
            customer_address,
            items,
            total,
            notes,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> OrderItem {
        OrderItem {
            product_id: "prod-1".to_string(),
            name: "Anillo Solitario Diamante".to_string(),
            price: 2500.0,
            quantity: 1,
            image: "https://example.com/ring.jpg".to_string(),
        }
    }

    #[test]
    fn should_default_status_to_pending() {
        let order = Order::new(NewOrderProps {
            user_id: None,
            customer_name: "María Pérez".to_string(),
            customer_phone: "89953348".to_string(),
            customer_email: String::new(),
            customer_address: "San José".to_string(),
            items: vec![sample_item()],
            total: 2500.0,
            notes: String::new(),
        });

        assert_eq!(order.status, ORDER_STATUS_PENDING);
        assert!(order.user_id.is_none());
    }

    #[test]
    fn should_keep_user_id_when_present() {
        let order = Order::new(NewOrderProps {
            user_id: Some(UserId::new("user-1")),
            customer_name: "María Pérez".to_string(),
            customer_phone: "89953348".to_string(),
            customer_email: "maria@example.com".to_string(),
            customer_address: "San José".to_string(),
            items: vec![sample_item()],
            total: 2500.0,
            notes: "Entregar en la tarde".to_string(),
        });

        assert_eq!(order.user_id, Some(UserId::new("user-1")));
    }
}
