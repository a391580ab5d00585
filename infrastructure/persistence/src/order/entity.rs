use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Json<Vec<OrderItem>>,
    pub total: BigDecimal,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Order {
        Order::from_repository(
            self.id,
            self.user_id.map(UserId::new),
            self.customer_name,
            self.customer_phone,
            self.customer_email,
            self.customer_address,
            self.items.0,
            self.total.to_f64().unwrap_or_default(),
            self.notes,
            self.status,
            self.created_at,
        )
    }
}
