use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderItemDto {
    /// Catalog id of the product at order time
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[oai(default)]
    pub image: String,
}

impl From<OrderItemDto> for OrderItem {
    fn from(dto: OrderItemDto) -> Self {
        OrderItem {
            product_id: dto.product_id,
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
            image: dto.image,
        }
    }
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        OrderItemDto {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    #[oai(default)]
    pub customer_email: String,
    #[oai(default)]
    pub customer_address: String,
    pub items: Vec<OrderItemDto>,
    /// Client-computed total; stored as sent
    pub total: f64,
    #[oai(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: Uuid,
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<OrderItemDto>,
    pub total: f64,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.map(|id| id.to_string()),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_email: order.customer_email,
            customer_address: order.customer_address,
            items: order.items.into_iter().map(|i| i.into()).collect(),
            total: order.total,
            notes: order.notes,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateOrderStatusResponse {
    pub id: Uuid,
    pub status: String,
}
