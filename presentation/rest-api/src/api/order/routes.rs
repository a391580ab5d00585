use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};
use business::domain::order::use_cases::my_history::{MyOrderHistoryParams, MyOrderHistoryUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, forbidden_response};
use crate::api::order::dto::{CreateOrderRequest, OrderResponse, UpdateOrderStatusResponse};
use crate::api::security::{OptionalSessionAuth, SessionAuth};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    my_history_use_case: Arc<dyn MyOrderHistoryUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        my_history_use_case: Arc<dyn MyOrderHistoryUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            my_history_use_case,
            update_status_use_case,
        }
    }
}

/// Order API
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Open to guests; a valid session attaches the order to the caller
    /// so it shows up in their history.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create_order(
        &self,
        auth: OptionalSessionAuth,
        body: Json<CreateOrderRequest>,
    ) -> CreateOrderResponse {
        let params = CreateOrderParams {
            caller: auth.into_option().map(|a| a.user().clone()),
            customer_name: body.0.customer_name,
            customer_phone: body.0.customer_phone,
            customer_email: body.0.customer_email,
            customer_address: body.0.customer_address,
            items: body.0.items.into_iter().map(|i| i.into()).collect(),
            total: body.0.total,
            notes: body.0.notes,
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateOrderResponse::InternalError(json)
            }
        }
    }

    /// List orders
    ///
    /// Role-scoped: admins see every order, customers their own, guests
    /// an empty list. Optional exact-match status filter.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(
        &self,
        auth: OptionalSessionAuth,
        status: Query<Option<String>>,
    ) -> GetAllOrdersResponse {
        let params = GetAllOrdersParams {
            caller: auth.into_option().map(|a| a.user().clone()),
            status: status.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetAllOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Recent orders of the authenticated caller
    #[oai(path = "/orders/my-history", method = "get", tag = "ApiTags::Orders")]
    async fn my_order_history(&self, auth: SessionAuth) -> MyOrderHistoryResponse {
        let params = MyOrderHistoryParams {
            caller: Some(auth.user().clone()),
        };

        match self.my_history_use_case.execute(params).await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                MyOrderHistoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => MyOrderHistoryResponse::Unauthorized(json),
                    _ => MyOrderHistoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an order's status
    ///
    /// Admin only. The status value is stored as sent, no vocabulary is
    /// enforced.
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_order_status(
        &self,
        auth: SessionAuth,
        id: Path<String>,
        status: Query<String>,
    ) -> UpdateStatusResponse {
        if !auth.user().is_admin() {
            return UpdateStatusResponse::Forbidden(forbidden_response());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateOrderStatusParams {
            id: uuid,
            status: status.0.clone(),
        };

        match self.update_status_use_case.execute(params).await {
            Ok(()) => UpdateStatusResponse::Ok(Json(UpdateOrderStatusResponse {
                id: uuid,
                status: status.0,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateStatusResponse::NotFound(json),
                    _ => UpdateStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MyOrderHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateStatusResponse {
    #[oai(status = 200)]
    Ok(Json<UpdateOrderStatusResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
