use crate::auth::RequestContext;
use crate::db::OrderOperations;
use crate::enums::common::{ErrorResponse, PlaceOrderRequest, PlaceOrderResponse};
use crate::services::locations::LocationTable;
use crate::services::ordering::{place_order as place_order_with, PlacementError};
use actix_web::{post, web, HttpResponse};

#[utoipa::path(
    post,
    tag = "Orders",
    path = "/place_order",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Empty cart, invalid location or unknown menu items", body = ErrorResponse),
        (status = 401, description = "No signed-in user", body = ErrorResponse),
        (status = 500, description = "Order could not be stored", body = ErrorResponse)
    ),
    summary = "Place an order for delivery"
)]
#[post("/place_order")]
pub(crate) async fn place_order(
    order_ops: web::Data<OrderOperations>,
    locations: web::Data<LocationTable>,
    mut ctx: RequestContext,
    req_data: Result<web::Json<PlaceOrderRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    // Unauthenticated requests get 401 whatever the body holds.
    let Some(principal) = ctx.principal().cloned() else {
        let err = PlacementError::Unauthorized;
        debug!("ORDER: place_order(): rejected: {}", err);
        return Ok(HttpResponse::build(err.status_code()).json(ErrorResponse::new(err.to_string())));
    };
    let PlaceOrderRequest {
        location,
        cart_items,
    } = req_data?.into_inner();

    let result = web::block(move || {
        place_order_with(
            order_ops.get_ref(),
            locations.get_ref(),
            Some(&principal),
            &location,
            cart_items,
        )
    })
    .await?;

    match result {
        Ok(placed) => {
            ctx.cart_mut().clear();
            if let Err(e) = ctx.save_cart() {
                error!(
                    "ORDER: place_order(): order {} stored but cart not cleared: {}",
                    placed.order_token, e
                );
            }
            Ok(HttpResponse::Ok().json(PlaceOrderResponse {
                order_id: placed.order_token,
                delivery_time: placed.estimated_minutes,
            }))
        }
        Err(e) => {
            debug!("ORDER: place_order(): rejected: {}", e);
            Ok(HttpResponse::build(e.status_code()).json(ErrorResponse::new(e.to_string())))
        }
    }
}
