mod common;
mod errors;
pub mod users;

use crate::enums::common::{
    AddToCartRequest, CartTotalResponse, ErrorResponse, LocationImageResponse, MessageResponse,
    PlaceOrderRequest, PlaceOrderResponse, RemoveFromCartRequest,
};
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
pub(crate) use errors::default_error_handler;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        common::cart::add_to_cart,
        common::cart::remove_from_cart,
        common::cart::cart_total,
        common::orders::place_order,
        common::locations::get_location_image,
    ),
    components(schemas(
        AddToCartRequest,
        RemoveFromCartRequest,
        CartTotalResponse,
        MessageResponse,
        PlaceOrderRequest,
        PlaceOrderResponse,
        LocationImageResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Cart", description = "Session cart"),
        (name = "Orders", description = "Order placement"),
        (name = "Locations", description = "Delivery locations"),
    )
)]
pub struct ApiDoc;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::JsonConfig::default().error_handler(default_error_handler))
        .app_data(web::Data::new(state.user_ops.clone()))
        .app_data(web::Data::new(state.menu_ops.clone()))
        .app_data(web::Data::new(state.order_ops.clone()))
        .app_data(web::Data::new(state.locations.clone()))
        .app_data(web::Data::new(state.assets.clone()))
        .service(health)
        .service(openapi_json)
        .configure(users::config)
        .configure(common::config);
}
