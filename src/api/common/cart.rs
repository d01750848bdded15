use crate::auth::RequestContext;
use crate::enums::common::{
    AddToCartRequest, CartTotalResponse, ErrorResponse, MessageResponse, RemoveFromCartRequest,
};
use crate::models::cart::CartEntry;
use actix_web::{get, post, web, HttpResponse, Responder};

#[utoipa::path(
    post,
    tag = "Cart",
    path = "/add_to_cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item appended to the session cart", body = MessageResponse),
        (status = 400, description = "Malformed body or unusable price", body = ErrorResponse)
    ),
    summary = "Add an item to the cart"
)]
#[post("/add_to_cart")]
pub(crate) async fn add_to_cart(
    mut ctx: RequestContext,
    req_data: web::Json<AddToCartRequest>,
) -> actix_web::Result<HttpResponse> {
    let AddToCartRequest {
        item_id,
        name,
        price,
    } = req_data.into_inner();

    let Some(entry) = CartEntry::new(item_id, name, price) else {
        warn!("add_to_cart: rejected item {} with price {}", item_id, price);
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Invalid price")));
    };

    if let Err(e) = ctx.cart_mut().add(entry) {
        warn!("add_to_cart: rejected item {} with price {}: cart total out of range", item_id, price);
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())));
    }
    ctx.save_cart()?;
    debug!(
        "add_to_cart: item {} added, cart now holds {} entries",
        item_id,
        ctx.cart().len()
    );
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Item added to cart".to_string(),
    }))
}

#[utoipa::path(
    post,
    tag = "Cart",
    path = "/remove_from_cart",
    request_body = RemoveFromCartRequest,
    responses(
        (status = 200, description = "All entries with the id removed", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    summary = "Remove an item from the cart"
)]
#[post("/remove_from_cart")]
pub(crate) async fn remove_from_cart(
    mut ctx: RequestContext,
    req_data: web::Json<RemoveFromCartRequest>,
) -> actix_web::Result<HttpResponse> {
    let item_id = req_data.item_id;
    let removed = ctx.cart_mut().remove(item_id);
    if removed > 0 {
        ctx.save_cart()?;
    }
    debug!("remove_from_cart: removed {} entries of item {}", removed, item_id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Item removed from cart".to_string(),
    }))
}

#[utoipa::path(
    get,
    tag = "Cart",
    path = "/cart_total",
    responses(
        (status = 200, description = "Sum of the cart entry prices", body = CartTotalResponse),
        (status = 500, description = "Cart total out of range", body = ErrorResponse)
    ),
    summary = "Total of the session cart"
)]
#[get("/cart_total")]
pub(crate) async fn cart_total(ctx: RequestContext) -> impl Responder {
    match ctx.cart().total() {
        Some(total) => HttpResponse::Ok().json(CartTotalResponse { total }),
        None => {
            error!(
                "cart_total: total of {} entries is out of range",
                ctx.cart().len()
            );
            HttpResponse::InternalServerError().json(ErrorResponse::new("Cart total out of range"))
        }
    }
}
