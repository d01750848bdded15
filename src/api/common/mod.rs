pub(crate) mod cart;
pub(crate) mod locations;
pub(crate) mod orders;

use actix_web::web;
use cart::*;
use locations::*;
use orders::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_to_cart)
        .service(remove_from_cart)
        .service(cart_total)
        .service(place_order)
        .service(get_location_image);
}
