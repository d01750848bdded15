mod account;

use account::*;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page)
        .service(login)
        .service(index)
        .service(logout);
}
