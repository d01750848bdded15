use crate::enums::common::LocationImageResponse;
use crate::services::locations::LocationTable;
use crate::StaticAssets;
use actix_web::{get, web, HttpResponse, Responder};

#[utoipa::path(
    get,
    tag = "Locations",
    path = "/get_location_image/{location}",
    params(
        ("location" = String, Path, description = "Delivery location name, e.g. `Lucas Hall`"),
    ),
    responses(
        (status = 200, description = "Image for the location, or the default image", body = LocationImageResponse)
    ),
    summary = "Image asset URL for a delivery location"
)]
#[get("/get_location_image/{location}")]
pub(crate) async fn get_location_image(
    locations: web::Data<LocationTable>,
    assets: web::Data<StaticAssets>,
    path: web::Path<(String,)>,
) -> impl Responder {
    let location = path.into_inner().0;
    let image_url = locations.image_url(&assets.url_prefix, &location);
    debug!("get_location_image: '{}' -> {}", location, image_url);
    HttpResponse::Ok().json(LocationImageResponse { image_url })
}
