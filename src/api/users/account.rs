use crate::auth::{RequestContext, SessionPrincipal};
use crate::db::{MenuOperations, RepositoryError, UserOperations};
use crate::enums::users::LoginForm;
use crate::views::{render_login, render_menu};
use crate::StaticAssets;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};

const INVALID_CREDENTIALS: &str = "Invalid email or campus ID";

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
pub(super) async fn login_page(ctx: RequestContext) -> impl Responder {
    if ctx.principal().is_some() {
        return redirect("/index");
    }
    html(render_login(None))
}

#[post("/")]
pub(super) async fn login(
    user_ops: web::Data<UserOperations>,
    mut ctx: RequestContext,
    form: web::Form<LoginForm>,
) -> actix_web::Result<HttpResponse> {
    let LoginForm { email, campus_id } = form.into_inner();
    let lookup_email = email.clone();
    let result = web::block(move || {
        user_ops.get_user_by_credentials(&lookup_email, &campus_id)
    })
    .await?;

    match result {
        Ok(user) => {
            debug!("login: user authenticated successfully for email '{}'", email);
            ctx.sign_in(SessionPrincipal {
                user_id: user.id,
                name: user.name,
            })?;
            Ok(redirect("/index"))
        }
        Err(RepositoryError::NotFound(_)) => {
            info!("login: authentication failed for email '{}'", email);
            Ok(html(render_login(Some(INVALID_CREDENTIALS))))
        }
        Err(e) => {
            error!("login: user lookup failed for email '{}': {}", email, e);
            Ok(HttpResponse::InternalServerError().body("Database connection failed"))
        }
    }
}

#[get("/index")]
pub(super) async fn index(
    menu_ops: web::Data<MenuOperations>,
    assets: web::Data<StaticAssets>,
    ctx: RequestContext,
) -> actix_web::Result<HttpResponse> {
    let Some(principal) = ctx.principal() else {
        return Ok(redirect("/"));
    };

    match web::block(move || menu_ops.get_all_menu_items()).await? {
        Ok(items) => {
            debug!(
                "index: listing {} menu items for user {}",
                items.len(),
                principal.user_id
            );
            Ok(html(render_menu(&principal.name, &items, &assets.url_prefix)))
        }
        Err(e) => {
            error!("index: failed to load menu for user {}: {}", principal.user_id, e);
            Ok(HttpResponse::InternalServerError().body("Database connection failed"))
        }
    }
}

#[get("/logout")]
pub(super) async fn logout(mut ctx: RequestContext) -> impl Responder {
    if let Some(principal) = ctx.principal() {
        debug!("logout: user {} signed out", principal.user_id);
    }
    ctx.sign_out();
    redirect("/")
}
