use crate::auth::principal::SessionPrincipal;
use crate::models::cart::Cart;
use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

const PRINCIPAL_KEY: &str = "principal";
const CART_KEY: &str = "cart";

/// Per-request view of the browser session: who is signed in and what is in
/// their cart. Changes are only written back through the explicit methods.
pub struct RequestContext {
    session: Session,
    principal: Option<SessionPrincipal>,
    cart: Cart,
}

impl RequestContext {
    fn load(session: Session) -> Result<Self, SessionGetError> {
        let principal = session.get::<SessionPrincipal>(PRINCIPAL_KEY)?;
        let cart = session.get::<Cart>(CART_KEY)?.unwrap_or_default();
        Ok(Self {
            session,
            principal,
            cart,
        })
    }

    pub fn principal(&self) -> Option<&SessionPrincipal> {
        self.principal.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn save_cart(&self) -> Result<(), SessionInsertError> {
        self.session.insert(CART_KEY, &self.cart)
    }

    /// Starts a fresh session for `principal`, keeping nothing from before.
    pub fn sign_in(&mut self, principal: SessionPrincipal) -> Result<(), SessionInsertError> {
        self.session.renew();
        self.session.clear();
        self.cart = Cart::default();
        self.session.insert(PRINCIPAL_KEY, &principal)?;
        self.principal = Some(principal);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.session.purge();
        self.principal = None;
        self.cart = Cart::default();
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let session = req.get_session();
        ready(RequestContext::load(session).map_err(|e| {
            warn!("RequestContext: unreadable session state: {}", e);
            Error::from(e)
        }))
    }
}
