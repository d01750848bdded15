pub mod extractors;
pub mod principal;
pub mod session;

pub use extractors::RequestContext;
pub use principal::SessionPrincipal;
pub use session::{session_middleware, SESSION_COOKIE_NAME};
