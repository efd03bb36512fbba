//! Session handling: token-to-identity resolution, login flow, and the
//! session cookie wire format.

pub mod cookie;
pub mod manager;
pub mod resolver;

pub use cookie::{SESSION_COOKIE_NAME, SessionCookie};
pub use manager::{LoginOutcome, SessionManager};
pub use resolver::SessionResolver;
