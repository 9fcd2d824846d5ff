//! `pescaderia-session` — placeholder login state and navigation.
//!
//! There is no real authentication: a session is just a display name kept in
//! a key-value storage port, loaded on start and cleared on logout.

pub mod route;
pub mod session;
pub mod storage;

pub use route::{NavLink, Route};
pub use session::{LOGGED_IN_KEY, Session, SessionError, USERNAME_KEY};
pub use storage::{InMemorySessionStorage, SessionStorage};
