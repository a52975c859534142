//! Session command and query handlers.

mod current_session;
mod login;
mod logout;

pub use current_session::CurrentSessionHandler;
pub use login::{LoginCommand, LoginHandler};
pub use logout::LogoutHandler;
