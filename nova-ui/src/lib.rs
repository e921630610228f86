pub mod auth;
pub mod config;
pub mod screens;
pub mod session;
pub mod shell;

pub use auth::{AuthScreen, GatewayHandle, IdentityGateway};
pub use config::Config;
pub use session::{Session, SessionController};
pub use shell::state::{AppState, Page, View};
pub use shell::AppShell;
