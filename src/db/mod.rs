pub mod auth;
pub mod connection;
pub mod institutions;
pub mod magic_auth;
pub mod moves;
pub mod profiles;
pub mod store;
pub mod tasks;

pub use connection::Database;
pub use store::MoveStore;
