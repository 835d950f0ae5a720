pub mod client;
pub mod endpoint;
pub mod error;
pub mod schema;
pub mod snapshot;
