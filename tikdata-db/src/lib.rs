// Library exports for tikdata-db
// The provisioning tools in tikdata-cli use these modules

pub mod config;
pub mod connection;
pub mod error;
pub mod export;
pub mod inspect;
pub mod provision;
pub mod schema;
pub mod statements;

pub use connection::Database;
pub use error::{ProvisionError, ProvisionResult};
pub use provision::Provisioner;
