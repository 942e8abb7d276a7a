pub mod api_client;
pub mod constants;

pub use api_client::{CatalogClient, ClientError, ClientResult};
