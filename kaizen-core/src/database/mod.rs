pub mod infrastructure;
pub mod ports;

#[cfg(feature = "database")]
pub mod postgres;

pub use infrastructure::memory::products::InMemoryProductRepository;
#[cfg(feature = "database")]
pub use infrastructure::postgres::repositories::products::PostgresProductRepository;
#[cfg(feature = "database")]
pub use postgres::{PoolSettings, PostgresDatabase};
