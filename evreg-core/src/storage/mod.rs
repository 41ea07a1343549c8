pub mod csv;
pub mod traits;

#[cfg(feature = "db")]
pub mod database;

pub use self::csv::CsvStorage;
pub use traits::Storage;

#[cfg(feature = "db")]
pub use database::DatabaseStorage;
