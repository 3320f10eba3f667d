pub mod currency;
pub mod error;
pub use error::AppError;
