//! Command implementations.

pub mod batch;
pub mod config;
pub mod convert;
pub mod number;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::convert::execute_convert;
pub use self::number::execute_number;
