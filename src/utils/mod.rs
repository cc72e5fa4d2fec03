pub mod epoch;
pub mod error;
pub mod logger;
pub mod validation;
