pub mod config;
pub mod context;
pub mod error;
pub mod evening;
pub mod morning;
pub mod request;
pub mod runner;
pub mod types;

pub use error::{PraxisError, Result};
pub use runner::run;
