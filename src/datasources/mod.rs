mod datasource;
mod dolarapi;

pub use datasource::{RateDataSource, RateResult, INTERRUPTED_MESSAGE};
pub use dolarapi::{DolarApiRateDataSource, DOLARAPI_URL};
