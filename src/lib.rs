//! nedoto: fetch typed configuration variables from the Nedoto remote configuration service.
//!
//! ```no_run
//! use nedoto::{FetchRequest, RemoteConfigClient, TransportConfig};
//!
//! # fn main() -> Result<(), nedoto::AppError> {
//! let client = RemoteConfigClient::from_env(&TransportConfig::default())?;
//! let result = client.fetch(&FetchRequest::new("feature-flag")?)?;
//!
//! match result.record() {
//!     Some(record) if !result.failed() => println!("{} = {}", record.slug(), record.value()),
//!     _ => eprintln!("fetch failed ({}): {:?}", result.status(), result.errors()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod client;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::ReqwestTransport;
pub use client::{API_KEY_HEADER, NEDOTO_ENDPOINT, NO_RESPONSE_STATUS, RemoteConfigClient};
pub use domain::{
    API_KEY_ENV, AppError, ClientConfig, ConfigurationRecord, FetchRequest, FetchResult,
    SchemaValidator, TransportConfig, VariableType, VariableValue, api_key_from_env, load_config,
    parse_config_content,
};
pub use ports::{HttpResponse, HttpTransport};
