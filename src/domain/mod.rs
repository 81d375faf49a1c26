pub mod config;
pub mod error;
pub mod fetch_request;
pub mod fetch_result;
pub mod record;
pub mod schema;
pub mod timestamp;

pub use config::{
    API_KEY_ENV, ClientConfig, TransportConfig, api_key_from_env, load_config,
    parse_config_content,
};
pub use error::AppError;
pub use fetch_request::FetchRequest;
pub use fetch_result::FetchResult;
pub use record::{ConfigurationRecord, VariableType, VariableValue};
pub use schema::{FieldRules, Rule, SchemaValidator, VARIABLE_SCHEMA, VARIABLE_TYPES};
pub use timestamp::{format_timestamp, parse_timestamp};
