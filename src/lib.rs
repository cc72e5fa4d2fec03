pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::ConnectConfig;
pub use core::{
    AwsCredentials, ConnectClient, CredentialsProvider, EnvironmentCredentialsProvider,
    Operation, Paginated, Paginator, ReqwestTransport, RetryPolicy, StaticCredentialsProvider,
};
pub use domain::{enums, model};
pub use utils::error::{ConnectError, Result};
