pub mod client;
pub mod credentials;
pub mod operation;
pub mod paginator;
pub mod retry;
pub mod signer;
pub mod transport;

pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
pub use client::ConnectClient;
pub use credentials::{
    AwsCredentials, CredentialsProvider, EnvironmentCredentialsProvider,
    StaticCredentialsProvider,
};
pub use operation::{Operation, Paginated};
pub use paginator::Paginator;
pub use retry::RetryPolicy;
pub use transport::ReqwestTransport;
