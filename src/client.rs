use crate::proto::UserServiceClient;
use std::time::Duration;
use thiserror::Error;
use tonic::codegen::http::uri::InvalidUri;
use tonic::transport::{Channel, Endpoint};

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server address: {0}")]
    InvalidAddress(#[from] InvalidUri),
    #[error("did not connect: {0}")]
    Connect(#[from] tonic::transport::Error),
}

/// `localhost:50051` -> `http://localhost:50051`; full URIs pass through.
pub fn endpoint_uri(address: &str) -> String {
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}

/// Connects eagerly, so an unreachable server fails here rather than on the first call.
pub async fn connect(address: &str) -> Result<UserServiceClient<Channel>, ClientError> {
    let channel = Endpoint::from_shared(endpoint_uri(address))?
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .connect()
        .await?;

    Ok(UserServiceClient::new(channel))
}
