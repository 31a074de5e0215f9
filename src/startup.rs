use crate::configuration::Settings;
use crate::proto::UserServiceServer;
use crate::routes::UserHandler;
use crate::services::UserDirectory;
use std::future::Future;
use std::net::TcpListener;
use std::pin::Pin;
use std::sync::Arc;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codegen::http;

pub type Server = Pin<Box<dyn Future<Output = Result<(), tonic::transport::Error>> + Send>>;

/// Serves `UserService` on an already bound listener until `shutdown` resolves.
pub async fn run<F>(
    listener: TcpListener,
    settings: Settings,
    shutdown: F,
) -> Result<Server, std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    listener.set_nonblocking(true)?;
    let incoming = TcpListenerStream::new(tokio::net::TcpListener::from_std(listener)?);

    let directory = Arc::new(UserDirectory::new(settings.placeholder));
    let user_service = UserServiceServer::new(UserHandler::new(directory));

    let server = tonic::transport::Server::builder()
        .trace_fn(|request: &http::Request<()>| {
            tracing::info_span!("grpc_request", path = %request.uri().path())
        })
        .add_service(user_service)
        .serve_with_incoming_shutdown(incoming, shutdown);

    Ok(Box::pin(server))
}
