use std::sync::OnceLock;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::transport::Channel;
use user_service::client::connect;
use user_service::configuration::Settings;
use user_service::proto::UserServiceClient;
use user_service::startup::run;
use user_service::telemetry::{get_subscriber, init_subscriber};

static TRACING: OnceLock<()> = OnceLock::new();

// Logs are swallowed unless TEST_LOG is set.
fn init_tracing() {
    TRACING.get_or_init(|| {
        let name = "test".to_string();
        let level = "debug".to_string();
        let result = if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber(name, level, std::io::stdout))
        } else {
            init_subscriber(get_subscriber(name, level, std::io::sink))
        };
        if let Err(err) = result {
            eprintln!("tracing already initialised: {}", err);
        }
    });
}

pub struct TestApp {
    pub address: String,
    pub client: UserServiceClient<Channel>,
    shutdown: oneshot::Sender<()>,
    server: JoinHandle<Result<(), tonic::transport::Error>>,
}

impl TestApp {
    /// Signals shutdown and waits for the server task to finish.
    pub async fn stop(self) -> Result<(), tonic::transport::Error> {
        let TestApp {
            client,
            shutdown,
            server,
            ..
        } = self;
        // open client connections would hold up graceful shutdown
        drop(client);
        let _ = shutdown.send(());
        server.await.expect("server task panicked")
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> TestApp {
    init_tracing();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    configuration.application.host = "127.0.0.1".to_string();
    configuration.application.port = port;
    let address = configuration.application.address();

    let (shutdown, signal) = oneshot::channel::<()>();
    let server = run(listener, configuration, async {
        let _ = signal.await;
    })
    .await
    .expect("Failed to build server.");
    let server = tokio::spawn(server);

    let client = connect(&address).await.expect("Failed to connect to server.");

    TestApp {
        address,
        client,
        shutdown,
        server,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_configuration(Settings::default()).await
}
