//! Command-line client for `user.UserService`.
//!
//! ```text
//! user-client create --first-name Jane --last-name Doe \
//!     --email janedoe@example.com --password password123
//! user-client get 42
//! user-client --addr 10.0.0.5:50051 get 7
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use user_service::client::connect;
use user_service::proto::{CreateUserRequest, GetUserRequest, User};

#[derive(Parser, Debug)]
#[command(name = "user-client", version, about = "Call the UserService gRPC API")]
struct Cli {
    /// Server address, `host:port` or a full URI
    #[arg(long, env = "USER_SERVICE_ADDR", default_value = "localhost:50051")]
    addr: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a user
    Create {
        #[arg(long, default_value = "Jane")]
        first_name: String,
        #[arg(long, default_value = "Doe")]
        last_name: String,
        #[arg(long, default_value = "janedoe@example.com")]
        email: String,
        #[arg(long, default_value = "password123")]
        password: String,
    },
    /// Fetch a user by id
    Get {
        id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut client = connect(&cli.addr).await?;

    match cli.command {
        Command::Create {
            first_name,
            last_name,
            email,
            password,
        } => {
            let response = client
                .create_user(CreateUserRequest {
                    first_name,
                    last_name,
                    email,
                    password,
                })
                .await
                .context("could not create user")?
                .into_inner();
            print_user("Created User", response.user)?;
        }
        Command::Get { id } => {
            let response = client
                .get_user(GetUserRequest { id })
                .await
                .context("could not get user")?
                .into_inner();
            print_user("User", response.user)?;
        }
    }

    Ok(())
}

fn print_user(label: &str, user: Option<User>) -> anyhow::Result<()> {
    let user = user.context("response carried no user")?;
    println!("{}: {}", label, serde_json::to_string_pretty(&user)?);
    Ok(())
}
