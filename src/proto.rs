//! Types and gRPC stubs generated from `proto/user.proto` at build time.

pub mod user {
    tonic::include_proto!("user");
}

pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
pub use user::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse, User,
};
