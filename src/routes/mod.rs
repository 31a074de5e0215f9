pub mod user;

pub use user::UserHandler;
