use crate::proto::CreateUserRequest;
use serde_valid::Validate;
use std::fmt;

/// Input for `CreateUser`.
///
/// The rules below are advisory: `CreateUser` accepts every request and
/// only logs what fails them.
#[derive(Clone, PartialEq, Validate)]
pub struct CreateUserForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub first_name: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub last_name: String,
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 8)]
    pub password: String,
}

impl CreateUserForm {
    /// Rule violations as a JSON string, or `None` when the form is clean.
    pub fn warnings(&self) -> Option<String> {
        self.validate().err().map(|errors| errors.to_string())
    }
}

impl From<CreateUserRequest> for CreateUserForm {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
        }
    }
}

impl fmt::Debug for CreateUserForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
