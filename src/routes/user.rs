use crate::forms::user::CreateUserForm;
use crate::proto::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse, UserService,
};
use crate::services::UserDirectory;
use std::sync::Arc;
use tonic::{Request, Response, Status};

pub struct UserHandler {
    directory: Arc<UserDirectory>,
}

impl UserHandler {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }
}

#[tonic::async_trait]
impl UserService for UserHandler {
    #[tracing::instrument(name = "CreateUser", skip(self, request))]
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let form = CreateUserForm::from(request.into_inner());
        let user = self.directory.create_user(form);

        Ok(Response::new(CreateUserResponse {
            user: Some(user.into()),
        }))
    }

    #[tracing::instrument(name = "GetUser", skip(self, request))]
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let user = self.directory.get_user(request.into_inner().id);

        Ok(Response::new(GetUserResponse {
            user: Some(user.into()),
        }))
    }
}
