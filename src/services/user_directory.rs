//! Placeholder user logic behind the `UserService` handlers.
//!
//! Nothing is persisted: created users are built from the request and
//! assigned the next id, lookups return the configured placeholder profile
//! with the requested id. Neither operation fails.

use crate::configuration::PlaceholderSettings;
use crate::forms::user::CreateUserForm;
use crate::models::user::{User, UserRole, UserStatus};
use chrono::Utc;
use std::sync::atomic::{AtomicI32, Ordering};

const FIRST_USER_ID: i32 = 1;

pub struct UserDirectory {
    next_id: AtomicI32,
    placeholder: PlaceholderSettings,
}

impl UserDirectory {
    pub fn new(placeholder: PlaceholderSettings) -> Self {
        Self {
            next_id: AtomicI32::new(FIRST_USER_ID),
            placeholder,
        }
    }

    // Ids are not unique across a wrap past i32::MAX.
    fn allocate_id(&self) -> i32 {
        let previous = self.next_id.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| {
            Some(id.checked_add(1).unwrap_or(FIRST_USER_ID))
        });
        match previous {
            Ok(id) | Err(id) => id,
        }
    }

    #[tracing::instrument(name = "Create user", skip(self, form), fields(email = %form.email))]
    pub fn create_user(&self, form: CreateUserForm) -> User {
        if let Some(warnings) = form.warnings() {
            tracing::warn!(%warnings, "accepting user that fails form rules");
        }
        let id = self.allocate_id();
        let now = Utc::now();

        tracing::info!(user_id = id, "user created");
        User {
            id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: String::new(),
            status: UserStatus::Active,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[tracing::instrument(name = "Get user", skip(self))]
    pub fn get_user(&self, id: i32) -> User {
        let placeholder = &self.placeholder;
        User {
            id,
            first_name: placeholder.first_name.clone(),
            last_name: placeholder.last_name.clone(),
            email: placeholder.email.clone(),
            phone: String::new(),
            status: placeholder.status,
            role: placeholder.role,
            created_at: placeholder.timestamp,
            updated_at: placeholder.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::CreateUserRequest;
    use std::sync::Arc;

    fn jane() -> CreateUserForm {
        CreateUserForm::from(CreateUserRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "janedoe@example.com".to_string(),
            password: "password123".to_string(),
        })
    }

    #[test]
    fn create_echoes_identity_fields() {
        let directory = UserDirectory::new(PlaceholderSettings::default());
        let user = directory.create_user(jane());

        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email, "janedoe@example.com");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn ids_increase_per_create() {
        let directory = UserDirectory::new(PlaceholderSettings::default());
        let first = directory.create_user(jane());
        let second = directory.create_user(jane());
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn requests_failing_form_rules_are_still_created() {
        let directory = UserDirectory::new(PlaceholderSettings::default());
        let cases = [
            CreateUserForm {
                password: "pw".to_string(),
                ..jane()
            },
            CreateUserForm {
                last_name: String::new(),
                ..jane()
            },
            CreateUserForm {
                email: "jane@localhost".to_string(),
                ..jane()
            },
            CreateUserForm {
                email: "nope".to_string(),
                ..jane()
            },
        ];

        for (index, form) in cases.into_iter().enumerate() {
            let expected = form.clone();
            let user = directory.create_user(form);
            assert_eq!(user.id, index as i32 + 1);
            assert_eq!(user.first_name, expected.first_name);
            assert_eq!(user.last_name, expected.last_name);
            assert_eq!(user.email, expected.email);
        }
    }

    #[test]
    fn id_counter_wraps_instead_of_failing() {
        let directory = UserDirectory::new(PlaceholderSettings::default());
        directory.next_id.store(i32::MAX, Ordering::Relaxed);

        assert_eq!(directory.create_user(jane()).id, i32::MAX);
        assert_eq!(directory.create_user(jane()).id, FIRST_USER_ID);
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let directory = Arc::new(UserDirectory::new(PlaceholderSettings::default()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let directory = directory.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| directory.create_user(jane()).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 400);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&400));
    }

    #[test]
    fn get_echoes_requested_id_with_placeholder_profile() {
        let directory = UserDirectory::new(PlaceholderSettings::default());
        let user = directory.get_user(42);

        assert_eq!(user.id, 42);
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email, "johndoe@example.com");
        assert!(user.phone.is_empty());
        assert_eq!(directory.get_user(-3).id, -3);
    }
}
