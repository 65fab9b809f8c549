//! # User Client
//!
//! High-level API for the `User` actor: registration with duplicate-email rejection, contact
//! updates and account toggles.

use crate::domain::{normalize_email, User, UserCreate, UserId, UserUpdate};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers a user. The user actor rejects an email that is already registered
    /// (case-insensitive) with `InvalidArgument`.
    #[instrument(skip(self))]
    pub async fn register(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        normalize_email(&params.email)?;
        let id = self.inner.create(params).await.map_err(UserError::from)?;
        info!(%id, "User registered");
        Ok(id)
    }

    /// Changes contact details; a new email must not belong to another user.
    #[instrument(skip(self))]
    pub async fn update_contact(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let email = normalize_email(email)?;
        let users = self.list().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// Active couriers currently accepting deliveries.
    #[instrument(skip(self))]
    pub async fn available_couriers(&self) -> Result<Vec<User>, UserError> {
        let users = self.list().await?;
        Ok(users.into_iter().filter(User::is_available_courier).collect())
    }

    pub async fn activate(&self, id: UserId) -> Result<User, UserError> {
        self.act(id, UserAction::Activate).await
    }

    pub async fn deactivate(&self, id: UserId) -> Result<User, UserError> {
        self.act(id, UserAction::Deactivate).await
    }

    pub async fn set_availability(&self, id: UserId, available: bool) -> Result<User, UserError> {
        self.act(id, UserAction::SetAvailability(available)).await
    }

    pub async fn set_dietary_preferences(
        &self,
        id: UserId,
        preferences: impl Into<String>,
    ) -> Result<User, UserError> {
        self.act(id, UserAction::SetDietaryPreferences(preferences.into()))
            .await
    }

    #[instrument(skip(self))]
    async fn act(&self, id: UserId, action: UserAction) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(UserError::from)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }

    fn not_found(id: &UserId) -> Self::Error {
        UserError::NotFound(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Role};
    use crate::framework::mock::MockClient;

    fn alice() -> UserCreate {
        UserCreate {
            name: "Alice".into(),
            email: "Alice@Example.com".into(),
            phone: None,
            role: Role::customer(),
            main_address: None,
        }
    }

    fn existing(id: u32, email: &str) -> User {
        let mut params = alice();
        params.email = email.into();
        User::new(UserId(id), params).unwrap()
    }

    #[tokio::test]
    async fn test_register_sends_a_single_create() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create().return_ok(UserId(2));

        let client = UserClient::new(mock.client());
        let id = client.register(alice()).await.unwrap();

        assert_eq!(id, UserId(2));
        mock.verify();
    }

    #[tokio::test]
    async fn test_register_surfaces_duplicate_email() {
        let mut mock = MockClient::<User>::new();
        let duplicate = UserError::Domain(DomainError::invalid_argument(
            "email already registered: alice@example.com",
        ));
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(duplicate.clone())));

        let client = UserClient::new(mock.client());
        assert_eq!(client.register(alice()).await, Err(duplicate));
        mock.verify();
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_email_without_calling_actor() {
        let mock = MockClient::<User>::new();
        let client = UserClient::new(mock.client());

        let mut params = alice();
        params.email = "alice.example.com".into();
        assert!(client.register(params).await.is_err());
    }

    #[tokio::test]
    async fn test_update_contact_goes_straight_to_the_actor() {
        let mut mock = MockClient::<User>::new();
        let me = existing(1, "alice@example.com");
        mock.expect_update(UserId(1)).return_ok(me);

        let client = UserClient::new(mock.client());
        let update = UserUpdate {
            email: Some("ALICE@example.com".into()),
            ..Default::default()
        };
        assert!(client.update_contact(UserId(1), update).await.is_ok());
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_email_normalizes_the_query() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![
            existing(1, "bob@example.com"),
            existing(2, "alice@example.com"),
        ]);

        let client = UserClient::new(mock.client());
        let found = client.find_by_email(" ALICE@example.com ").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(UserId(2)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_maps_missing_user() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId(9)).return_ok(None);

        let client = UserClient::new(mock.client());
        let result = client.find(UserId(9)).await;
        assert_eq!(result, Err(UserError::NotFound("user_9".into())));
    }

    #[tokio::test]
    async fn test_communication_errors_are_wrapped() {
        let mut mock = MockClient::<User>::new();
        mock.expect_action(UserId(1))
            .return_err(FrameworkError::ActorClosed);

        let client = UserClient::new(mock.client());
        let result = client.deactivate(UserId(1)).await;
        assert!(matches!(result, Err(UserError::ActorCommunicationError(_))));
    }
}
