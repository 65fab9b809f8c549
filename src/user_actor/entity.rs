//! [`ActorEntity`] implementation for [`User`].
//!
//! Emails are unique. The check runs inside the actor through `conflicts_with`, so two
//! concurrent registrations with the same address cannot both succeed.

use super::actions::UserAction;
use super::error::UserError;
use crate::domain::{DomainError, User, UserCreate, UserId, UserUpdate};
use crate::framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(User::new(id, params)?)
    }

    fn conflicts_with(&self, existing: &User) -> Option<Self::Error> {
        (self.email == existing.email).then(|| {
            DomainError::invalid_argument(format!("email already registered: {}", self.email))
                .into()
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.update_contact(update)?;
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<User, Self::Error> {
        match action {
            UserAction::Activate => self.activate(),
            UserAction::Deactivate => self.deactivate(),
            UserAction::SetAvailability(available) => self.set_availability(available)?,
            UserAction::SetDietaryPreferences(preferences) => {
                self.set_dietary_preferences(preferences)?
            }
        }
        Ok(self.clone())
    }
}
