//! # Restaurant Client
//!
//! High-level API for the `Restaurant` actor, including catalog search and "open now" queries.

use crate::domain::{OpeningHours, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use chrono::{NaiveTime, Weekday};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(RestaurantError::from)
    }

    pub async fn add_opening_hours(
        &self,
        id: RestaurantId,
        hours: OpeningHours,
    ) -> Result<(), RestaurantError> {
        match self.act(id, RestaurantAction::AddOpeningHours(hours)).await? {
            RestaurantActionResult::AddOpeningHours(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    pub async fn clear_opening_hours(&self, id: RestaurantId) -> Result<(), RestaurantError> {
        match self.act(id, RestaurantAction::ClearOpeningHours).await? {
            RestaurantActionResult::ClearOpeningHours(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    pub async fn rate(&self, id: RestaurantId, rating: f32) -> Result<(), RestaurantError> {
        match self.act(id, RestaurantAction::Rate(rating)).await? {
            RestaurantActionResult::Rate(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    pub async fn set_active(&self, id: RestaurantId, active: bool) -> Result<(), RestaurantError> {
        match self.act(id, RestaurantAction::SetActive(active)).await? {
            RestaurantActionResult::SetActive(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    pub async fn is_open_at(
        &self,
        id: RestaurantId,
        day: Weekday,
        time: NaiveTime,
    ) -> Result<bool, RestaurantError> {
        match self.act(id, RestaurantAction::IsOpenAt { day, time }).await? {
            RestaurantActionResult::IsOpenAt(open) => Ok(open),
            other => Err(unexpected(other)),
        }
    }

    /// Active restaurants whose name, description or cuisine contains `text`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, text: &str) -> Result<Vec<Restaurant>, RestaurantError> {
        let restaurants = self.list().await?;
        Ok(restaurants
            .into_iter()
            .filter(|r| r.active && r.matches(text))
            .collect())
    }

    /// Restaurants serving at the given moment.
    #[instrument(skip(self))]
    pub async fn open_at(
        &self,
        day: Weekday,
        time: NaiveTime,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        let restaurants = self.list().await?;
        Ok(restaurants
            .into_iter()
            .filter(|r| r.is_open_at(day, time))
            .collect())
    }

    #[instrument(skip(self))]
    async fn act(
        &self,
        id: RestaurantId,
        action: RestaurantAction,
    ) -> Result<RestaurantActionResult, RestaurantError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(RestaurantError::from)
    }
}

fn unexpected(result: RestaurantActionResult) -> RestaurantError {
    RestaurantError::UnexpectedResult(format!("{:?}", result))
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RestaurantError::from(e)
    }

    fn not_found(id: &RestaurantId) -> Self::Error {
        RestaurantError::NotFound(id.to_string())
    }
}
