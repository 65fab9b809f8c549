//! Custom actions for the Restaurant actor.
//!
//! Handled by the [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! implementation on [`Restaurant`](crate::domain::Restaurant).

use crate::domain::OpeningHours;
use chrono::{NaiveTime, Weekday};

#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Adds a weekly window. Identical windows are rejected.
    AddOpeningHours(OpeningHours),
    /// Removes every window; the restaurant shows as closed until new ones are added.
    ClearOpeningHours,
    /// Sets the rating, between 0 and 5.
    Rate(f32),
    SetActive(bool),
    /// Checks whether the restaurant serves at the given moment.
    IsOpenAt { day: Weekday, time: NaiveTime },
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone, PartialEq)]
pub enum RestaurantActionResult {
    AddOpeningHours(()),
    ClearOpeningHours(()),
    Rate(()),
    SetActive(()),
    IsOpenAt(bool),
}
