//! Courier-side tracking of an order.
//!
//! ```text
//! Pending -> Assigned -> PickedUp -> Delivered
//!              |  ^         |
//!              +--+         +------> Incident
//!              +-------------------> Incident
//! ```
//!
//! `Assigned -> Assigned` is a courier reassignment. `Delivered` and `Incident` are terminal.

use super::{DeliveryId, DomainError, OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,
    Assigned,
    PickedUp,
    Delivered,
    Incident,
}

impl DeliveryStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, DeliveryStatus::Delivered | DeliveryStatus::Incident)
    }

    /// The courier has the order or is on the way to get it.
    pub fn is_in_progress(self) -> bool {
        matches!(self, DeliveryStatus::Assigned | DeliveryStatus::PickedUp)
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::Assigned => "ASSIGNED",
            DeliveryStatus::PickedUp => "PICKED_UP",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Incident => "INCIDENT",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    id: DeliveryId,
    order_id: OrderId,
    courier_id: Option<UserId>,
    status: DeliveryStatus,
    /// Last position reported by the courier, as free-form coordinates.
    current_location: Option<String>,
    incident: Option<String>,
    assigned_at: Option<DateTime<Utc>>,
    picked_up_at: Option<DateTime<Utc>>,
    delivered_at: Option<DateTime<Utc>>,
}

impl Delivery {
    pub fn new(id: DeliveryId, order_id: OrderId) -> Self {
        Self {
            id,
            order_id,
            courier_id: None,
            status: DeliveryStatus::Pending,
            current_location: None,
            incident: None,
            assigned_at: None,
            picked_up_at: None,
            delivered_at: None,
        }
    }

    pub fn id(&self) -> DeliveryId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn courier_id(&self) -> Option<UserId> {
        self.courier_id
    }

    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    pub fn incident(&self) -> Option<&str> {
        self.incident.as_deref()
    }

    pub fn assigned_at(&self) -> Option<DateTime<Utc>> {
        self.assigned_at
    }

    pub fn picked_up_at(&self) -> Option<DateTime<Utc>> {
        self.picked_up_at
    }

    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }

    /// Fails unless a courier can be (re)assigned right now.
    pub fn check_assignable(&self) -> Result<(), DomainError> {
        match self.status {
            DeliveryStatus::Pending | DeliveryStatus::Assigned => Ok(()),
            other => Err(DomainError::invalid_state(format!(
                "cannot assign a courier to {} in status {}",
                self.id, other
            ))),
        }
    }

    pub fn assign_courier(&mut self, courier_id: UserId) -> Result<(), DomainError> {
        self.check_assignable()?;
        self.courier_id = Some(courier_id);
        self.status = DeliveryStatus::Assigned;
        self.assigned_at = Some(Utc::now());
        Ok(())
    }

    pub fn register_pickup(&mut self) -> Result<(), DomainError> {
        self.require(DeliveryStatus::Assigned, "picked up")?;
        self.status = DeliveryStatus::PickedUp;
        self.picked_up_at = Some(Utc::now());
        Ok(())
    }

    pub fn check_deliverable(&self) -> Result<(), DomainError> {
        self.require(DeliveryStatus::PickedUp, "delivered")
    }

    pub fn register_delivery(&mut self) -> Result<(), DomainError> {
        self.check_deliverable()?;
        self.status = DeliveryStatus::Delivered;
        self.delivered_at = Some(Utc::now());
        Ok(())
    }

    pub fn update_location(&mut self, coordinates: impl Into<String>) -> Result<(), DomainError> {
        if !self.status.is_in_progress() {
            return Err(DomainError::invalid_state(format!(
                "{} is {}, no courier is on the way",
                self.id, self.status
            )));
        }
        self.current_location = Some(coordinates.into());
        Ok(())
    }

    /// Records a problem with a delivery that is under way. A completed delivery stays
    /// completed.
    pub fn report_incident(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        if !self.status.is_in_progress() {
            return Err(DomainError::invalid_state(format!(
                "cannot report an incident on {} in status {}",
                self.id, self.status
            )));
        }
        self.incident = Some(description.into());
        self.status = DeliveryStatus::Incident;
        Ok(())
    }

    fn require(&self, expected: DeliveryStatus, verb: &str) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::invalid_state(format!(
                "{} cannot be {} while {}",
                self.id, verb, self.status
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery() -> Delivery {
        Delivery::new(DeliveryId(1), OrderId(1))
    }

    #[test]
    fn test_full_tracking_flow() {
        let mut d = delivery();
        assert_eq!(d.status(), DeliveryStatus::Pending);

        d.assign_courier(UserId(3)).unwrap();
        assert_eq!(d.status(), DeliveryStatus::Assigned);
        assert!(d.assigned_at().is_some());

        d.update_location("-16.3989,-71.5350").unwrap();
        d.register_pickup().unwrap();
        assert!(d.picked_up_at().is_some());

        d.register_delivery().unwrap();
        assert_eq!(d.status(), DeliveryStatus::Delivered);
        assert!(d.delivered_at().is_some());
        assert_eq!(d.current_location(), Some("-16.3989,-71.5350"));
    }

    #[test]
    fn test_steps_require_previous_status() {
        let mut d = delivery();
        assert!(matches!(
            d.register_pickup(),
            Err(DomainError::InvalidState(_))
        ));
        assert!(d.register_delivery().is_err());
        assert!(d.update_location("0,0").is_err());

        d.assign_courier(UserId(3)).unwrap();
        assert!(d.register_delivery().is_err());
    }

    #[test]
    fn test_reassignment_before_pickup_only() {
        let mut d = delivery();
        d.assign_courier(UserId(3)).unwrap();
        d.assign_courier(UserId(4)).unwrap();
        assert_eq!(d.courier_id(), Some(UserId(4)));

        d.register_pickup().unwrap();
        assert!(d.assign_courier(UserId(5)).is_err());
    }

    #[test]
    fn test_delivered_is_terminal_even_for_incidents() {
        let mut d = delivery();
        d.assign_courier(UserId(3)).unwrap();
        d.register_pickup().unwrap();
        d.register_delivery().unwrap();

        let result = d.report_incident("package damaged");
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
        assert_eq!(d.status(), DeliveryStatus::Delivered);
    }

    #[test]
    fn test_incident_during_delivery() {
        let mut d = delivery();
        d.assign_courier(UserId(3)).unwrap();
        d.report_incident("flat tyre").unwrap();
        assert_eq!(d.status(), DeliveryStatus::Incident);
        assert_eq!(d.incident(), Some("flat tyre"));
        assert!(d.register_pickup().is_err());
    }
}
