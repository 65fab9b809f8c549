//! Custom actions for the User actor.
//!
//! Each action returns the user as it is after the change.

#[derive(Debug, Clone)]
pub enum UserAction {
    /// Re-enables a deactivated account.
    Activate,
    /// Blocks the account from ordering or delivering.
    Deactivate,
    /// Couriers only: whether new deliveries may be assigned.
    SetAvailability(bool),
    /// Customers only.
    SetDietaryPreferences(String),
}
