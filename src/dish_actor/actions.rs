//! Custom actions for the Dish actor.

#[derive(Debug, Clone)]
pub enum DishAction {
    /// Marks the dish as orderable or sold out. Returns the updated dish.
    SetAvailability(bool),
}
