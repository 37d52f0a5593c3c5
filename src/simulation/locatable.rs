//! Trait for entities that have a position in 2D space.
//!
//! This trait provides a common interface for everything the sensing code
//! can search over (food items, organisms).

use ndarray::Array1;

/// Trait for entities with a position in 2D space.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;
}
