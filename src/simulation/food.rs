//! Food items that organisms can consume for energy.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;

/// Energy an organism gains from consuming one food item.
pub const FOOD_ENERGY: f32 = 50.0;

/// Visual radius of a food item; consumption reach is governed by the
/// consuming organism's size, not by this.
pub const FOOD_RADIUS: f32 = 3.0;

/// A passive resource point.
///
/// Food items never move. When an organism consumes one it gains the item's
/// energy; the item is marked consumed and swept from the world at the end
/// of the tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier, stable for renderer diffing.
    pub id: u64,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Energy value remaining; zero once consumed.
    pub energy: f32,
    /// Visual radius.
    pub radius: f32,
}

impl FoodItem {
    /// Creates a fresh food item at the given position.
    pub fn new(id: u64, pos: Array1<f32>) -> Self {
        Self {
            id,
            pos,
            energy: FOOD_ENERGY,
            radius: FOOD_RADIUS,
        }
    }

    /// Checks whether this item has been consumed.
    pub fn is_consumed(&self) -> bool {
        self.energy <= 0.0
    }

    /// Marks this item as consumed by zeroing its energy.
    pub fn consume(&mut self) {
        self.energy = 0.0;
    }
}

impl Locatable for FoodItem {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
