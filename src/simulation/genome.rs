//! Heritable trait bundle and the mutation operator.
//!
//! A genome is a plain value: founders draw theirs from uniform ranges,
//! offspring receive an explicitly constructed, independently perturbed copy
//! of the parent's. All randomness flows through a caller-supplied [`Rng`].

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lower clamp for `speed` after mutation.
pub const MIN_SPEED: f32 = 0.2;
/// Lower clamp for `size` after mutation.
pub const MIN_SIZE: f32 = 2.0;
/// Lower clamp for `sense_radius` after mutation.
pub const MIN_SENSE_RADIUS: f32 = 20.0;

/// The heritable traits determining an organism's physical and behavioral
/// parameters.
///
/// All numeric traits stay at or above their clamped minimum after any number
/// of mutations. `color_hue` is an opaque lineage tag used only for species
/// grouping and rendering, never for physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// Distance moved per tick when seeking food.
    pub speed: f32,
    /// Body radius; also the consumption reach around the organism.
    pub size: f32,
    /// Maximum distance at which food can be sensed.
    pub sense_radius: f32,
    /// Age in ticks beyond which the organism dies.
    pub max_age: f32,
    /// Energy level above which the organism reproduces.
    pub reproduction_threshold: f32,
    /// Color hue in degrees, `[0, 360)`. Offspring keep the parent's hue
    /// unless the color trait mutates, so equal hues mark one mutation
    /// lineage.
    pub color_hue: f32,
}

impl Genome {
    /// Draws a founder genome, with each trait sampled from its configured
    /// uniform range.
    pub fn founder<R: Rng>(rng: &mut R) -> Self {
        Self {
            speed: rng.random_range(0.5..2.5),
            size: rng.random_range(4.0..10.0),
            sense_radius: rng.random_range(50.0..150.0),
            max_age: rng.random_range(800.0..1500.0),
            reproduction_threshold: rng.random_range(120.0..180.0),
            color_hue: rng.random_range(0.0..360.0),
        }
    }

    /// Derives an offspring genome from this parent.
    ///
    /// Independently, with probability `mutation_rate` each: `speed` shifts
    /// by up to ±0.2, `size` by up to ±0.5, `sense_radius` by up to ±10, and
    /// `color_hue` is replaced by a fresh random hue. `max_age` and
    /// `reproduction_threshold` are inherited unchanged. Perturbed traits are
    /// clamped to their minima afterwards.
    ///
    /// # Arguments
    ///
    /// * `mutation_rate` - Per-trait mutation probability in `[0, 1]`
    /// * `rng` - Random stream the perturbations are drawn from
    pub fn mutate<R: Rng>(&self, mutation_rate: f32, rng: &mut R) -> Self {
        let mut speed = self.speed;
        let mut size = self.size;
        let mut sense_radius = self.sense_radius;
        let mut color_hue = self.color_hue;

        if rng.random::<f32>() < mutation_rate {
            speed += rng.random_range(-0.2..0.2);
        }
        if rng.random::<f32>() < mutation_rate {
            size += rng.random_range(-0.5..0.5);
        }
        if rng.random::<f32>() < mutation_rate {
            sense_radius += rng.random_range(-10.0..10.0);
        }
        if rng.random::<f32>() < mutation_rate {
            color_hue = rng.random_range(0.0..360.0);
        }

        Self {
            speed: speed.max(MIN_SPEED),
            size: size.max(MIN_SIZE),
            sense_radius: sense_radius.max(MIN_SENSE_RADIUS),
            max_age: self.max_age,
            reproduction_threshold: self.reproduction_threshold,
            color_hue,
        }
    }

    /// Bit-exact grouping key over the color hue.
    ///
    /// Hues only enter the population through founder draws and whole-trait
    /// replacement, so equal keys identify one mutation lineage.
    pub fn species_key(&self) -> u32 {
        self.color_hue.to_bits()
    }
}
