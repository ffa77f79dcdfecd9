//! Block fill colors. Colors only tell neighbouring blocks apart; they carry
//! no meaning, so any source will do as long as it is cheap.

use bevy::color::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ColorSource: Send + Sync + 'static {
    fn next_color(&mut self) -> Color;
}

/// Uniform colors over the whole sRGB cube.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of colors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::srgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Every block gets the same color.
pub struct FixedColor(pub Color);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> Color {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat_their_sequence() {
        let mut a = RandomColors::seeded(7);
        let mut b = RandomColors::seeded(7);

        for _ in 0..16 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }

    #[test]
    fn random_colors_stay_in_srgb_range() {
        let mut source = RandomColors::seeded(1);
        for _ in 0..64 {
            let srgba = source.next_color().to_srgba();
            for channel in [srgba.red, srgba.green, srgba.blue] {
                assert!((0.0..=1.0).contains(&channel));
            }
            assert_eq!(srgba.alpha, 1.0);
        }
    }
}
