use rand::Rng;

/// Number of backdrop palettes to choose from.
pub const BACKDROP_COUNT: u8 = 6;

/// The session's backdrop, picked once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop(u8);

impl Backdrop {
    pub fn random() -> Self {
        Self::pick(&mut rand::thread_rng())
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=BACKDROP_COUNT))
    }

    /// Clamp to the valid range.
    pub fn new(index: u8) -> Self {
        Self(index.clamp(1, BACKDROP_COUNT))
    }

    /// One-based palette index.
    pub fn index(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let index = Backdrop::pick(&mut rng).index();
            assert!((1..=BACKDROP_COUNT).contains(&index));
        }
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Backdrop::new(0).index(), 1);
        assert_eq!(Backdrop::new(9).index(), 6);
        assert_eq!(Backdrop::new(3).index(), 3);
    }
}
