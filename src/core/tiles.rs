//! The tile bag and rack drawing

use super::letter::{ALPHABET_SIZE, Letter};
use super::rack::{RACK_SIZE, Rack};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Tiles per letter in a standard bag (no blanks), indexed A through Z
const TILE_COUNTS: [usize; ALPHABET_SIZE] = [
    9,  // A
    2,  // B
    2,  // C
    4,  // D
    12, // E
    2,  // F
    3,  // G
    2,  // H
    9,  // I
    1,  // J
    1,  // K
    4,  // L
    2,  // M
    6,  // N
    8,  // O
    2,  // P
    1,  // Q
    6,  // R
    4,  // S
    6,  // T
    4,  // U
    2,  // V
    2,  // W
    1,  // X
    2,  // Y
    1,  // Z
];

/// A full bag of tiles following the standard letter distribution
///
/// Bags are never depleted across racks: each draw starts from a full bag.
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<Letter>,
}

impl TileBag {
    /// The standard 98-tile bag
    #[must_use]
    pub fn standard() -> Self {
        let tiles = Letter::all()
            .flat_map(|letter| std::iter::repeat_n(letter, TILE_COUNTS[letter.index()]))
            .collect();
        Self { tiles }
    }

    /// Number of tiles in the bag
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag has no tiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// How many copies of `letter` the bag holds
    #[must_use]
    pub const fn count(letter: Letter) -> usize {
        TILE_COUNTS[letter.index()]
    }

    /// Draw a rack of distinct bag positions, uniformly without replacement
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Rack {
        let mut tiles = [Letter::from_index(0); RACK_SIZE];
        for (slot, &letter) in tiles
            .iter_mut()
            .zip(self.tiles.choose_multiple(rng, RACK_SIZE))
        {
            *slot = letter;
        }
        Rack::from_tiles(tiles)
    }
}

/// Draw a random rack using the thread-local RNG
#[must_use]
pub fn assign_tiles() -> Rack {
    assign_tiles_with(&mut rand::rng())
}

/// Draw a random rack from a freshly filled bag using `rng`
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use scrabble_rack::core::assign_tiles_with;
///
/// let first = assign_tiles_with(&mut StdRng::seed_from_u64(7));
/// let second = assign_tiles_with(&mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn assign_tiles_with<R: Rng + ?Sized>(rng: &mut R) -> Rack {
    let rack = TileBag::standard().draw(rng);
    tracing::debug!(%rack, "drew rack");
    rack
}
