use crate::tiles::Tile;
use rand::seq::SliceRandom;

/// A full 136-tile wall. Built in index order, permuted once with an
/// unbiased Fisher-Yates shuffle, then consumed front to back via ::flip().
#[derive(Debug, Clone)]
pub struct Deck(Vec<Tile>);

impl Deck {
    pub fn new() -> Self {
        Self((0..Tile::COUNT).map(Tile::from).collect())
    }

    pub fn shuffle(&mut self) {
        self.0.shuffle(&mut rand::rng());
    }

    /// reveal the next tile in permuted order
    pub fn flip(&mut self) -> Tile {
        assert!(!self.0.is_empty());
        self.0.remove(0)
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Deck {
    type Item = Tile;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() > 0 {
            Some(self.flip())
        } else {
            None
        }
    }
}
