use super::deck::Deck;
use crate::HAND_SIZE;
use crate::tiles::Tile;

/// Canonical display order: stable sort by suit category (man, pin, sou,
/// honors), then by raw wall index. Within a rank the four copies stay
/// adjacent in index order, which puts a red five ahead of its siblings.
/// Pure: the input is untouched.
pub fn sorted(hand: &[Tile]) -> Vec<Tile> {
    let mut hand = hand.to_vec();
    hand.sort_by_key(|t| (t.suit(), u8::from(*t)));
    hand
}

/// One dealt round: a dora indicator plus a sorted 13-tile starting hand,
/// drawn without replacement from a single shuffled wall. Disjointness is
/// by construction. Request-scoped; nothing survives the response.
#[derive(Debug, Clone)]
pub struct Deal {
    indicator: Tile,
    hand: Vec<Tile>,
}

impl Deal {
    pub fn new() -> Self {
        let mut deck = Deck::new();
        deck.shuffle();
        let indicator = deck.flip();
        let hand = deck.take(HAND_SIZE).collect::<Vec<_>>();
        let hand = sorted(&hand);
        Self { indicator, hand }
    }

    pub fn indicator(&self) -> Tile {
        self.indicator
    }
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }
}

impl Default for Deal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "dora {} hand", self.indicator)?;
        for tile in &self.hand {
            write!(f, " {}", tile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_size() {
        assert!(Deal::new().hand().len() == HAND_SIZE);
    }

    #[test]
    fn no_replacement() {
        for _ in 0..100 {
            let deal = Deal::new();
            let mut seen = std::collections::HashSet::new();
            assert!(seen.insert(deal.indicator()));
            for tile in deal.hand() {
                assert!(seen.insert(*tile));
            }
        }
    }

    #[test]
    fn hand_is_sorted() {
        for _ in 0..100 {
            let deal = Deal::new();
            let again = sorted(deal.hand());
            assert!(deal.hand() == again.as_slice());
        }
    }

    #[test]
    fn sort_category_order() {
        // one tile per category: man first, then pin, sou, honors
        let hand = [0, 36, 72, 108].map(Tile::from);
        let expect = [72, 0, 36, 108].map(Tile::from);
        assert!(sorted(&hand) == expect.to_vec());
    }

    #[test]
    fn sort_is_idempotent() {
        let hand = [135, 0, 88, 52, 16, 71, 107].map(Tile::from);
        let once = sorted(&hand);
        let twice = sorted(&once);
        assert!(once == twice);
    }

    #[test]
    fn sort_preserves_multiset() {
        let hand = [107, 0, 36, 36, 135, 16].map(Tile::from);
        let output = sorted(&hand);
        let mut input = hand.to_vec();
        let mut output = output.clone();
        input.sort();
        output.sort();
        assert!(input == output);
    }

    #[test]
    fn sort_respects_category_boundaries() {
        for _ in 0..100 {
            let deal = Deal::new();
            let suits = deal.hand().iter().map(|t| t.suit()).collect::<Vec<_>>();
            let mut resorted = suits.clone();
            resorted.sort();
            assert!(suits == resorted);
        }
    }

    #[test]
    fn indicator_is_roughly_uniform() {
        const TRIALS: usize = 50_000;
        let mut counts = [0usize; Tile::COUNT as usize];
        for _ in 0..TRIALS {
            counts[u8::from(Deal::new().indicator()) as usize] += 1;
        }
        let mean = TRIALS / Tile::COUNT as usize;
        for count in counts {
            assert!(count > mean / 2);
            assert!(count < mean * 2);
        }
    }
}
