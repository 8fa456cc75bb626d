use super::suit::Suit;

/// u8 isomorphism
/// each tile is its position in the 136-tile wall:
/// [0,36) pinzu, [36,72) souzu, [72,108) manzu, [108,136) honors.
/// every 4 consecutive indices are the four physical copies of one rank;
/// index % 4 == 0 is the copy slot reserved for red fives.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    /// Physical tiles in a full wall.
    pub const COUNT: u8 = 136;

    /// Display/sort category. Note the index ranges do not follow the
    /// display order: manzu sorts first but lives in [72,108).
    pub fn suit(&self) -> Suit {
        match self.0 {
            0..36 => Suit::Pin,
            36..72 => Suit::Sou,
            72..108 => Suit::Man,
            _ => Suit::Jihai,
        }
    }

    /// 1-based rank within the suit: 1-9 suited, 1-7 honors.
    /// Honors start at index 108 = 27 * 4 and 27 % 9 == 0, so the
    /// single modulus lines up for all four suits.
    pub fn rank(&self) -> u8 {
        (self.0 / 4) % 9 + 1
    }

    /// Which of the four physical copies this is (0-3).
    pub fn copy(&self) -> u8 {
        self.0 % 4
    }

    /// The red fives: copy 0 of rank 5 in the three numbered suits
    /// (indices 16, 52, 88). Honors have no red copy; 1-indexed "rank 5"
    /// there is just haku. This rule is tied to the asset set, not to any
    /// game semantics, so it stays exactly this narrow.
    pub fn is_red(&self) -> bool {
        self.copy() == 0 && self.rank() == 5 && self.suit() != Suit::Jihai
    }

    /// Stable asset file name for this tile. Many-to-one: the three
    /// ordinary copies of a rank share one asset, red fives get their own.
    pub fn asset(&self) -> String {
        match (self.suit(), self.is_red()) {
            (Suit::Pin, true) => String::from("aka1-66-90-l.png"),
            (Suit::Sou, true) => String::from("aka2-66-90-l.png"),
            (Suit::Man, true) => String::from("aka3-66-90-l.png"),
            (suit, _) => format!("{}{}-66-90-l.png", suit.stem(), self.rank()),
        }
    }
}

impl From<u8> for Tile {
    fn from(n: u8) -> Tile {
        assert!(n < Self::COUNT, "Invalid tile index: {}", n);
        Self(n)
    }
}
impl From<Tile> for u8 {
    fn from(t: Tile) -> u8 {
        t.0
    }
}

/// standard notation, with 0 for red fives
/// 16 -> 0p, 17 -> 5p, 88 -> 0m, 135 -> 7z
impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.is_red() {
            true => write!(f, "0{}", self.suit()),
            false => write!(f, "{}{}", self.rank(), self.suit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_boundaries() {
        assert!(Tile::from(0).suit() == Suit::Pin);
        assert!(Tile::from(35).suit() == Suit::Pin);
        assert!(Tile::from(36).suit() == Suit::Sou);
        assert!(Tile::from(71).suit() == Suit::Sou);
        assert!(Tile::from(72).suit() == Suit::Man);
        assert!(Tile::from(107).suit() == Suit::Man);
        assert!(Tile::from(108).suit() == Suit::Jihai);
        assert!(Tile::from(135).suit() == Suit::Jihai);
    }

    #[test]
    fn rank_within_suit() {
        assert!(Tile::from(0).rank() == 1);
        assert!(Tile::from(35).rank() == 9);
        assert!(Tile::from(36).rank() == 1);
        assert!(Tile::from(107).rank() == 9);
        assert!(Tile::from(108).rank() == 1);
        assert!(Tile::from(135).rank() == 7);
    }

    #[test]
    fn red_fives() {
        assert!(Tile::from(16).is_red());
        assert!(Tile::from(52).is_red());
        assert!(Tile::from(88).is_red());
        assert!(!Tile::from(17).is_red());
        assert!(!Tile::from(20).is_red());
        // haku is rank 5 of the honor suit but never red
        assert!(!Tile::from(124).is_red());
    }

    #[test]
    fn red_five_asset_is_distinct() {
        assert!(Tile::from(16).asset() == "aka1-66-90-l.png");
        assert!(Tile::from(52).asset() == "aka2-66-90-l.png");
        assert!(Tile::from(88).asset() == "aka3-66-90-l.png");
        assert!(Tile::from(17).asset() == "pin5-66-90-l.png");
    }

    #[test]
    fn asset_total_and_deterministic() {
        for n in 0..Tile::COUNT {
            let tile = Tile::from(n);
            assert!(!tile.asset().is_empty());
            assert!(tile.asset() == tile.asset());
        }
    }

    #[test]
    fn asset_shared_across_copies() {
        // copies 1-3 of a rank render identically
        assert!(Tile::from(17).asset() == Tile::from(18).asset());
        assert!(Tile::from(18).asset() == Tile::from(19).asset());
        // non-five ranks share across all 4 copies
        assert!(Tile::from(20).asset() == Tile::from(23).asset());
    }

    #[test]
    #[should_panic]
    fn out_of_range_is_loud() {
        let _ = Tile::from(136);
    }

    #[test]
    fn notation() {
        assert!(Tile::from(0).to_string() == "1p");
        assert!(Tile::from(16).to_string() == "0p");
        assert!(Tile::from(17).to_string() == "5p");
        assert!(Tile::from(88).to_string() == "0m");
        assert!(Tile::from(135).to_string() == "7z");
    }
}
