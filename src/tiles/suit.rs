/// The four tile categories. Discriminants are the canonical display order
/// of a sorted hand (manzu, pinzu, souzu, honors), which is unrelated to the
/// order the suits occupy in the 136-index space.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Man = 0,
    Pin = 1,
    Sou = 2,
    Jihai = 3,
}

impl Suit {
    /// Asset file-name stem for this suit's ordinary tiles.
    pub const fn stem(&self) -> &'static str {
        match self {
            Suit::Man => "man",
            Suit::Pin => "pin",
            Suit::Sou => "sou",
            Suit::Jihai => "ji",
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Man,
            1 => Suit::Pin,
            2 => Suit::Sou,
            3 => Suit::Jihai,
            _ => panic!("Invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Man => "m",
                Suit::Pin => "p",
                Suit::Sou => "s",
                Suit::Jihai => "z",
            }
        )
    }
}
