// src/noyau/chiffre.rs

use std::fmt;

use crate::erreur::ErreurCalc;

/// Un chiffre décimal validé ('0'..='9').
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(char);

impl Chiffre {
    /// Les dix chiffres, dans l’ordre.
    pub const TOUS: [Chiffre; 10] = [
        Chiffre('0'),
        Chiffre('1'),
        Chiffre('2'),
        Chiffre('3'),
        Chiffre('4'),
        Chiffre('5'),
        Chiffre('6'),
        Chiffre('7'),
        Chiffre('8'),
        Chiffre('9'),
    ];

    pub fn as_char(self) -> char {
        self.0
    }

    /// Chiffre depuis sa valeur (0..=9). `None` au-delà.
    pub fn depuis_valeur(v: u8) -> Option<Self> {
        Self::TOUS.get(usize::from(v)).copied()
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurCalc;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() {
            Ok(Chiffre(c))
        } else {
            Err(ErreurCalc::ChiffreInvalide(c))
        }
    }
}

impl fmt::Display for Chiffre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
