// src/noyau/operateur.rs
//
// Les quatre opérateurs binaires de la calculatrice.
// Un seul opérateur “en vol” à la fois : pas de priorité, pas de pile.

use std::fmt;

use num_traits::Float;

use crate::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Ordre du pavé (colonne de droite, de haut en bas).
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operateur::Addition => '+',
            Operateur::Soustraction => '-',
            Operateur::Multiplication => '*',
            Operateur::Division => '/',
        }
    }

    /// Applique l’opérateur à (gauche, droite).
    ///
    /// Seule erreur possible : division par un zéro exact (±0).
    /// Les débordements restent des flottants (inf), comme en C.
    pub fn appliquer<T: Float>(self, gauche: T, droite: T) -> Result<T, ErreurCalc> {
        match self {
            Operateur::Addition => Ok(gauche + droite),
            Operateur::Soustraction => Ok(gauche - droite),
            Operateur::Multiplication => Ok(gauche * droite),
            Operateur::Division => {
                if droite.is_zero() {
                    Err(ErreurCalc::DivisionParZero)
                } else {
                    Ok(gauche / droite)
                }
            }
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurCalc;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Addition),
            '-' => Ok(Operateur::Soustraction),
            '*' => Ok(Operateur::Multiplication),
            '/' => Ok(Operateur::Division),
            _ => Err(ErreurCalc::OperateurInconnu(c)),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
