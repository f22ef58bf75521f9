//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - chiffre.rs   : chiffre validé '0'..='9'
//! - operateur.rs : + - * / et leur application
//! - nombre.rs    : lecture permissive + affichage façon %g
//! - moteur.rs    : machine à états (saisie, opérateur en attente, "=")

pub mod chiffre;
pub mod moteur;
pub mod nombre;
pub mod operateur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use chiffre::Chiffre;
pub use moteur::{EtatMoteur, Moteur, OptionsMoteur};
pub use operateur::Operateur;
