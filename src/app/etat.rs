//! src/app/etat.rs
//!
//! État UI (sans vue) : le moteur + les réglages d’affichage.
//!
//! Rôle : traduire un bouton pressé (`Touche`) en appel direct au moteur.
//! Aucune arithmétique ici : tout passe par noyau::Moteur.

use crate::config::Config;
use crate::noyau::{Chiffre, Moteur, Operateur};

/// Un bouton du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Effacer,
    Egal,
}

impl Touche {
    /// Étiquette affichée sur le bouton.
    pub fn etiquette(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operateur(op) => op.to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::Egal => "=".to_string(),
        }
    }
}

/// Réglages de la vue (tailles de police).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReglagesVue {
    pub taille_police: f32,
    pub taille_boutons: f32,
}

impl Default for ReglagesVue {
    fn default() -> Self {
        Self {
            taille_police: 30.0,
            taille_boutons: 20.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,
    pub reglages: ReglagesVue,
}

impl AppCalc {
    pub fn depuis_config(config: &Config) -> Self {
        Self {
            moteur: Moteur::new(config.options_moteur()),
            reglages: ReglagesVue {
                taille_police: config.affichage.taille_police,
                taille_boutons: config.affichage.taille_boutons,
            },
        }
    }

    /// Un clic = un appel au moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.moteur.saisir_chiffre(c),
            Touche::Operateur(op) => self.moteur.choisir_operateur(op),
            Touche::Effacer => self.moteur.effacer(),
            Touche::Egal => self.moteur.egal(),
        }
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }
}
