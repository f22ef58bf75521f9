//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : un opérande, un opérateur en attente, un affichage.
//!
//! Contrats :
//! - `affichage` n’est jamais vide ("0" au départ).
//! - Un seul opérateur “en vol” (pas de pile, pas de priorité).
//! - Un second opérateur pressé avant tout chiffre est IGNORÉ (pas remplacé).
//! - Division par zéro : affichage "Error", rien d’autre ne bouge
//!   (opérateur conservé => un nouvel "=" redonne "Error").
//! - Lecture des opérandes permissive : texte illisible => 0.

use tracing::{debug, warn};

use super::chiffre::Chiffre;
use super::nombre::{formater_nombre, lire_nombre, PRECISION_DEFAUT, PRECISION_MAX};
use super::operateur::Operateur;
use crate::erreur::ErreurCalc;

/// Texte affiché après une division par zéro.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Réglages du moteur (issus de la configuration).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionsMoteur {
    /// Chiffres significatifs des résultats.
    pub precision: usize,
    /// Compatibilité : C n’efface pas l’opérateur en attente.
    pub conserver_operateur_apres_effacement: bool,
}

impl Default for OptionsMoteur {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            conserver_operateur_apres_effacement: false,
        }
    }
}

/// État observable de la machine à états.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatMoteur {
    /// Rien en cours : départ, après C, ou résultat affiché.
    Repos,
    SaisiePremier,
    OperateurEnAttente,
    SaisieSecond,
    /// Division par zéro affichée ; on n’en sort que par C (ou un nouveau nombre).
    Erreur,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    saisie: String,
    premier_operande: f64,
    operateur_en_attente: Option<Operateur>,
    attente_second_operande: bool,
    en_erreur: bool,
    options: OptionsMoteur,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new(OptionsMoteur::default())
    }
}

impl Moteur {
    pub fn new(options: OptionsMoteur) -> Self {
        Self {
            affichage: "0".to_string(),
            saisie: String::new(),
            premier_operande: 0.0,
            operateur_en_attente: None,
            attente_second_operande: false,
            en_erreur: false,
            options: OptionsMoteur {
                precision: options.precision.clamp(1, PRECISION_MAX),
                ..options
            },
        }
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn saisie(&self) -> &str {
        &self.saisie
    }

    pub fn premier_operande(&self) -> f64 {
        self.premier_operande
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    pub fn attente_second_operande(&self) -> bool {
        self.attente_second_operande
    }

    #[cfg(test)]
    pub fn options(&self) -> OptionsMoteur {
        self.options
    }

    pub fn etat(&self) -> EtatMoteur {
        if self.en_erreur {
            return EtatMoteur::Erreur;
        }
        match (self.operateur_en_attente, self.attente_second_operande) {
            (Some(_), true) => EtatMoteur::OperateurEnAttente,
            (Some(_), false) => EtatMoteur::SaisieSecond,
            (None, true) => EtatMoteur::Repos,
            (None, false) if self.saisie.is_empty() => EtatMoteur::Repos,
            (None, false) => EtatMoteur::SaisiePremier,
        }
    }

    /* ------------------------ Actions (une par bouton) ------------------------ */

    /// Chiffre : nouvel opérande si on attendait, sinon ajout ("0" initial remplacé).
    pub fn saisir_chiffre(&mut self, chiffre: Chiffre) {
        if self.attente_second_operande {
            self.affichage.clear();
            self.attente_second_operande = false;
            self.en_erreur = false;
        }

        if self.affichage == "0" {
            self.affichage.clear();
        }
        self.affichage.push(chiffre.as_char());
        self.saisie.clone_from(&self.affichage);

        debug!(%chiffre, affichage = %self.affichage, "chiffre saisi");
    }

    /// Opérateur : pris en compte seulement s’il suit une saisie.
    pub fn choisir_operateur(&mut self, operateur: Operateur) {
        if self.attente_second_operande {
            debug!(%operateur, "opérateur ignoré (aucun chiffre depuis le précédent)");
            return;
        }

        self.premier_operande = lire_nombre(&self.saisie);
        self.operateur_en_attente = Some(operateur);
        self.attente_second_operande = true;

        debug!(
            %operateur,
            premier = self.premier_operande,
            "opérateur en attente"
        );
    }

    /// C : remise à zéro (opérateur compris, sauf mode compatibilité).
    pub fn effacer(&mut self) {
        self.affichage = "0".to_string();
        self.saisie.clear();
        self.premier_operande = 0.0;
        self.attente_second_operande = false;
        self.en_erreur = false;
        if !self.options.conserver_operateur_apres_effacement {
            self.operateur_en_attente = None;
        }

        debug!(
            operateur = ?self.operateur_en_attente,
            "effacement"
        );
    }

    /// "=" : applique l’opérateur en attente à (premier, saisie courante).
    pub fn egal(&mut self) {
        let second = lire_nombre(&self.saisie);

        let Some(operateur) = self.operateur_en_attente else {
            // Rien en attente : l’affichage reste tel quel.
            self.attente_second_operande = true;
            debug!(affichage = %self.affichage, "égal sans opérateur");
            return;
        };

        match operateur.appliquer(self.premier_operande, second) {
            Ok(resultat) => {
                self.premier_operande = resultat;
                self.affichage = formater_nombre(resultat, self.options.precision);
                self.saisie.clone_from(&self.affichage);
                self.attente_second_operande = true;
                self.operateur_en_attente = None;
                self.en_erreur = false;

                debug!(%operateur, second, affichage = %self.affichage, "résultat");
            }
            Err(ErreurCalc::DivisionParZero) => {
                warn!(premier = self.premier_operande, "division par zéro");
                self.affichage = MARQUEUR_ERREUR.to_string();
                self.en_erreur = true;
            }
            Err(e) => {
                // appliquer() ne produit que DivisionParZero ; on reste sur le marqueur.
                warn!(%e, "erreur de calcul inattendue");
                self.affichage = MARQUEUR_ERREUR.to_string();
                self.en_erreur = true;
            }
        }
    }
}
