//! src/erreur.rs
//!
//! Erreurs typées de la calculatrice (noyau + configuration).
//!
//! Contrat :
//! - Le noyau ne remonte JAMAIS la division par zéro jusqu’à l’UI : elle
//!   devient le marqueur "Error" à l’affichage (voir noyau::moteur).
//! - Les erreurs de configuration sont journalisées puis ignorées (valeurs par défaut).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErreurCalc {
    /// Division dont le second opérande vaut zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Caractère hors '0'..='9' présenté comme chiffre.
    #[error("chiffre invalide: '{0}'")]
    ChiffreInvalide(char),

    /// Caractère hors {+, -, *, /} présenté comme opérateur.
    #[error("opérateur inconnu: '{0}'")]
    OperateurInconnu(char),

    /// Fichier de configuration illisible (droits, encodage…).
    #[error("configuration illisible ({}): {source}", chemin.display())]
    ConfigLecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fichier de configuration lu mais TOML invalide.
    #[error("configuration invalide: {0}")]
    ConfigFormat(#[from] toml::de::Error),
}

pub type Resultat<T> = std::result::Result<T, ErreurCalc>;
