//! src/config.rs
//!
//! Configuration (config.toml) : fenêtre, affichage, compatibilité, journal.
//!
//! Contrats :
//! - Chaque section et chaque clé est optionnelle (valeurs par défaut).
//! - Fichier par défaut absent => défauts, sans bruit.
//! - Fichier illisible / TOML invalide => Err (l’appelant journalise et repart des défauts).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::erreur::{ErreurCalc, Resultat};
use crate::noyau::nombre::{PRECISION_DEFAUT, PRECISION_MAX};
use crate::noyau::OptionsMoteur;

/// Nom du dossier sous le répertoire de configuration de l’utilisateur.
pub const DOSSIER_APP: &str = "calculatrice";

/// Nom du fichier de configuration.
pub const FICHIER_CONFIG: &str = "config.toml";

/// Filtre du journal quand rien d’autre n’est utilisable.
pub const NIVEAU_JOURNAL_DEFAUT: &str = "info";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub fenetre: ConfigFenetre,
    pub affichage: ConfigAffichage,
    pub compat: ConfigCompat,
    pub journal: ConfigJournal,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for ConfigFenetre {
    fn default() -> Self {
        Self {
            largeur: 300.0,
            hauteur: 380.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigAffichage {
    /// Taille du texte de l’écran.
    pub taille_police: f32,
    /// Taille du texte des boutons.
    pub taille_boutons: f32,
    /// Chiffres significatifs des résultats (1..=17).
    pub precision: usize,
}

impl Default for ConfigAffichage {
    fn default() -> Self {
        Self {
            taille_police: 30.0,
            taille_boutons: 20.0,
            precision: PRECISION_DEFAUT,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigCompat {
    /// C conserve l’opérateur en attente (comportement historique).
    pub conserver_operateur_apres_effacement: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigJournal {
    /// Filtre tracing (syntaxe EnvFilter), écrasé par RUST_LOG.
    pub niveau: String,
}

impl Default for ConfigJournal {
    fn default() -> Self {
        Self {
            niveau: NIVEAU_JOURNAL_DEFAUT.to_string(),
        }
    }
}

impl Config {
    /// Parse un texte TOML (précision bornée au passage).
    pub fn depuis_toml(texte: &str) -> Resultat<Self> {
        let mut config: Config = toml::from_str(texte)?;
        config.affichage.precision = config.affichage.precision.clamp(1, PRECISION_MAX);
        Ok(config)
    }

    /// Lit un fichier de configuration explicite (doit exister).
    pub fn depuis_fichier(chemin: &Path) -> Resultat<Self> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurCalc::ConfigLecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    /// Charge la configuration :
    /// - `explicite` fourni => ce fichier, erreur s’il manque
    /// - sinon le fichier par défaut s’il existe, défauts sinon
    pub fn charger(explicite: Option<&Path>, defaut: Option<PathBuf>) -> Resultat<Self> {
        if let Some(chemin) = explicite {
            return Self::depuis_fichier(chemin);
        }
        match defaut {
            Some(chemin) if chemin.is_file() => Self::depuis_fichier(&chemin),
            _ => Ok(Self::default()),
        }
    }

    /// Config chargée, ou défauts si le chargement a échoué (erreur journalisée).
    pub fn ou_defauts(chargement: Resultat<Self>) -> Self {
        chargement.unwrap_or_else(|e| {
            warn!(%e, "configuration ignorée, valeurs par défaut");
            Self::default()
        })
    }

    /// Options de ligne de commande : `--precision` écrase `affichage.precision` (bornée).
    pub fn appliquer_cli(&mut self, precision: Option<usize>) {
        if let Some(p) = precision {
            self.affichage.precision = p.clamp(1, PRECISION_MAX);
        }
    }

    /// Options du moteur dérivées de la configuration.
    pub fn options_moteur(&self) -> OptionsMoteur {
        OptionsMoteur {
            precision: self.affichage.precision,
            conserver_operateur_apres_effacement: self.compat.conserver_operateur_apres_effacement,
        }
    }
}

/// Niveau du journal avant même de savoir si la config est valide.
pub fn niveau_journal(chargement: &Resultat<Config>) -> &str {
    match chargement {
        Ok(c) => &c.journal.niveau,
        Err(_) => NIVEAU_JOURNAL_DEFAUT,
    }
}

/// Chemin par défaut : <config_dir>/calculatrice/config.toml (natif seulement).
#[cfg(not(target_arch = "wasm32"))]
pub fn chemin_par_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(FICHIER_CONFIG))
}
