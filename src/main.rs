// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// - NATIF (Linux/Windows/macOS) : clap + config.toml + tracing, puis eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas>, configuration par défaut
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod erreur;
mod noyau;

use app::AppCalc;
use config::Config;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Créateur commun natif + web : l’état de l’app part de la configuration retenue.
fn createur(config: &Config) -> eframe::AppCreator<'static> {
    let app = AppCalc::depuis_config(config);
    Box::new(move |cc| {
        tracing::debug!(zoom = cc.egui_ctx.zoom_factor(), "contexte egui prêt");
        Ok(Box::new(app))
    })
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::config::NIVEAU_JOURNAL_DEFAUT;

    /// Calculatrice de bureau : chiffres, + - * /, C et =.
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Cli {
        /// Fichier de configuration (défaut : <config>/calculatrice/config.toml)
        #[arg(long, value_name = "CHEMIN")]
        pub config: Option<PathBuf>,

        /// Chiffres significatifs des résultats (écrase la configuration)
        #[arg(long, value_name = "N")]
        pub precision: Option<usize>,
    }

    /// Filtre retenu : RUST_LOG s’il est valide, sinon le niveau de la config, sinon "info".
    pub fn directive_journal(rust_log: Option<&str>, niveau: &str) -> String {
        [rust_log, Some(niveau)]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|d| !d.is_empty() && EnvFilter::try_new(d).is_ok())
            .unwrap_or(NIVEAU_JOURNAL_DEFAUT)
            .to_string()
    }

    pub fn init_journal(niveau: &str) {
        let rust_log = std::env::var("RUST_LOG").ok();
        let directive = directive_journal(rust_log.as_deref(), niveau);
        let filtre =
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(NIVEAU_JOURNAL_DEFAUT));

        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let cli = natif::Cli::parse();

    // La config fixe le niveau du journal : on la lit avant, on signale l’erreur après.
    let chargement = Config::charger(cli.config.as_deref(), config::chemin_par_defaut());
    natif::init_journal(config::niveau_journal(&chargement));

    let mut config = Config::ou_defauts(chargement);
    config.appliquer_cli(cli.precision);

    tracing::info!(
        precision = config.affichage.precision,
        compat = config.compat.conserver_operateur_apres_effacement,
        "démarrage"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([config.fenetre.largeur, config.fenetre.hauteur])
            .with_min_inner_size([280.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, createur(&config))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{createur, Config, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Démarrage au chargement de la page : titre d’onglet, canvas, puis eframe.
    /// Pas de fichier de configuration côté web : valeurs par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = canvas_calculatrice()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                createur(&Config::default()),
            )
            .await
    }

    /// Récupère le <canvas> de la calculatrice (et pose le titre au passage).
    fn canvas_calculatrice() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;
        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas de la calculatrice introuvable"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("l’élément de la calculatrice n’est pas un <canvas>"))
    }
}
