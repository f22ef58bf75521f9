// src/app.rs
//
// Module App (racine)
// -------------------
// - Déclare les sous-modules (etat.rs + vue.rs)
// - Ré-exporte AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournit l’impl eframe::App (compatible NATIF + WEB)
//
// Pas de raccourcis clavier : la calculatrice se pilote aux boutons.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
