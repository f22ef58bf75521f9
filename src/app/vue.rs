// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : lecture seule, aligné à droite, grande police
// - Pavé 4×4 :  7 8 9 +  /  4 5 6 -  /  1 2 3 *  /  C 0 = /
// - Souris / tactile seulement : pas de clavier

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::{Chiffre, EtatMoteur, Operateur};

/// Taille minimale d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [60.0, 60.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        if let Some(touche) = self.ui_pave(ui) {
            self.appuyer(touche);
            tracing::trace!(
                ?touche,
                etat = ?self.moteur.etat(),
                saisie = self.moteur.saisie(),
                premier = self.moteur.premier_operande(),
                attente = self.moteur.attente_second_operande(),
                "bouton"
            );
        }
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.moteur.etat() == EtatMoteur::Erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };
        // Rappel discret de l’opérateur en attente, à gauche de l’écran.
        let en_attente = self
            .moteur
            .operateur_en_attente()
            .map(|op| op.to_string())
            .unwrap_or_default();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.weak(en_attente);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(self.affichage())
                                .size(self.reglages.taille_police)
                                .color(couleur)
                                .monospace(),
                        );
                    });
                });
            });
    }

    /// Dessine le pavé ; renvoie la touche cliquée pendant cette frame.
    fn ui_pave(&self, ui: &mut egui::Ui) -> Option<Touche> {
        let mut pressee = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in disposition() {
                    for touche in rangee {
                        if self.bouton(ui, touche) {
                            pressee = Some(touche);
                        }
                    }
                    ui.end_row();
                }
            });

        pressee
    }

    fn bouton(&self, ui: &mut egui::Ui, touche: Touche) -> bool {
        let texte = egui::RichText::new(touche.etiquette()).size(self.reglages.taille_boutons);
        ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte))
            .clicked()
    }
}

/// Disposition du pavé, rangée par rangée.
fn disposition() -> [[Touche; 4]; 4] {
    let c = |v: u8| Touche::Chiffre(Chiffre::depuis_valeur(v).unwrap_or(Chiffre::TOUS[0]));
    let [plus, moins, fois, divise] = Operateur::TOUS.map(Touche::Operateur);

    [
        [c(7), c(8), c(9), plus],
        [c(4), c(5), c(6), moins],
        [c(1), c(2), c(3), fois],
        [Touche::Effacer, c(0), Touche::Egal, divise],
    ]
}
