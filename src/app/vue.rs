// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface le dernier jeton
// - Tactile : gros boutons, un pavé 4 colonnes
//
// La vue n'émet que des `Touche` ; tout le routage est dans etat.rs.

use eframe::egui;

use crate::noyau::jetons::Genre;

use super::etat::{AppCalc, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice Tactile");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        // --- Clavier : Enter évalue, Backspace retire le dernier jeton ---
        let (entree, retour) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });
        if entree {
            self.appuyer(Touche::Egal);
        }
        if retour {
            self.appuyer(Touche::EffacerSaisie);
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    // indicateur mémoire à gauche, expression à droite
                    ui.monospace(if self.memoire_active() { "M" } else { " " });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(self.affichage());
                    });
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_tactile")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "MC", Touche::MemoireEffacer);
                self.bouton(ui, "MR", Touche::MemoireRappel);
                self.bouton(ui, "M+", Touche::MemoirePlus);
                self.bouton(ui, "C", Touche::EffacerTout);
                ui.end_row();

                self.bouton(ui, "(", Touche::Ouvrante);
                self.bouton(ui, ")", Touche::Fermante);
                self.bouton(ui, "%", Touche::Pourcent);
                self.bouton(ui, "CE", Touche::EffacerSaisie);
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre(7));
                self.bouton(ui, "8", Touche::Chiffre(8));
                self.bouton(ui, "9", Touche::Chiffre(9));
                self.bouton(ui, "/", Touche::Operateur(Genre::Division));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre(4));
                self.bouton(ui, "5", Touche::Chiffre(5));
                self.bouton(ui, "6", Touche::Chiffre(6));
                self.bouton(ui, "x", Touche::Operateur(Genre::Multiplication));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre(1));
                self.bouton(ui, "2", Touche::Chiffre(2));
                self.bouton(ui, "3", Touche::Chiffre(3));
                self.bouton(ui, "-", Touche::Operateur(Genre::Soustraction));
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre(0));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "+/-", Touche::Signe);
                self.bouton(ui, "+", Touche::Operateur(Genre::Addition));
                ui.end_row();

                self.bouton(ui, "1/x", Touche::Inverse);
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
