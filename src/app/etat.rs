//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la Calculatrice du noyau + le message d'erreur courant,
//! et traduire chaque touche du pavé en exactement une commande du noyau.
//! Aucune logique d'affichage ici.

use crate::noyau::jetons::Genre;
use crate::noyau::Calculatrice;

/// Une touche du pavé. La vue ne fait qu'émettre des `Touche` ;
/// le routage vers le noyau se fait dans `appuyer`.
#[derive(Clone, Copy, Debug)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Genre),
    Ouvrante,
    Fermante,
    Signe,
    Inverse,
    Pourcent,
    MemoirePlus,
    MemoireRappel,
    MemoireEffacer,
    EffacerSaisie,
    EffacerTout,
    Egal,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    calc: Calculatrice,
    pub erreur: String,
}

impl AppCalc {
    /// Route une touche vers la commande du noyau correspondante.
    ///
    /// Toute touche efface le message d'erreur précédent ; seule `Egal`
    /// peut en produire un nouveau (le noyau laisse alors la saisie
    /// intacte, l'utilisateur peut corriger).
    pub fn appuyer(&mut self, touche: Touche) {
        self.erreur.clear();

        match touche {
            Touche::Chiffre(n) => self.calc.chiffre(n),
            Touche::Point => self.calc.point_decimal(),
            Touche::Operateur(genre) => self.calc.operateur(genre),
            Touche::Ouvrante => self.calc.parenthese_ouvrante(),
            Touche::Fermante => self.calc.parenthese_fermante(),
            Touche::Signe => self.calc.basculer_signe(),
            Touche::Inverse => self.calc.inverse(),
            Touche::Pourcent => self.calc.pourcent(),
            Touche::MemoirePlus => self.calc.memoire_enregistrer(),
            Touche::MemoireRappel => self.calc.memoire_rappeler(),
            Touche::MemoireEffacer => self.calc.memoire_effacer(),
            Touche::EffacerSaisie => self.calc.effacer_saisie(),
            Touche::EffacerTout => self.calc.effacer_tout(),
            Touche::Egal => {
                if let Err(e) = self.calc.calculer() {
                    self.erreur = e.to_string();
                }
            }
        }
    }

    /// Texte de l'expression en cours (affiché tel quel par la vue).
    pub fn affichage(&self) -> String {
        self.calc.affichage()
    }

    /// Indicateur « M » : vrai tant que la mémoire est non nulle.
    pub fn memoire_active(&self) -> bool {
        use num_traits::Zero;
        !self.calc.memoire().is_zero()
    }
}
