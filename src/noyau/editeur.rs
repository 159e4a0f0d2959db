// src/noyau/editeur.rs
//
// Machine à états d'édition : chaque commande (chiffre, opérateur,
// parenthèse, mémoire, effacement, transformations) agit sur la QUEUE de
// la séquence de jetons — ajout, remplacement ou retrait du dernier jeton,
// jamais de mutation au milieu.
//
// Invariants :
// - la séquence n'est jamais vide (re-semée avec un Nombre zéro) ;
// - `equilibre` = nombre de parenthèses ouvertes non refermées ;
// - aucune commande n'échoue : une commande invalide est absorbée en no-op.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::jetons::{Genre, Jeton};

/// Éditeur incrémental d'expression + case mémoire.
///
/// L'évaluation (`calculer`) vit dans eval.rs ; ici, uniquement l'édition.
#[derive(Clone, Debug)]
pub struct Calculatrice {
    pub(super) jetons: Vec<Jeton>,
    pub(super) equilibre: u32,
    memoire: BigRational,
}

impl Default for Calculatrice {
    fn default() -> Self {
        let mut calc = Self {
            jetons: Vec::new(),
            equilibre: 0,
            memoire: BigRational::zero(),
        };
        calc.reinitialiser();
        calc
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Séquence remise à un unique Nombre zéro. La mémoire est conservée.
    fn reinitialiser(&mut self) {
        self.jetons.clear();
        self.equilibre = 0;
        self.jetons.push(Jeton::nombre(BigRational::zero()));
    }

    fn genre_queue(&self) -> Option<Genre> {
        self.jetons.last().map(Jeton::genre)
    }

    /* ------------------------ Saisie numérique ------------------------ */

    /// Chiffre 0..=9.
    ///
    /// Un Nombre scellé en queue est remplacé par un zéro frais (nouvel
    /// opérande) ; un Nombre en cours de saisie accumule le chiffre en
    /// partie entière (`v*10 + n`) ou décimale (`v += n/facteur`) ; après
    /// un opérateur ou une parenthèse ouvrante, un nouveau Nombre démarre.
    pub fn chiffre(&mut self, n: u8) {
        if n > 9 {
            return;
        }

        if self.jetons.last().is_some_and(|j| j.est_nombre() && j.scelle) {
            self.jetons.pop();
            self.jetons.push(Jeton::nombre(BigRational::zero()));
        }

        match self.jetons.last_mut() {
            Some(j) if j.est_nombre() => {
                if j.facteur_decimal.is_zero() {
                    j.valeur *= BigRational::from_integer(BigInt::from(10));
                    j.valeur += BigRational::from_integer(BigInt::from(n));
                } else {
                    j.valeur += BigRational::new(BigInt::from(n), j.facteur_decimal.clone());
                    j.facteur_decimal *= 10u32;
                }
            }
            _ => self
                .jetons
                .push(Jeton::nombre(BigRational::from_integer(BigInt::from(n)))),
        }
    }

    /// Point décimal : arme le facteur décimal (10) du Nombre en queue,
    /// en créant un zéro frais si la queue n'est pas un Nombre. Idempotent.
    pub fn point_decimal(&mut self) {
        if !self.jetons.last().is_some_and(Jeton::est_nombre) {
            self.jetons.push(Jeton::nombre(BigRational::zero()));
        }

        if let Some(j) = self.jetons.last_mut() {
            if j.facteur_decimal.is_zero() {
                j.facteur_decimal = BigInt::from(10);
            }
        }
    }

    /* ------------------------ Opérateurs ------------------------ */

    /// Opérateur binaire (Addition, Soustraction, Multiplication, Division).
    ///
    /// Opérateur sur opérateur : le dernier tapé gagne. Sur un Nombre : le
    /// scelle puis s'ajoute. Juste après une parenthèse ouvrante : ignoré.
    pub fn operateur(&mut self, genre: Genre) {
        if !genre.est_operateur() {
            return;
        }

        match self.genre_queue() {
            Some(g) if g.est_operateur() => {
                self.jetons.pop();
            }
            Some(Genre::Nombre) => {
                if let Some(j) = self.jetons.last_mut() {
                    j.scelle = true;
                }
            }
            Some(Genre::ParentheseOuvrante) => return,
            _ => {}
        }

        self.jetons.push(Jeton::operation(genre));
    }

    /* ------------------------ Transformations d'opérande ------------------------ */

    /// +/- : change le signe du Nombre en queue.
    pub fn basculer_signe(&mut self) {
        if let Some(j) = self.jetons.last_mut() {
            if j.est_nombre() {
                j.valeur = -j.valeur.clone();
            }
        }
    }

    /// 1/x : inverse le Nombre en queue. L'inverse de zéro reste zéro.
    pub fn inverse(&mut self) {
        if let Some(j) = self.jetons.last_mut() {
            if j.est_nombre() && !j.valeur.is_zero() {
                j.valeur = j.valeur.recip();
            }
        }
    }

    /// % : divise le Nombre en queue par 100.
    pub fn pourcent(&mut self) {
        if let Some(j) = self.jetons.last_mut() {
            if j.est_nombre() {
                j.valeur /= BigRational::from_integer(BigInt::from(100));
            }
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    /// M+ : copie la valeur du Nombre en queue dans la mémoire.
    pub fn memoire_enregistrer(&mut self) {
        if let Some(j) = self.jetons.last() {
            if j.est_nombre() {
                self.memoire = j.valeur.clone();
            }
        }
    }

    /// MC : remet la mémoire à zéro.
    pub fn memoire_effacer(&mut self) {
        self.memoire = BigRational::zero();
    }

    /// MR : si la mémoire est non nulle, remplace le Nombre en queue (ou
    /// s'ajoute) par un Nombre scellé portant la valeur mémorisée.
    /// Rappeler une mémoire vide ne fait rien.
    pub fn memoire_rappeler(&mut self) {
        if self.memoire.is_zero() {
            return;
        }

        if self.jetons.last().is_some_and(Jeton::est_nombre) {
            self.jetons.pop();
        }

        self.jetons.push(Jeton::nombre_scelle(self.memoire.clone()));
    }

    pub fn memoire(&self) -> &BigRational {
        &self.memoire
    }

    /* ------------------------ Effacements ------------------------ */

    /// CE : efface le dernier jeton.
    ///
    /// Opérateur : retiré. Nombre : retiré s'il vaut zéro et n'est pas seul,
    /// sinon remplacé par un zéro frais. Parenthèse : retirée en réajustant
    /// `equilibre`.
    pub fn effacer_saisie(&mut self) {
        match self.genre_queue() {
            Some(g) if g.est_operateur() => {
                self.jetons.pop();
            }
            Some(Genre::Nombre) => {
                let nul = self.jetons.last().is_some_and(|j| j.valeur.is_zero());
                self.jetons.pop();
                if !(nul && !self.jetons.is_empty()) {
                    self.jetons.push(Jeton::nombre(BigRational::zero()));
                }
            }
            Some(Genre::ParentheseOuvrante) => {
                self.equilibre = self.equilibre.saturating_sub(1);
                self.jetons.pop();
            }
            Some(Genre::ParentheseFermante) => {
                self.equilibre += 1;
                self.jetons.pop();
            }
            _ => {}
        }

        if self.jetons.is_empty() {
            self.jetons.push(Jeton::nombre(BigRational::zero()));
        }
    }

    /// C : remise à zéro de la séquence et des parenthèses (pas la mémoire).
    pub fn effacer_tout(&mut self) {
        self.reinitialiser();
    }

    /* ------------------------ Parenthèses ------------------------ */

    /// ( : un Nombre en cours de saisie est jeté au profit du groupe ;
    /// après un opérateur ou une autre ouvrante, s'ajoute ; sinon ignoré.
    pub fn parenthese_ouvrante(&mut self) {
        let Some((genre, scelle)) = self.jetons.last().map(|j| (j.genre(), j.scelle)) else {
            return;
        };

        if genre == Genre::Nombre && !scelle {
            self.jetons.pop();
            self.ajouter_ouvrante();
        } else if genre.est_operateur() || genre == Genre::ParentheseOuvrante {
            self.ajouter_ouvrante();
        }
    }

    /// ) : un opérateur pendant devant la fermante est jeté ; rien à fermer
    /// (séquence d'un seul jeton, ou ouvrante en queue) est ignoré ; un
    /// Nombre en queue est scellé ; la fermante ne s'ajoute que tant qu'il
    /// reste une ouvrante à apparier.
    pub fn parenthese_fermante(&mut self) {
        let Some(genre) = self.genre_queue() else {
            return;
        };

        if genre.est_operateur() && self.equilibre > 0 {
            self.jetons.pop();
        } else if self.jetons.len() <= 1 || genre == Genre::ParentheseOuvrante {
            return;
        }

        if let Some(j) = self.jetons.last_mut() {
            if j.est_nombre() {
                j.scelle = true;
            }
        }

        if self.equilibre > 0 {
            self.equilibre -= 1;
            self.jetons.push(Jeton::operation(Genre::ParentheseFermante));
        }
    }

    fn ajouter_ouvrante(&mut self) {
        self.equilibre += 1;
        self.jetons.push(Jeton::operation(Genre::ParentheseOuvrante));
    }

    /* ------------------------ Affichage ------------------------ */

    /// Concaténation, dans l'ordre, du texte de chaque jeton.
    pub fn affichage(&self) -> String {
        self.jetons.iter().map(Jeton::texte).collect()
    }
}
