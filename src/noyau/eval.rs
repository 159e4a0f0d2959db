// src/noyau/eval.rs
//
// Évaluation en deux phases :
// 1) résolution des parenthèses : un seul balayage gauche→droite, chaque
//    groupe complet le plus interne est réduit en un Nombre scellé ;
// 2) réduction de la séquence plate par deux piles (opérandes/opérateurs)
//    pilotée par le rang de priorité des jetons.
//
// Toute la phase de calcul travaille sur une COPIE de la séquence : en cas
// d'échec (déséquilibre, division par zéro), l'état de l'éditeur est
// inchangé et l'utilisateur peut continuer sa saisie.

use log::debug;
use num_rational::BigRational;
use num_traits::Zero;
use thiserror::Error;

use super::editeur::Calculatrice;
use super::jetons::{Genre, Jeton};

/// Échecs de `calculer`. Les commandes d'édition, elles, n'échouent jamais.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Parenthèses ouvrantes et fermantes non appariées au moment du calcul.
    #[error("parenthèses non équilibrées")]
    Desequilibre,

    /// Un dénominateur nul a été rencontré pendant la réduction.
    #[error("division par zéro")]
    DivisionParZero,

    /// Rien à réduire (inatteignable depuis la surface de saisie).
    #[error("expression vide")]
    ExpressionVide,
}

impl Calculatrice {
    /// Évalue l'expression courante.
    ///
    /// En cas de succès, la séquence est re-semée avec le seul Nombre
    /// résultat (scellé) et la valeur est retournée. En cas d'échec,
    /// la séquence, l'équilibre et la mémoire sont intacts.
    pub fn calculer(&mut self) -> Result<BigRational, ErreurCalc> {
        if self.equilibre != 0 {
            return Err(ErreurCalc::Desequilibre);
        }

        let mut jetons = self.jetons.clone();

        // un opérateur pendant en toute fin est ignoré, pas une erreur
        if jetons.last().is_some_and(Jeton::est_operateur) {
            jetons.pop();
        }

        let plat = resoudre_parentheses(&jetons)?;
        debug!(
            "séquence aplatie: {}",
            plat.iter().map(Jeton::texte).collect::<String>()
        );

        let resultat = evaluer_plat(&plat)?.ok_or(ErreurCalc::ExpressionVide)?;
        let valeur = resultat.valeur.clone();
        debug!("résultat: {}", resultat.texte());

        self.jetons.clear();
        self.equilibre = 0;
        self.jetons.push(resultat);

        Ok(valeur)
    }
}

/// Phase 1 : réduit chaque groupe parenthésé (le plus interne d'abord,
/// gauche→droite à profondeur égale) en un Nombre scellé, et renvoie la
/// séquence aplatie.
///
/// `tampon` porte les jetons sous au moins une ouvrante non appariée,
/// `ouvertes` les positions de ces ouvrantes dans `tampon` ; tout le reste
/// va directement dans `sortie`. À la fermante, la tranche depuis la
/// dernière ouvrante est évaluée puis épissée en un seul jeton.
pub(super) fn resoudre_parentheses(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut tampon: Vec<Jeton> = Vec::new();
    let mut ouvertes: Vec<usize> = Vec::new();

    for jeton in jetons {
        match jeton.genre() {
            Genre::ParentheseOuvrante => {
                ouvertes.push(tampon.len());
                tampon.push(jeton.clone());
            }

            Genre::ParentheseFermante => {
                // l'équilibre a été vérifié en amont
                let Some(&debut) = ouvertes.last() else {
                    continue;
                };

                if let Some(resultat) = evaluer_plat(&tampon[debut + 1..])? {
                    tampon.truncate(debut);
                    ouvertes.pop();

                    if tampon.is_empty() {
                        // groupe de tête : directement dans la sortie
                        sortie.push(resultat);
                    } else {
                        tampon.push(resultat);
                    }
                }
            }

            _ => {
                if ouvertes.is_empty() {
                    sortie.push(jeton.clone());
                } else {
                    tampon.push(jeton.clone());
                }
            }
        }
    }

    Ok(sortie)
}

/// Phase 2 : réduction à deux piles d'une séquence SANS parenthèses.
///
/// Balayage : les Nombres s'empilent ; un opérateur entrant combine tant
/// que sa priorité est ≤ celle du sommet, puis s'empile. En fin de
/// balayage, un Multiplication/Division resté au sommet (rien ne l'a
/// suivi) est combiné, puis la pile est vidée sommet d'abord — l'opérande
/// empilé en premier est toujours l'opérande gauche.
///
/// Séquence vide => Ok(None) (sert à détecter un groupe creux).
pub(super) fn evaluer_plat(jetons: &[Jeton]) -> Result<Option<Jeton>, ErreurCalc> {
    if jetons.is_empty() {
        return Ok(None);
    }

    let mut nombres: Vec<BigRational> = Vec::new();
    let mut operateurs: Vec<Jeton> = Vec::new();

    for jeton in jetons {
        if jeton.est_nombre() {
            nombres.push(jeton.valeur.clone());
        } else if jeton.est_operateur() {
            while operateurs
                .last()
                .is_some_and(|haut| jeton.priorite_au_plus(haut))
            {
                combiner(&mut operateurs, &mut nombres)?;
            }
            operateurs.push(jeton.clone());
        }
    }

    if matches!(
        operateurs.last().map(Jeton::genre),
        Some(Genre::Multiplication | Genre::Division)
    ) {
        combiner(&mut operateurs, &mut nombres)?;
    }

    while !operateurs.is_empty() {
        combiner(&mut operateurs, &mut nombres)?;
    }

    Ok(nombres.pop().map(Jeton::nombre_scelle))
}

/// Dépile un opérateur et ses deux opérandes, empile la combinaison.
/// Une pile trop courte (séquence mal formée) absorbe l'opérateur sans rien
/// combiner.
fn combiner(operateurs: &mut Vec<Jeton>, nombres: &mut Vec<BigRational>) -> Result<(), ErreurCalc> {
    let Some(operation) = operateurs.pop() else {
        return Ok(());
    };
    let (Some(b), Some(a)) = (nombres.pop(), nombres.pop()) else {
        return Ok(());
    };

    let combine = match operation.genre() {
        Genre::Addition => a + b,
        Genre::Soustraction => a - b,
        Genre::Multiplication => a * b,
        Genre::Division => {
            if b.is_zero() {
                return Err(ErreurCalc::DivisionParZero);
            }
            a / b
        }
        _ => return Ok(()),
    };

    nombres.push(combine);
    Ok(())
}
