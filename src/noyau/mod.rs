//! Noyau de la calculatrice tactile
//!
//! Organisation interne :
//! - jetons.rs  : jetons (genre, rang de priorité, texte affiché)
//! - format.rs  : écriture décimale canonique (exacte ou tronquée)
//! - editeur.rs : machine à états d'édition (chiffres, opérateurs,
//!                parenthèses, mémoire, effacements)
//! - eval.rs    : résolution des parenthèses + réduction à deux piles

pub mod editeur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use editeur::Calculatrice;
pub use eval::ErreurCalc;
