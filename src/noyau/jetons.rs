// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::format::format_decimal;

/// Genre lexical d'un jeton.
///
/// Le rang de priorité est donné par `rang()` (PAS par l'ordre de
/// déclaration) : réordonner les variantes ne change rien au calcul.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    ParentheseOuvrante,
    ParentheseFermante,
    Nombre,
}

impl Genre {
    /// Rang de priorité (comparaison des opérateurs + classement
    /// parenthèses/nombre). Addition < Soustraction < Multiplication
    /// < Division < ( < ) < Nombre.
    pub fn rang(self) -> u8 {
        match self {
            Genre::Addition => 0,
            Genre::Soustraction => 1,
            Genre::Multiplication => 2,
            Genre::Division => 3,
            Genre::ParentheseOuvrante => 4,
            Genre::ParentheseFermante => 5,
            Genre::Nombre => 6,
        }
    }

    /// Opérateur binaire ? (plage contiguë Addition..Division)
    pub fn est_operateur(self) -> bool {
        self.rang() <= Genre::Division.rang()
    }

    /// Glyphe affiché pour les genres non numériques.
    fn glyphe(self) -> &'static str {
        match self {
            Genre::Addition => "+",
            Genre::Soustraction => "-",
            Genre::Multiplication => "x",
            Genre::Division => "/",
            Genre::ParentheseOuvrante => "(",
            Genre::ParentheseFermante => ")",
            Genre::Nombre => "",
        }
    }
}

/// Un jeton de l'expression en cours de saisie.
///
/// Le genre est fixé à la construction. `valeur`, `facteur_decimal` et
/// `scelle` n'ont de sens que pour un `Nombre` :
/// - `facteur_decimal` = 0 tant qu'aucun point décimal n'a été tapé,
///   puis 10, 100, ... pendant la saisie des décimales ;
/// - `scelle` = true quand l'opérande est committé (opérateur tapé,
///   parenthèse fermée, rappel mémoire) : la saisie de chiffres repart
///   alors sur un nouveau jeton.
#[derive(Clone, Debug)]
pub struct Jeton {
    genre: Genre,
    pub valeur: BigRational,
    pub facteur_decimal: BigInt,
    pub scelle: bool,
}

impl Jeton {
    /// Jeton opérateur ou parenthèse.
    pub fn operation(genre: Genre) -> Self {
        Self {
            genre,
            valeur: BigRational::zero(),
            facteur_decimal: BigInt::zero(),
            scelle: false,
        }
    }

    /// Jeton nombre (non scellé).
    pub fn nombre(valeur: BigRational) -> Self {
        Self {
            genre: Genre::Nombre,
            valeur,
            facteur_decimal: BigInt::zero(),
            scelle: false,
        }
    }

    /// Jeton nombre déjà scellé (résultat d'évaluation, rappel mémoire).
    pub fn nombre_scelle(valeur: BigRational) -> Self {
        let mut jeton = Self::nombre(valeur);
        jeton.scelle = true;
        jeton
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn est_operateur(&self) -> bool {
        self.genre.est_operateur()
    }

    pub fn est_nombre(&self) -> bool {
        self.genre == Genre::Nombre
    }

    /// Priorité de self ≤ priorité de other ?
    pub fn priorite_au_plus(&self, other: &Jeton) -> bool {
        self.genre.rang() <= other.genre.rang()
    }

    /// Texte affiché : glyphe pour les opérateurs/parenthèses, écriture
    /// décimale canonique pour les nombres.
    pub fn texte(&self) -> String {
        if self.est_nombre() {
            format_decimal(&self.valeur)
        } else {
            self.genre.glyphe().to_string()
        }
    }
}
