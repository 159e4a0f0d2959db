//! Tests de propriétés : la réduction à deux piles contre un évaluateur
//! de référence, et martelage déterministe de l'éditeur.
//!
//! But : couvrir en particulier les cas d'opérateur resté au sommet de la
//! pile en fin de balayage (le flush Multiplication/Division), en
//! énumérant toutes les paires d'opérateurs sur une grille d'opérandes,
//! puis en fuzzant. Garde-fous du fuzz :
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::editeur::Calculatrice;
use super::eval::{evaluer_plat, ErreurCalc};
use super::jetons::{Genre, Jeton};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

const OPERATEURS: [Genre; 4] = [
    Genre::Addition,
    Genre::Soustraction,
    Genre::Multiplication,
    Genre::Division,
];

fn entier(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Évaluation de référence d'une suite alternée opérande/opérateur :
/// d'abord x et / de gauche à droite, puis + et - de gauche à droite.
fn reference(valeurs: &[BigRational], operateurs: &[Genre]) -> Result<BigRational, ErreurCalc> {
    assert_eq!(valeurs.len(), operateurs.len() + 1, "suite mal formée");

    // passe 1 : x et /
    let mut vals: Vec<BigRational> = vec![valeurs[0].clone()];
    let mut ops: Vec<Genre> = Vec::new();

    for (op, v) in operateurs.iter().zip(&valeurs[1..]) {
        match op {
            Genre::Multiplication => {
                let gauche = vals.pop().expect("pile de référence");
                vals.push(gauche * v);
            }
            Genre::Division => {
                if v.is_zero() {
                    return Err(ErreurCalc::DivisionParZero);
                }
                let gauche = vals.pop().expect("pile de référence");
                vals.push(gauche / v);
            }
            _ => {
                ops.push(*op);
                vals.push(v.clone());
            }
        }
    }

    // passe 2 : + et -
    let mut acc = vals[0].clone();
    for (op, v) in ops.iter().zip(&vals[1..]) {
        match op {
            Genre::Addition => acc += v,
            Genre::Soustraction => acc -= v,
            _ => unreachable!("opérateur de priorité haute en passe 2"),
        }
    }

    Ok(acc)
}

/// Suite plate [v0 op0 v1 op1 ... vN] prête pour evaluer_plat.
fn suite_plate(valeurs: &[BigRational], operateurs: &[Genre]) -> Vec<Jeton> {
    let mut jetons = vec![Jeton::nombre(valeurs[0].clone())];
    for (op, v) in operateurs.iter().zip(&valeurs[1..]) {
        jetons.push(Jeton::operation(*op));
        jetons.push(Jeton::nombre(v.clone()));
    }
    jetons
}

fn compare_contre_reference(valeurs: &[BigRational], operateurs: &[Genre]) {
    let attendu = reference(valeurs, operateurs);
    let obtenu = evaluer_plat(&suite_plate(valeurs, operateurs))
        .map(|opt| opt.expect("suite non vide").valeur);

    assert_eq!(
        obtenu, attendu,
        "divergence sur {valeurs:?} {operateurs:?}"
    );
}

/* ------------------------ Énumérations ------------------------ */

#[test]
fn operateur_seul_contre_reference() {
    let grille: [i64; 5] = [0, 1, 2, 5, -3];

    for op in OPERATEURS {
        for a in grille {
            for b in grille {
                compare_contre_reference(&[entier(a), entier(b)], &[op]);
            }
        }
    }
}

#[test]
fn paires_d_operateurs_contre_reference() {
    // couvre tous les cas d'opérateur unique resté au sommet de la pile
    // en fin de balayage (dont le flush x/÷ traînant)
    let grille: [i64; 5] = [0, 1, 2, 5, -3];

    for op1 in OPERATEURS {
        for op2 in OPERATEURS {
            for a in grille {
                for b in grille {
                    for c in grille {
                        compare_contre_reference(
                            &[entier(a), entier(b), entier(c)],
                            &[op1, op2],
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn triplets_d_operateurs_contre_reference() {
    let grille: [i64; 3] = [0, 2, 5];

    for op1 in OPERATEURS {
        for op2 in OPERATEURS {
            for op3 in OPERATEURS {
                for a in grille {
                    for b in grille {
                        for c in grille {
                            for d in grille {
                                compare_contre_reference(
                                    &[entier(a), entier(b), entier(c), entier(d)],
                                    &[op1, op2, op3],
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

/* ------------------------ Fuzz ------------------------ */

#[test]
fn fuzz_suites_plates() {
    let mut rng = Rng::new(0xCA1C);
    let depart = Instant::now();

    for _ in 0..2000 {
        budget(depart, Duration::from_secs(20));

        let n = 1 + rng.pick(10) as usize;
        let valeurs: Vec<BigRational> = (0..n)
            .map(|_| entier(i64::from(rng.pick(12)) - 3))
            .collect();
        let operateurs: Vec<Genre> = (1..n)
            .map(|_| OPERATEURS[rng.pick(4) as usize])
            .collect();

        compare_contre_reference(&valeurs, &operateurs);
    }
}

#[test]
fn fuzz_editeur_total() {
    // aucune suite de commandes ne doit paniquer ni casser les invariants
    let mut rng = Rng::new(0xED17);
    let depart = Instant::now();

    for _ in 0..400 {
        budget(depart, Duration::from_secs(20));

        let mut calc = Calculatrice::new();
        for _ in 0..60 {
            match rng.pick(14) {
                0 => calc.chiffre(rng.pick(10) as u8),
                1 => calc.point_decimal(),
                2 => calc.operateur(OPERATEURS[rng.pick(4) as usize]),
                3 => calc.basculer_signe(),
                4 => calc.inverse(),
                5 => calc.pourcent(),
                6 => calc.memoire_enregistrer(),
                7 => calc.memoire_effacer(),
                8 => calc.memoire_rappeler(),
                9 => calc.effacer_saisie(),
                10 => calc.effacer_tout(),
                11 => calc.parenthese_ouvrante(),
                12 => calc.parenthese_fermante(),
                _ => {
                    if let Ok(premier) = calc.calculer() {
                        // un calcul réussi est idempotent
                        let second = calc.calculer().expect("recalcul du résultat");
                        assert_eq!(premier, second);
                    }
                }
            }

            assert!(!calc.jetons.is_empty(), "séquence vide après une commande");
            assert!(!calc.affichage().is_empty(), "affichage vide");
        }
    }
}
