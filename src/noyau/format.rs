// src/noyau/format.rs
//
// Écriture décimale canonique d'un rationnel exact.
//
// Deux régimes :
// - dénominateur de la forme 2^a·5^b : développement décimal FINI,
//   affiché exactement (1/4 -> "0.25", 3/2 -> "1.5") ;
// - sinon : développement infini, lecture tronquée à CHIFFRES_LECTURE
//   chiffres (1/3 -> "0.33333333333333333333").

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Longueur de la lecture tronquée pour les développements infinis.
const CHIFFRES_LECTURE: usize = 20;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Si d = 2^a·5^b, renvoie max(a, b) : le nombre de chiffres du
/// développement décimal fini de n/d (fraction réduite). None sinon.
fn exposant_decimal(denominateur: &BigInt) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut reste = denominateur.clone();
    let mut a: usize = 0;
    let mut b: usize = 0;

    while (&reste % &deux).is_zero() {
        reste /= &deux;
        a += 1;
    }
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        b += 1;
    }

    if reste.is_one() {
        Some(a.max(b))
    } else {
        None
    }
}

/// Écriture décimale canonique d'un rationnel.
pub fn format_decimal(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();

    if d.is_one() {
        return format!("{n}");
    }

    match exposant_decimal(d) {
        // fini : n·10^k/d est entier (d | 10^k), aucune perte
        Some(k) => scaled_to_decimal((n * pow10(k)) / d, k),

        // infini : troncature vers zéro à CHIFFRES_LECTURE chiffres
        None => scaled_to_decimal((n * pow10(CHIFFRES_LECTURE)) / d, CHIFFRES_LECTURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn entiers() {
        assert_eq!(format_decimal(&rat(0, 1)), "0");
        assert_eq!(format_decimal(&rat(123, 1)), "123");
        assert_eq!(format_decimal(&rat(-7, 1)), "-7");
    }

    #[test]
    fn decimaux_finis() {
        assert_eq!(format_decimal(&rat(1, 4)), "0.25");
        assert_eq!(format_decimal(&rat(3, 2)), "1.5");
        assert_eq!(format_decimal(&rat(5, 4)), "1.25");
        assert_eq!(format_decimal(&rat(1, 10)), "0.1");
        assert_eq!(format_decimal(&rat(1, 20)), "0.05");
        assert_eq!(format_decimal(&rat(-3, 8)), "-0.375");
    }

    #[test]
    fn pas_de_zeros_parasites() {
        // 3/2 doit donner "1.5", jamais "1.50"
        assert_eq!(format_decimal(&rat(15, 10)), "1.5");
        assert_eq!(format_decimal(&rat(25, 100)), "0.25");
    }

    #[test]
    fn lecture_tronquee() {
        assert_eq!(format_decimal(&rat(1, 3)), "0.33333333333333333333");
        assert_eq!(format_decimal(&rat(2, 3)), "0.66666666666666666666");
        assert_eq!(format_decimal(&rat(-1, 3)), "-0.33333333333333333333");
        assert_eq!(format_decimal(&rat(1, 7)), "0.14285714285714285714");
    }

    #[test]
    fn grand_denominateur_fini() {
        // 1/2^10 = 0.0009765625
        assert_eq!(format_decimal(&rat(1, 1024)), "0.0009765625");
    }
}
