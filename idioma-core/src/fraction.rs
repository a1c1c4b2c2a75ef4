//! # Fração Exata
//!
//! Número racional exato usado na contabilidade de frequências durante o
//! treinamento. Trabalhar com frações em vez de ponto flutuante elimina o
//! acúmulo de erro de arredondamento e garante artefatos de treinamento
//! reproduzíveis bit a bit: a frequência relativa de um n-grama é sempre
//! "contagem sobre contagem", nunca um `f64` intermediário.
//!
//! ## Invariantes
//!
//! - Sempre armazenada em termos mínimos (`gcd(numerador, denominador) == 1`).
//! - Denominador sempre positivo; o sinal vive no numerador.
//! - Denominador zero é erro de construção, nunca um valor silencioso.
//!
//! A comparação é exata, por multiplicação cruzada em `i64` — jamais por
//! divisão em ponto flutuante, que quebraria a ordem total em valores próximos.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{IdiomaError, Result};

/// Fração reduzida com denominador positivo.
///
/// Tipo de valor: criada e descartada a cada cálculo. A forma canônica
/// (termos mínimos + sinal no numerador) faz `Eq`/`Hash` derivados coincidirem
/// com a igualdade de valor racional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

impl Fraction {
    /// Constrói a fração `numerator/denominator` reduzida a termos mínimos.
    ///
    /// # Erros
    /// - [`IdiomaError::ZeroDenominator`] se `denominator == 0`.
    /// - [`IdiomaError::FractionOverflow`] se a forma reduzida não cabe em
    ///   `i32` (ex.: `Fraction::new(i32::MIN, -1)` valeria 2³¹).
    pub fn new(numerator: i32, denominator: i32) -> Result<Self> {
        if denominator == 0 {
            return Err(IdiomaError::ZeroDenominator { numerator });
        }

        // Redução em i64: o único caso que não cabe em i32 é a negação de
        // i32::MIN, detectada na checagem final.
        let mut num = i64::from(numerator);
        let mut den = i64::from(denominator);

        let gcd = binary_gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        num /= gcd;
        den /= gcd;

        // Normaliza o sinal: denominador sempre positivo
        if den < 0 {
            num = -num;
            den = -den;
        }

        if num < i64::from(i32::MIN) || num > i64::from(i32::MAX) || den > i64::from(i32::MAX) {
            return Err(IdiomaError::FractionOverflow {
                numerator,
                denominator,
            });
        }

        Ok(Self {
            numerator: num as i32,
            denominator: den as i32,
        })
    }

    /// Numerador da forma reduzida (carrega o sinal).
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    /// Denominador da forma reduzida (sempre positivo).
    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Valor em ponto flutuante de precisão dupla.
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Valor em ponto flutuante de precisão simples — é o tipo retido nos
    /// mapas de frequência em tempo de consulta.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Divisão inteira truncada de numerador por denominador.
    pub fn to_i32(&self) -> i32 {
        self.numerator / self.denominator
    }

    /// Divisão inteira truncada, em 64 bits.
    pub fn to_i64(&self) -> i64 {
        i64::from(self.numerator) / i64::from(self.denominator)
    }
}

impl Ord for Fraction {
    /// Comparação exata por multiplicação cruzada.
    ///
    /// Como o denominador é sempre positivo, `a/b < c/d ⟺ a·d < c·b`.
    /// Os produtos são calculados em `i64`, onde `i32 × i32` nunca estoura.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i64::from(self.numerator) * i64::from(other.denominator);
        let rhs = i64::from(other.numerator) * i64::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = IdiomaError;

    /// Interpreta a forma textual `"numerador/denominador"`.
    fn from_str(s: &str) -> Result<Self> {
        let (num, den) = s
            .split_once('/')
            .ok_or_else(|| IdiomaError::InvalidFractionKey(s.to_string()))?;
        let numerator = num
            .parse::<i32>()
            .map_err(|_| IdiomaError::InvalidFractionKey(s.to_string()))?;
        let denominator = den
            .parse::<i32>()
            .map_err(|_| IdiomaError::InvalidFractionKey(s.to_string()))?;
        Fraction::new(numerator, denominator)
    }
}

impl Serialize for Fraction {
    /// No formato de modelo, frações são chaves de objeto JSON na forma
    /// textual `"num/den"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// MDC binário (algoritmo de Stein) sobre magnitudes sem sinal.
///
/// Opera em `u64` para que `|i32::MIN|` seja representável sem desvio especial.
/// Nunca retorna 0 quando ao menos um argumento é não nulo.
fn binary_gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    // Fatores de 2 comuns aos dois operandos
    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }

    a << shift
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction(numerator: i32, denominator: i32) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_fraction_is_reduced_to_lowest_terms() {
        assert_eq!(fraction(12, 144), fraction(1, 12));
        assert_eq!(fraction(63, 27), fraction(7, 3));
        assert_eq!(fraction(0, 1234), fraction(0, 1));
        assert_eq!(fraction(-42, 210), fraction(-1, 5));
        assert_eq!(fraction(169, -65), fraction(-13, 5));
    }

    #[test]
    fn test_fraction_invariants_hold_after_reduction() {
        // gcd == 1 e denominador positivo para qualquer entrada válida
        for (n, d) in [(12, 144), (-42, 210), (169, -65), (7, -3), (0, 99)] {
            let f = fraction(n, d);
            assert!(f.denominator() > 0);
            assert_eq!(
                binary_gcd(f.numerator().unsigned_abs().into(), f.denominator().unsigned_abs().into()),
                1
            );
        }
        // caso especial: 0/x reduz para 0/1, cujo "gcd" formal é 1 via denominador
        assert_eq!(fraction(0, 99).denominator(), 1);
    }

    #[test]
    fn test_fraction_with_zero_denominator_is_rejected() {
        let err = Fraction::new(1234, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "denominador zero na fração '1234/0'"
        );
    }

    #[test]
    fn test_fraction_overflow_at_minimum_integer_is_rejected() {
        // -2^31 / -1 valeria 2^31, fora do alcance de i32
        assert!(Fraction::new(i32::MIN, -1).is_err());
        assert!(Fraction::new(i32::MIN, i32::MIN).is_ok()); // reduz para 1/1
        assert_eq!(fraction(i32::MIN, i32::MIN), fraction(1, 1));
        assert_eq!(fraction(i32::MIN, 2), fraction(-1073741824, 1));
    }

    #[test]
    fn test_fraction_display() {
        assert_eq!(fraction(12, 144).to_string(), "1/12");
        assert_eq!(fraction(63, 27).to_string(), "7/3");
        assert_eq!(fraction(0, 1234).to_string(), "0/1");
        assert_eq!(fraction(-42, 210).to_string(), "-1/5");
        assert_eq!(fraction(169, -65).to_string(), "-13/5");
    }

    #[test]
    fn test_fraction_parsing_round_trips() {
        for text in ["1/12", "7/3", "0/1", "-1/5", "-13/5"] {
            let f: Fraction = text.parse().unwrap();
            assert_eq!(f.to_string(), text);
        }
        assert!("3".parse::<Fraction>().is_err());
        assert!("a/b".parse::<Fraction>().is_err());
        assert!("1/0".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_fraction_numeric_conversions() {
        assert_eq!(fraction(12, 144).to_f64(), 1.0 / 12.0);
        assert_eq!(fraction(63, 27).to_f64(), 7.0 / 3.0);
        assert_eq!(fraction(0, 1234).to_f64(), 0.0);
        assert_eq!(fraction(-42, 210).to_f64(), -0.2);
        assert_eq!(fraction(169, -65).to_f64(), -2.6);
        // conversões inteiras truncam em direção a zero
        assert_eq!(fraction(7, 3).to_i32(), 2);
        assert_eq!(fraction(-13, 5).to_i32(), -2);
        assert_eq!(fraction(-13, 5).to_i64(), -2);
    }

    #[test]
    fn test_fraction_ordering_is_total_and_exact() {
        // conjunto fixo em ordem estritamente crescente
        let ordered = [
            fraction(-13, 5),
            fraction(-1, 5),
            fraction(0, 1),
            fraction(1, 12),
            fraction(7, 3),
        ];

        // antissimetria e transitividade par a par
        for i in 0..ordered.len() {
            for j in 0..ordered.len() {
                match i.cmp(&j) {
                    Ordering::Less => assert!(ordered[i] < ordered[j]),
                    Ordering::Equal => assert_eq!(ordered[i], ordered[j]),
                    Ordering::Greater => assert!(ordered[i] > ordered[j]),
                }
            }
        }

        // valores vizinhos que divisão em f32 não separaria com segurança
        assert!(fraction(1000000, 3000001) < fraction(1000000, 3000000));
    }
}
