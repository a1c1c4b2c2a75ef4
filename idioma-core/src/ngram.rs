//! # N-gramas de Caracteres
//!
//! O n-grama é a unidade estatística de todo o sistema: uma janela contígua
//! de 1 a 5 caracteres alfabéticos. A string vazia é o **zerograma**, sentinela
//! de ordem mais baixa, usado apenas como limite inferior das cadeias de
//! backoff.
//!
//! ## Backoff
//!
//! Quando um n-grama de ordem alta não tem frequência registrada no modelo de
//! um idioma, o mecanismo de decisão recua para ordens menores: "teste" →
//! "test" → "tes" → "te" → "t". Esse recuo é o [`decrement`](Ngram::decrement)
//! sucessivo, e [`NgramRange`] com seu iterador percorre a cadeia inteira de
//! uma vez, da ordem k até o unigrama.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IdiomaError, Result};

/// Ordem máxima suportada pelos modelos (fivegramas).
pub const MAX_NGRAM_LENGTH: usize = 5;

/// Janela imutável de 0 a 5 caracteres.
///
/// A ordem (quantidade de caracteres) é o único aspecto relevante para o
/// backoff; a comparação ordena primeiro por ordem e desempata pelo valor
/// textual apenas para manter `Ord` total e consistente com `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ngram {
    value: String,
}

impl Ngram {
    /// Constrói um n-grama a partir de `value`.
    ///
    /// # Erros
    /// [`IdiomaError::NgramLength`] se `value` tem mais de 5 caracteres.
    /// A string vazia é válida: é o zerograma.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.chars().count() > MAX_NGRAM_LENGTH {
            return Err(IdiomaError::NgramLength(value));
        }
        Ok(Self { value })
    }

    /// O zerograma, n-grama sentinela de ordem 0.
    pub fn zerogram() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Conteúdo textual do n-grama.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Ordem do n-grama: quantidade de caracteres (0 para o zerograma).
    pub fn order(&self) -> usize {
        self.value.chars().count()
    }

    /// Verdadeiro somente para o zerograma.
    pub fn is_zerogram(&self) -> bool {
        self.value.is_empty()
    }

    /// Antecessor de backoff: o mesmo n-grama sem o último caractere.
    ///
    /// # Erros
    /// [`IdiomaError::ZerogramDecrement`] ao decrementar o zerograma — erro
    /// de lógica do chamador, pois nenhuma ordem inferior existe.
    pub fn decrement(&self) -> Result<Ngram> {
        if self.is_zerogram() {
            return Err(IdiomaError::ZerogramDecrement);
        }
        let mut value = self.value.clone();
        value.pop();
        Ok(Ngram { value })
    }

    /// Intervalo fechado do próprio n-grama até o unigrama formado pelo seu
    /// primeiro caractere — a cadeia de backoff completa.
    ///
    /// # Erros
    /// [`IdiomaError::ZerogramDecrement`] se chamado sobre o zerograma, que
    /// não contém um primeiro caractere.
    pub fn range_to_unigram(&self) -> Result<NgramRange> {
        let first = self
            .value
            .chars()
            .next()
            .ok_or(IdiomaError::ZerogramDecrement)?;
        let unigram = Ngram {
            value: first.to_string(),
        };
        NgramRange::new(self.clone(), unigram)
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Ord for Ngram {
    /// Ordena por ordem (comprimento); o desempate textual existe só para a
    /// consistência formal de `Ord` e não carrega significado estatístico.
    fn cmp(&self, other: &Self) -> Ordering {
        self.order()
            .cmp(&other.order())
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for Ngram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nome clássico da ordem `length`: "unigram" a "fivegram".
///
/// # Erros
/// [`IdiomaError::NgramOrder`] fora de 1..=5.
pub fn ngram_name(length: usize) -> Result<&'static str> {
    match length {
        1 => Ok("unigram"),
        2 => Ok("bigram"),
        3 => Ok("trigram"),
        4 => Ok("quadrigram"),
        5 => Ok("fivegram"),
        _ => Err(IdiomaError::NgramOrder(length)),
    }
}

/// Intervalo fechado de backoff, da ordem maior (`start`) até a menor (`end`).
///
/// A pertinência é decidida **apenas pela ordem**, nunca pela igualdade
/// textual: "ab" pertence a qualquer intervalo que cubra a ordem 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramRange {
    start: Ngram,
    end: Ngram,
}

impl NgramRange {
    /// Constrói o intervalo fechado `[start, end]`.
    ///
    /// # Erros
    /// [`IdiomaError::InvalidNgramRange`] se `start` tem ordem menor que
    /// `end` — o intervalo é sempre declarado da ordem alta para a baixa.
    pub fn new(start: Ngram, end: Ngram) -> Result<Self> {
        if start.order() < end.order() {
            return Err(IdiomaError::InvalidNgramRange {
                start: start.value.clone(),
                end: end.value.clone(),
            });
        }
        Ok(Self { start, end })
    }

    /// Limite superior (ordem mais alta) do intervalo.
    pub fn start(&self) -> &Ngram {
        &self.start
    }

    /// Limite inferior (ordem mais baixa) do intervalo.
    pub fn end(&self) -> &Ngram {
        &self.end
    }

    /// Pertinência por comparação de ordens, inclusiva nos dois limites.
    pub fn contains(&self, ngram: &Ngram) -> bool {
        ngram.order() <= self.start.order() && ngram.order() >= self.end.order()
    }
}

impl IntoIterator for NgramRange {
    type Item = Ngram;
    type IntoIter = NgramIterator;

    fn into_iter(self) -> NgramIterator {
        NgramIterator::new(self.start)
    }
}

/// Cursor finito e de travessia única sobre a cadeia de backoff.
///
/// Produz o n-grama inicial e, em seguida, cada antecessor por truncamento,
/// encerrando exatamente no unigrama: para um início de ordem k, são k itens
/// de ordens k, k−1, …, 1. O zerograma nunca é produzido.
#[derive(Debug)]
pub struct NgramIterator {
    current: Option<Ngram>,
}

impl NgramIterator {
    /// Inicia o cursor em `start`. Um início zerograma produz cadeia vazia.
    pub fn new(start: Ngram) -> Self {
        let current = if start.is_zerogram() { None } else { Some(start) };
        Self { current }
    }
}

impl Iterator for NgramIterator {
    type Item = Ngram;

    fn next(&mut self) -> Option<Ngram> {
        let current = self.current.take()?;
        if current.order() > 1 {
            // decremento nunca falha acima da ordem 0
            self.current = current.decrement().ok();
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ngram(value: &str) -> Ngram {
        Ngram::new(value).unwrap()
    }

    #[test]
    fn test_ngram_construction_respects_length_bounds() {
        assert!(Ngram::new("").is_ok());
        assert!(Ngram::new("abcde").is_ok());
        assert!(Ngram::new("abcdef").is_err());
        // o limite é contado em caracteres, não em bytes
        assert!(Ngram::new("aaaaa\u{0301}").is_err());
        assert!(Ngram::new("ção").is_ok());
    }

    #[test]
    fn test_zerogram_is_the_lowest_order() {
        let zero = Ngram::zerogram();
        assert!(zero.is_zerogram());
        assert_eq!(zero.order(), 0);
        assert!(matches!(
            zero.decrement(),
            Err(IdiomaError::ZerogramDecrement)
        ));
        assert!(zero.range_to_unigram().is_err());
    }

    #[test]
    fn test_decrement_drops_the_last_character() {
        let mut current = ngram("teste");
        for expected in ["test", "tes", "te", "t", ""] {
            current = current.decrement().unwrap();
            assert_eq!(current.value(), expected);
        }
        assert!(current.decrement().is_err());
    }

    #[test]
    fn test_ngram_ordering_is_primarily_by_length() {
        assert!(ngram("a") < ngram("ab"));
        assert!(ngram("abcd") < ngram("abcde"));
        assert!(ngram("zzzz") < ngram("aaaaa"));
        assert_eq!(ngram("ab").cmp(&ngram("ab")), Ordering::Equal);
    }

    #[test]
    fn test_ngram_names() {
        assert_eq!(ngram_name(1).unwrap(), "unigram");
        assert_eq!(ngram_name(2).unwrap(), "bigram");
        assert_eq!(ngram_name(3).unwrap(), "trigram");
        assert_eq!(ngram_name(4).unwrap(), "quadrigram");
        assert_eq!(ngram_name(5).unwrap(), "fivegram");
        assert!(ngram_name(0).is_err());
        assert!(ngram_name(6).is_err());
    }

    #[test]
    fn test_range_must_go_from_higher_to_lower_order() {
        // ordem 2 como início e ordem 5 como fim: invertido, rejeitado
        assert!(NgramRange::new(ngram("ab"), ngram("abcde")).is_err());
        assert!(NgramRange::new(ngram("abcde"), ngram("ab")).is_ok());
        // ordens iguais são um intervalo válido de um único nível
        assert!(NgramRange::new(ngram("ab"), ngram("xy")).is_ok());
    }

    #[test]
    fn test_range_membership_is_by_order_not_by_value() {
        let range = NgramRange::new(ngram("abcd"), ngram("x")).unwrap();
        assert!(range.contains(&ngram("qqqq")));
        assert!(range.contains(&ngram("q")));
        assert!(range.contains(&ngram("qq")));
        assert!(!range.contains(&ngram("qqqqq")));
        assert!(!range.contains(&Ngram::zerogram()));
    }

    #[test]
    fn test_backoff_iterator_ends_exactly_at_the_unigram() {
        let chain: Vec<Ngram> = ngram("teste").range_to_unigram().unwrap().into_iter().collect();
        let values: Vec<&str> = chain.iter().map(Ngram::value).collect();
        assert_eq!(values, ["teste", "test", "tes", "te", "t"]);

        // para cada ordem L, exatamente L itens de comprimento estritamente decrescente
        for (length, value) in [(1, "a"), (2, "ab"), (3, "abc"), (4, "abcd"), (5, "abcde")] {
            let chain: Vec<Ngram> = ngram(value).range_to_unigram().unwrap().into_iter().collect();
            assert_eq!(chain.len(), length);
            for (i, item) in chain.iter().enumerate() {
                assert_eq!(item.order(), length - i);
            }
            assert_eq!(chain.last().unwrap().order(), 1);
        }
    }

    #[test]
    fn test_backoff_iterator_from_zerogram_is_empty() {
        let mut iter = NgramIterator::new(Ngram::zerogram());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_range_to_unigram_keeps_the_first_character() {
        let range = ngram("teste").range_to_unigram().unwrap();
        assert_eq!(range.start().value(), "teste");
        assert_eq!(range.end().value(), "t");
    }
}
