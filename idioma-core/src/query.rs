//! # Modelo de Consulta
//!
//! Extrai de um texto de entrada o **conjunto** de n-gramas distintos de uma
//! ordem fixa. Diferente do treinamento, a consulta não conta ocorrências:
//! cada n-grama pesa uma vez na soma de log-probabilidades, então só a
//! presença importa.
//!
//! A extração respeita fronteiras de palavra: as janelas deslizam sobre cada
//! sequência contígua de letras com pelo menos `ngram_length` caracteres, e
//! nunca atravessam espaços, pontuação ou dígitos.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IdiomaError, Result};
use crate::ngram::{Ngram, MAX_NGRAM_LENGTH};

/// Uma sequência de pelo menos k letras Unicode, para cada ordem k de 1 a 5.
static LETTER_SEQUENCES: LazyLock<[Regex; MAX_NGRAM_LENGTH]> = LazyLock::new(|| {
    [1, 2, 3, 4, 5].map(|order| {
        Regex::new(&format!(r"\p{{L}}{{{order},}}"))
            .expect("expressão regular de sequência de letras inválida")
    })
});

/// Conjunto de n-gramas distintos extraídos de um texto de consulta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataLanguageModel {
    ngrams: HashSet<Ngram>,
}

impl TestDataLanguageModel {
    /// Extrai os n-gramas distintos de ordem `ngram_length` de `text`.
    ///
    /// O texto não é convertido para minúsculas aqui: a normalização de caixa
    /// é responsabilidade do pré-processamento do chamador.
    ///
    /// # Erros
    /// [`IdiomaError::NgramOrder`] se `ngram_length` está fora de 1..=5.
    pub fn from_text(text: &str, ngram_length: usize) -> Result<Self> {
        if !(1..=MAX_NGRAM_LENGTH).contains(&ngram_length) {
            return Err(IdiomaError::NgramOrder(ngram_length));
        }

        let mut ngrams = HashSet::new();
        for sequence in LETTER_SEQUENCES[ngram_length - 1].find_iter(text) {
            let chars: Vec<char> = sequence.as_str().chars().collect();
            for window in chars.windows(ngram_length) {
                let slice: String = window.iter().collect();
                ngrams.insert(Ngram::new(slice)?);
            }
        }

        Ok(Self { ngrams })
    }

    /// N-gramas distintos encontrados no texto.
    pub fn ngrams(&self) -> &HashSet<Ngram> {
        &self.ngrams
    }
}
