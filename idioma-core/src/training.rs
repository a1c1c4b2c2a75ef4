//! # Modelo de Treinamento
//!
//! Constrói, a partir de um corpus, as frequências absolutas e relativas dos
//! n-gramas de um idioma em uma ordem fixa, e (de)serializa o resultado no
//! formato compacto de intercâmbio (um arquivo por idioma por ordem).
//!
//! ## Fluxo de dados
//!
//! O corpus é varrido uma vez por ordem, de 1 a 5. A passada de uma ordem k
//! depende das frequências absolutas **já computadas** da ordem k−1: o
//! denominador da frequência relativa de um k-grama é a contagem absoluta do
//! seu prefixo de ordem k−1 (escolha clássica de denominador de backoff de
//! Markov). Para unigramas — ou quando nenhuma tabela de ordem inferior é
//! fornecida — o denominador é o total de ocorrências da própria ordem.
//!
//! A varredura de contagem é independente por linha e agregada em paralelo
//! antes da redução; o resultado é determinístico porque a fusão é soma.
//!
//! Em tempo de consulta nada disso é reconstruído:
//! [`TrainingDataLanguageModel::from_json`] transforma o arquivo direto em um
//! mapa plano n-grama → probabilidade, sem reter frações.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::Read;

use rayon::prelude::*;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{IdiomaError, Result};
use crate::fraction::Fraction;
use crate::language::Language;
use crate::ngram::{Ngram, MAX_NGRAM_LENGTH};

/// Estatísticas de n-gramas de um idioma em uma ordem fixa.
///
/// Imutável após a construção: a API expõe apenas `&self`, então instâncias
/// podem ser compartilhadas entre threads sem qualquer sincronização.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDataLanguageModel {
    language: Language,
    absolute_frequencies: HashMap<Ngram, u32>,
    relative_frequencies: HashMap<Ngram, Fraction>,
}

/// Forma serializada do modelo: exatamente dois campos conhecidos.
///
/// O mapa é chaveado pela fração (ordenada pelo valor exato) e agrupa todos
/// os n-gramas que compartilham aquela frequência — como muitos n-gramas
/// raros valem "1/N", o agrupamento reduz bastante o tamanho do arquivo.
#[derive(Serialize)]
struct JsonLanguageModel {
    language: Language,
    ngrams: BTreeMap<Fraction, String>,
}

impl TrainingDataLanguageModel {
    /// Treina o modelo de ordem `ngram_length` para `language` sobre `lines`.
    ///
    /// Cada linha é convertida para minúsculas; uma janela de `ngram_length`
    /// caracteres desliza sobre ela e a fatia só é contada se **todos** os
    /// seus caracteres satisfazem `char_filter` (a restrição de classe de
    /// letras do idioma, ex.: "apenas letras latinas").
    ///
    /// `lower_ngram_absolute_frequencies` é a tabela absoluta da ordem
    /// k−1, vazia para unigramas.
    ///
    /// # Erros
    /// [`IdiomaError::NgramOrder`] se `ngram_length` está fora de 1..=5.
    pub fn from_text(
        lines: &[&str],
        language: Language,
        ngram_length: usize,
        char_filter: impl Fn(char) -> bool + Sync,
        lower_ngram_absolute_frequencies: &HashMap<Ngram, u32>,
    ) -> Result<Self> {
        if !(1..=MAX_NGRAM_LENGTH).contains(&ngram_length) {
            return Err(IdiomaError::NgramOrder(ngram_length));
        }

        let counts = compute_absolute_frequencies(lines, ngram_length, &char_filter);

        let mut absolute_frequencies = HashMap::with_capacity(counts.len());
        for (value, count) in counts {
            absolute_frequencies.insert(Ngram::new(value)?, count);
        }

        debug!(
            ?language,
            order = ngram_length,
            ngrams = absolute_frequencies.len(),
            "frequências absolutas acumuladas"
        );

        let relative_frequencies = compute_relative_frequencies(
            ngram_length,
            &absolute_frequencies,
            lower_ngram_absolute_frequencies,
        )?;

        Ok(Self {
            language,
            absolute_frequencies,
            relative_frequencies,
        })
    }

    /// Idioma deste modelo.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Contagens brutas de ocorrência por n-grama.
    pub fn absolute_frequencies(&self) -> &HashMap<Ngram, u32> {
        &self.absolute_frequencies
    }

    /// Frequências relativas exatas por n-grama.
    pub fn relative_frequencies(&self) -> &HashMap<Ngram, Fraction> {
        &self.relative_frequencies
    }

    /// Frequência relativa de `ngram` como `f64`; 0.0 quando ausente.
    pub fn relative_frequency(&self, ngram: &Ngram) -> f64 {
        self.relative_frequencies
            .get(ngram)
            .map(Fraction::to_f64)
            .unwrap_or(0.0)
    }

    /// Serializa o modelo no formato de intercâmbio.
    ///
    /// A saída é determinística: grupos ordenados pelo valor exato da fração
    /// (crescente) e n-gramas de cada grupo em ordem lexicográfica — o mesmo
    /// corpus produz sempre o mesmo artefato, byte a byte.
    pub fn to_json(&self) -> Result<String> {
        let mut groups: BTreeMap<Fraction, Vec<&str>> = BTreeMap::new();
        for (ngram, fraction) in &self.relative_frequencies {
            groups.entry(*fraction).or_default().push(ngram.value());
        }

        let ngrams = groups
            .into_iter()
            .map(|(fraction, mut members)| {
                members.sort_unstable();
                (fraction, members.join(" "))
            })
            .collect();

        let model = JsonLanguageModel {
            language: self.language,
            ngrams,
        };
        Ok(serde_json::to_string(&model)?)
    }

    /// Carrega um arquivo de modelo direto no mapa plano de consulta
    /// n-grama → probabilidade (precisão simples).
    ///
    /// Passada única de streaming, sem materializar o documento: o valor do
    /// campo `language` é pulado (irrelevante em tempo de consulta); cada
    /// chave do campo `ngrams` é separada em numerador/denominador, dividida
    /// para um float, e esse float é atribuído a cada n-grama da lista. Ao
    /// final, a capacidade excedente do mapa é liberada.
    ///
    /// # Erros
    /// [`IdiomaError::ModelFormat`] para campo inesperado, chave de fração
    /// malformada ou JSON inválido; [`IdiomaError::Io`] quando o stream
    /// subjacente falha durante a leitura.
    pub fn from_json(reader: impl Read) -> Result<HashMap<String, f32>> {
        let file: JsonLanguageModelFile =
            serde_json::from_reader(reader).map_err(|error| {
                if error.is_io() {
                    IdiomaError::Io(error.into())
                } else {
                    IdiomaError::ModelFormat(error)
                }
            })?;
        let mut frequencies = file.ngrams.0;
        frequencies.shrink_to_fit();
        debug!(ngrams = frequencies.len(), "modelo de consulta carregado");
        Ok(frequencies)
    }
}

/// Varredura de contagem: independente por linha, agregada em paralelo e
/// reduzida por soma. As chaves ficam como `String` até a validação final.
fn compute_absolute_frequencies(
    lines: &[&str],
    ngram_length: usize,
    char_filter: &(impl Fn(char) -> bool + Sync),
) -> HashMap<String, u32> {
    lines
        .par_iter()
        .map(|line| {
            let mut counts: HashMap<String, u32> = HashMap::new();
            let lowercased = line.to_lowercase();
            let chars: Vec<char> = lowercased.chars().collect();

            if chars.len() >= ngram_length {
                for window in chars.windows(ngram_length) {
                    if window.iter().all(|ch| char_filter(*ch)) {
                        let slice: String = window.iter().collect();
                        *counts.entry(slice).or_insert(0) += 1;
                    }
                }
            }

            counts
        })
        .reduce(HashMap::new, |mut merged, counts| {
            for (ngram, count) in counts {
                *merged.entry(ngram).or_insert(0) += count;
            }
            merged
        })
}

/// Frequência relativa de cada n-grama contra o denominador de backoff.
///
/// Prefixo ausente ou zerado na tabela de ordem inferior é tratado como
/// frequência relativa zero: o n-grama fica fora do mapa relativo em vez de
/// alimentar um denominador zero na construção da fração.
fn compute_relative_frequencies(
    ngram_length: usize,
    absolute_frequencies: &HashMap<Ngram, u32>,
    lower_ngram_absolute_frequencies: &HashMap<Ngram, u32>,
) -> Result<HashMap<Ngram, Fraction>> {
    let total: u32 = absolute_frequencies.values().sum();
    let mut relative_frequencies = HashMap::with_capacity(absolute_frequencies.len());

    for (ngram, &count) in absolute_frequencies {
        let denominator = if ngram_length == 1 || lower_ngram_absolute_frequencies.is_empty() {
            total
        } else {
            // prefixo de ordem k−1: o n-grama sem o último caractere
            let prefix = ngram.decrement()?;
            match lower_ngram_absolute_frequencies.get(&prefix) {
                Some(&prefix_count) if prefix_count > 0 => prefix_count,
                _ => {
                    debug!(
                        ngram = ngram.value(),
                        "prefixo sem contagem na ordem inferior, frequência relativa zero"
                    );
                    continue;
                }
            }
        };
        relative_frequencies.insert(ngram.clone(), Fraction::new(count as i32, denominator as i32)?);
    }

    Ok(relative_frequencies)
}

/// Leitura estrita do formato de intercâmbio: os dois campos conhecidos e
/// nada além deles — um nome de campo inesperado é violação fatal de formato.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonLanguageModelFile {
    #[serde(rename = "language")]
    _language: IgnoredAny,
    ngrams: NgramGroups,
}

/// Grupos "fração → n-gramas separados por espaço", achatados durante o
/// próprio streaming no mapa de consulta.
struct NgramGroups(HashMap<String, f32>);

impl<'de> Deserialize<'de> for NgramGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = NgramGroups;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("um objeto de frações para listas de n-gramas")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<NgramGroups, A::Error> {
                let mut frequencies = HashMap::new();

                while let Some((key, group)) = map.next_entry::<String, String>()? {
                    let frequency = parse_fraction_key(&key).ok_or_else(|| {
                        serde::de::Error::custom(format!("chave de fração inválida '{key}'"))
                    })?;
                    // segmentos vazios (grupo vazio, espaços duplicados) não
                    // viram chaves do mapa
                    for ngram in group.split(' ').filter(|ngram| !ngram.is_empty()) {
                        frequencies.insert(ngram.to_string(), frequency);
                    }
                }

                Ok(NgramGroups(frequencies))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// Divide `"numerador/denominador"` para a probabilidade em precisão simples.
fn parse_fraction_key(key: &str) -> Option<f32> {
    let (numerator, denominator) = key.split_once('/')?;
    let numerator: i64 = numerator.parse().ok()?;
    let denominator: i64 = denominator.parse().ok()?;
    if denominator == 0 {
        return None;
    }
    Some((numerator as f64 / denominator as f64) as f32)
}
