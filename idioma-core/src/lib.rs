//! # idioma-core — Núcleo Estatístico de Identificação de Idiomas
//!
//! Este crate implementa o coração matemático de um identificador de idiomas
//! por n-gramas de caracteres, cobrindo 75 idiomas. Ele foi projetado para
//! ser didático, modular e determinístico: o mesmo corpus produz sempre os
//! mesmos artefatos de modelo, byte a byte.
//!
//! ## Arquitetura do Sistema
//!
//! O sistema tem duas fases bem separadas, ligadas por um formato de arquivo:
//!
//! 1.  **Treinamento** ([`training`]): um corpus é varrido ordem a ordem
//!     (unigramas até fivegramas). Cada passada conta frequências absolutas e
//!     deriva frequências relativas **exatas** ([`fraction`]) usando como
//!     denominador a contagem do prefixo de ordem inferior — o encadeamento
//!     de backoff de Markov. O resultado é serializado em JSON compacto, um
//!     arquivo por idioma por ordem.
//! 2.  **Consulta** ([`query`]): o texto de entrada vira um conjunto de
//!     n-gramas distintos; os arquivos de modelo são carregados direto em
//!     mapas planos n-grama → probabilidade, sem reconstruir frações.
//!
//! Ao redor do núcleo ficam o catálogo de idiomas ([`language`]), a tabela de
//! capacidade de alfabetos ([`alphabet`]) e as tabelas estáticas de
//! desambiguação por caractere ([`filters`]), que permitem descartar idiomas
//! incompatíveis com a escrita do texto antes de qualquer estatística.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::collections::HashMap;
//! use idioma_core::{Language, TestDataLanguageModel, TrainingDataLanguageModel};
//!
//! // 1. Treina o modelo de unigramas de um corpus mínimo
//! let lines = ["o rato roeu a roupa do rei de roma"];
//! let unigrams = TrainingDataLanguageModel::from_text(
//!     &lines,
//!     Language::Portuguese,
//!     1,
//!     |ch| ch.is_alphabetic(),
//!     &HashMap::new(),
//! ).unwrap();
//!
//! // 2. Serializa no formato de intercâmbio (determinístico)
//! let json = unigrams.to_json().unwrap();
//!
//! // 3. Em tempo de consulta, carrega o mapa plano de probabilidades
//! let frequencies = TrainingDataLanguageModel::from_json(json.as_bytes()).unwrap();
//! assert!(frequencies.contains_key("r"));
//!
//! // 4. E extrai os n-gramas distintos do texto a identificar
//! let model = TestDataLanguageModel::from_text("roupa nova", 2).unwrap();
//! assert!(model.ngrams().len() > 0);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`fraction`]: aritmética racional exata, base das frequências relativas.
//! - [`ngram`]: o tipo [`Ngram`], ordens 1 a 5 e a cadeia de decremento.
//! - [`language`]: os 75 idiomas suportados, com códigos ISO 639-1/639-3.
//! - [`alphabet`]: escritas Unicode e a tabela de escritas exclusivas.
//! - [`filters`]: tabelas de desambiguação por caractere e regexes de limpeza.
//! - [`training`] / [`query`]: os dois lados do par de modelos.

pub mod alphabet;
pub mod error;
pub mod filters;
pub mod fraction;
pub mod language;
pub mod ngram;
pub mod query;
pub mod training;

pub use alphabet::Alphabet;
pub use error::{IdiomaError, Result};
pub use fraction::Fraction;
pub use language::Language;
pub use ngram::{ngram_name, Ngram, NgramIterator, NgramRange, MAX_NGRAM_LENGTH};
pub use query::TestDataLanguageModel;
pub use training::TrainingDataLanguageModel;
