//! # Filtros de Eliminação por Caractere
//!
//! Tabelas estáticas que mapeiam grupos de caracteres raros (diacríticos,
//! letras únicas de certas ortografias) para o conjunto mínimo de idiomas
//! capazes de produzi-los. Servem exclusivamente para **eliminar** candidatos
//! de forma barata antes da pontuação estatística — nunca como fonte de
//! frequência. A consulta é pertinência exata de caractere, sem qualquer
//! casamento aproximado.
//!
//! Também vivem aqui o predicado de logogramas (escritas ideográficas do
//! chinês/japonês/coreano, onde a segmentação por espaços não se aplica) e as
//! expressões regulares de limpeza de texto compartilhadas pelo treinador e
//! pelo mecanismo de decisão.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use unicode_script::{Script, UnicodeScript};

use crate::alphabet::Alphabet;
use crate::language::Language;

use Language::*;

/// Idiomas cujas escritas contêm logogramas.
pub const LANGUAGES_SUPPORTING_LOGOGRAMS: &[Language] = &[Chinese, Japanese, Korean];

/// Grupos de caracteres raros e o conjunto mínimo de idiomas que os produzem.
///
/// Cada entrada lista as formas maiúscula e minúscula dos caracteres do
/// grupo; os conjuntos crescem do mais restritivo (2 idiomas) para o mais
/// amplo. Derivado do catálogo ortográfico dos 75 idiomas suportados.
static CHARS_TO_LANGUAGES: &[(&str, &[Language])] = &[
    ("Ãã", &[Portuguese, Vietnamese]),
    ("ĄąĘę", &[Lithuanian, Polish]),
    ("Żż", &[Polish, Romanian]),
    ("Îî", &[French, Romanian]),
    ("Ññ", &[Basque, Spanish]),
    ("ŇňŤť", &[Czech, Slovak]),
    ("Ăă", &[Romanian, Vietnamese]),
    ("İıĞğ", &[Azerbaijani, Turkish]),
    ("ЈјЉљЊњ", &[Macedonian, Serbian]),
    ("ẸẹỌọ", &[Vietnamese, Yoruba]),
    ("ÐðÞþ", &[Icelandic, Turkish]),
    ("Ûû", &[French, Hungarian]),
    ("Ōō", &[Maori, Yoruba]),
    ("ĀāĒēĪī", &[Latvian, Maori, Yoruba]),
    ("Şş", &[Azerbaijani, Romanian, Turkish]),
    ("Ďď", &[Czech, Romanian, Slovak]),
    ("Ćć", &[Bosnian, Croatian, Polish]),
    ("Đđ", &[Bosnian, Croatian, Vietnamese]),
    ("Іі", &[Belarusian, Kazakh, Ukrainian]),
    ("Ìì", &[Italian, Vietnamese, Yoruba]),
    ("Øø", &[Bokmal, Danish, Nynorsk]),
    ("Ūū", &[Latvian, Lithuanian, Maori, Yoruba]),
    ("Ëë", &[Afrikaans, Albanian, Dutch, French]),
    ("ÈèÙù", &[French, Italian, Vietnamese, Yoruba]),
    ("Êê", &[Afrikaans, French, Portuguese, Vietnamese]),
    ("Õõ", &[Estonian, Hungarian, Portuguese, Vietnamese]),
    ("Ôô", &[French, Portuguese, Slovak, Vietnamese]),
    ("ЁёЫыЭэ", &[Belarusian, Kazakh, Mongolian, Russian]),
    ("ЩщЪъ", &[Bulgarian, Kazakh, Mongolian, Russian]),
    ("Òò", &[Catalan, Italian, Vietnamese, Yoruba]),
    ("Ææ", &[Bokmal, Danish, Icelandic, Nynorsk]),
    ("Åå", &[Bokmal, Danish, Nynorsk, Swedish]),
    ("Ýý", &[Czech, Icelandic, Slovak, Turkish, Vietnamese]),
    ("Ää", &[Estonian, Finnish, German, Slovak, Swedish]),
    ("Àà", &[Catalan, French, Italian, Portuguese, Vietnamese]),
    ("Ââ", &[French, Portuguese, Romanian, Turkish, Vietnamese]),
    (
        "Üü",
        &[Azerbaijani, Catalan, Estonian, German, Hungarian, Spanish, Turkish],
    ),
    (
        "ČčŠšŽž",
        &[Bosnian, Czech, Croatian, Latvian, Lithuanian, Slovak, Slovene],
    ),
    (
        "Çç",
        &[Albanian, Azerbaijani, Basque, Catalan, French, Portuguese, Turkish],
    ),
    (
        "Öö",
        &[Azerbaijani, Estonian, Finnish, German, Hungarian, Icelandic, Swedish, Turkish],
    ),
    (
        "Óó",
        &[
            Catalan, Hungarian, Icelandic, Irish, Polish, Portuguese, Slovak, Spanish,
            Vietnamese, Yoruba,
        ],
    ),
    (
        "ÁáÍíÚú",
        &[
            Catalan, Czech, Icelandic, Irish, Hungarian, Portuguese, Slovak, Spanish,
            Vietnamese, Yoruba,
        ],
    ),
    (
        "Éé",
        &[
            Catalan, Czech, French, Hungarian, Icelandic, Irish, Italian, Portuguese, Slovak,
            Spanish, Vietnamese, Yoruba,
        ],
    ),
];

/// Índice caractere → idiomas, expandido uma única vez a partir dos grupos.
static CHAR_INDEX: LazyLock<HashMap<char, &'static [Language]>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for (characters, languages) in CHARS_TO_LANGUAGES {
        for ch in characters.chars() {
            index.insert(ch, *languages);
        }
    }
    index
});

/// Idiomas capazes de produzir o caractere `ch`, segundo a tabela de
/// desambiguação; `None` para caracteres fora dela.
pub fn languages_for_char(ch: char) -> Option<&'static [Language]> {
    CHAR_INDEX.get(&ch).copied()
}

/// Escritas dos idiomas com logogramas, coletadas uma única vez do catálogo.
static SCRIPTS_WITH_LOGOGRAMS: LazyLock<HashSet<Alphabet>> = LazyLock::new(|| {
    LANGUAGES_SUPPORTING_LOGOGRAMS
        .iter()
        .flat_map(|language| language.alphabets().iter().copied())
        .collect()
});

/// Verdadeiro sse `ch` pertence a uma escrita logográfica do catálogo.
/// Espaços em branco nunca são logogramas.
pub fn is_logogram(ch: char) -> bool {
    !ch.is_whitespace()
        && SCRIPTS_WITH_LOGOGRAMS
            .iter()
            .any(|alphabet| alphabet.matches_char(ch))
}

/// Verdadeiro sse a *Script* de `ch` é uma das três escritas japonesas.
pub fn is_japanese_script(ch: char) -> bool {
    matches!(ch.script(), Script::Hiragana | Script::Katakana | Script::Han)
}

/// Sequências de espaço em branco, para normalização de texto de entrada.
pub static MULTIPLE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("regex de espaços válida"));

/// Linhas sem nenhuma letra, descartadas pelo treinador.
pub static NO_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\p{L}]+$").expect("regex de não letras válida"));

/// Dígitos de qualquer sistema numérico.
pub static NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{N}").expect("regex de números válida"));

/// Pontuação de qualquer escrita.
pub static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("regex de pontuação válida"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rare_characters_map_to_their_minimal_language_set() {
        assert_eq!(languages_for_char('ñ'), Some(&[Basque, Spanish][..]));
        assert_eq!(languages_for_char('Ñ'), Some(&[Basque, Spanish][..]));
        assert_eq!(
            languages_for_char('ø'),
            Some(&[Bokmal, Danish, Nynorsk][..])
        );
        assert_eq!(
            languages_for_char('ã'),
            Some(&[Portuguese, Vietnamese][..])
        );
        // ambas as formas de cada grupo apontam para o mesmo conjunto
        assert_eq!(languages_for_char('č'), languages_for_char('Ž'));
    }

    #[test]
    fn test_common_characters_are_not_in_the_table() {
        for ch in ['a', 'e', 's', ' ', '!', '9', 'я', '中'] {
            assert_eq!(languages_for_char(ch), None);
        }
    }

    #[test]
    fn test_lookup_is_exact_membership() {
        // 'n' não herda o mapeamento de 'ñ': nada de casamento aproximado
        assert_eq!(languages_for_char('n'), None);
        assert_eq!(languages_for_char('o'), None);
    }

    #[test]
    fn test_logogram_detection() {
        assert!(is_logogram('中'));
        assert!(is_logogram('ひ'));
        assert!(is_logogram('カ'));
        assert!(is_logogram('한'));
        assert!(!is_logogram(' '));
        assert!(!is_logogram('a'));
        assert!(!is_logogram('я'));
    }

    #[test]
    fn test_japanese_script_detection() {
        assert!(is_japanese_script('ひ'));
        assert!(is_japanese_script('カ'));
        assert!(is_japanese_script('中'));
        assert!(!is_japanese_script('한'));
        assert!(!is_japanese_script('a'));
    }

    #[test]
    fn test_text_cleaning_regexes() {
        assert!(MULTIPLE_WHITESPACE.is_match("a  b"));
        assert!(NO_LETTER.is_match("123 !?"));
        assert!(!NO_LETTER.is_match("1a3"));
        assert!(NUMBERS.is_match("ano 2024"));
        assert!(PUNCTUATION.is_match("fim."));
        assert!(!PUNCTUATION.is_match("fim"));
    }
}
