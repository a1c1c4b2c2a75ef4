//! # Tabela de Capacidade de Alfabetos
//!
//! Classifica caracteres pela propriedade *Script* do Unicode e responde, por
//! escrita, quais idiomas suportados a usam. O objetivo é barato e direto:
//! antes de qualquer pontuação de n-gramas, o mecanismo de decisão estreita o
//! conjunto de candidatos olhando só para a escrita do texto — e quando uma
//! escrita é usada por exatamente um idioma do catálogo (grego, tailandês,
//! hangul...), a resposta já está decidida sem nenhuma estatística.
//!
//! Todas as tabelas derivadas são computadas uma única vez na primeira
//! utilização e tratadas como estado global imutável a partir daí.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use unicode_script::{Script, UnicodeScript};

use crate::language::Language;

/// Escritas Unicode reconhecidas pelo catálogo de idiomas.
///
/// Cada variante está ligada a zero ou uma *Script* do Unicode; [`Alphabet::None`]
/// é a sentinela sem escrita, usada por entradas de catálogo sem classificação.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alphabet {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Tamil,
    Telugu,
    Thai,
    None,
}

impl Alphabet {
    /// A *Script* Unicode ligada a esta escrita; `None` para a sentinela.
    fn script(&self) -> Option<Script> {
        match self {
            Alphabet::Arabic => Some(Script::Arabic),
            Alphabet::Armenian => Some(Script::Armenian),
            Alphabet::Bengali => Some(Script::Bengali),
            Alphabet::Cyrillic => Some(Script::Cyrillic),
            Alphabet::Devanagari => Some(Script::Devanagari),
            Alphabet::Georgian => Some(Script::Georgian),
            Alphabet::Greek => Some(Script::Greek),
            Alphabet::Gujarati => Some(Script::Gujarati),
            Alphabet::Gurmukhi => Some(Script::Gurmukhi),
            Alphabet::Han => Some(Script::Han),
            Alphabet::Hangul => Some(Script::Hangul),
            Alphabet::Hebrew => Some(Script::Hebrew),
            Alphabet::Hiragana => Some(Script::Hiragana),
            Alphabet::Katakana => Some(Script::Katakana),
            Alphabet::Latin => Some(Script::Latin),
            Alphabet::Tamil => Some(Script::Tamil),
            Alphabet::Telugu => Some(Script::Telugu),
            Alphabet::Thai => Some(Script::Thai),
            Alphabet::None => None,
        }
    }

    /// Verdadeiro sse a *Script* de `ch` é exatamente a escrita ligada a esta
    /// variante. A sentinela nunca casa com caractere algum.
    pub fn matches_char(&self, ch: char) -> bool {
        self.script().is_some_and(|script| ch.script() == script)
    }

    /// Verdadeiro sse **todo** caractere de `text` casa com esta escrita.
    pub fn matches_text(&self, text: &str) -> bool {
        self.script().is_some() && text.chars().all(|ch| self.matches_char(ch))
    }

    /// Mapa escrita → idioma para as escritas usadas por exatamente um idioma
    /// do catálogo.
    ///
    /// É o atalho do mecanismo de decisão: um texto restrito a uma dessas
    /// escritas identifica seu idioma sem consulta aos modelos de n-gramas.
    /// A tabela é derivada do catálogo uma única vez e compartilhada pelo
    /// processo inteiro.
    pub fn all_supporting_exactly_one_language() -> &'static HashMap<Alphabet, Language> {
        static TABLE: LazyLock<HashMap<Alphabet, Language>> = LazyLock::new(|| {
            let mut supporting: HashMap<Alphabet, Vec<Language>> = HashMap::new();
            for language in Language::all() {
                for alphabet in language.alphabets() {
                    supporting.entry(*alphabet).or_default().push(language);
                }
            }
            supporting
                .into_iter()
                .filter(|(alphabet, languages)| {
                    *alphabet != Alphabet::None && languages.len() == 1
                })
                .map(|(alphabet, languages)| (alphabet, languages[0]))
                .collect()
        });
        &TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_alphabet_matches_characters_of_its_script() {
        assert!(Alphabet::Latin.matches_char('a'));
        assert!(Alphabet::Latin.matches_char('ß'));
        assert!(Alphabet::Cyrillic.matches_char('я'));
        assert!(Alphabet::Greek.matches_char('β'));
        assert!(Alphabet::Han.matches_char('中'));
        assert!(Alphabet::Hiragana.matches_char('ひ'));
        assert!(Alphabet::Katakana.matches_char('カ'));
        assert!(Alphabet::Hangul.matches_char('한'));
        assert!(Alphabet::Arabic.matches_char('ا'));
        assert!(Alphabet::Hebrew.matches_char('א'));
        assert!(Alphabet::Thai.matches_char('ก'));

        assert!(!Alphabet::Latin.matches_char('я'));
        assert!(!Alphabet::Cyrillic.matches_char('a'));
    }

    #[test]
    fn test_none_sentinel_never_matches() {
        for ch in ['a', 'я', '中', ' ', '!'] {
            assert!(!Alphabet::None.matches_char(ch));
        }
        assert!(!Alphabet::None.matches_text("abc"));
    }

    #[test]
    fn test_alphabet_matches_text_requires_every_character() {
        assert!(Alphabet::Latin.matches_text("palavra"));
        assert!(Alphabet::Cyrillic.matches_text("слово"));
        assert!(!Alphabet::Latin.matches_text("palavra!"));
        assert!(!Alphabet::Latin.matches_text("palавra"));
    }

    #[test]
    fn test_each_character_matches_at_most_one_alphabet() {
        // exclusividade: a propriedade Script é uma partição, então nenhum
        // caractere pode casar com duas escritas da tabela
        for ch in ['a', 'ß', 'я', 'β', '中', 'ひ', 'カ', '한', 'ا', 'א', 'ก', '9', '!'] {
            let matching = Alphabet::iter()
                .filter(|alphabet| alphabet.matches_char(ch))
                .count();
            assert!(matching <= 1, "'{ch}' casa com {matching} escritas");
        }
    }

    #[test]
    fn test_alphabets_supporting_exactly_one_language() {
        let table = Alphabet::all_supporting_exactly_one_language();
        let expected = [
            (Alphabet::Armenian, Language::Armenian),
            (Alphabet::Bengali, Language::Bengali),
            (Alphabet::Georgian, Language::Georgian),
            (Alphabet::Greek, Language::Greek),
            (Alphabet::Gujarati, Language::Gujarati),
            (Alphabet::Gurmukhi, Language::Punjabi),
            (Alphabet::Hangul, Language::Korean),
            (Alphabet::Hebrew, Language::Hebrew),
            (Alphabet::Hiragana, Language::Japanese),
            (Alphabet::Katakana, Language::Japanese),
            (Alphabet::Tamil, Language::Tamil),
            (Alphabet::Telugu, Language::Telugu),
            (Alphabet::Thai, Language::Thai),
        ];
        assert_eq!(table.len(), expected.len());
        for (alphabet, language) in expected {
            assert_eq!(table.get(&alphabet), Some(&language), "{alphabet:?}");
        }
        // escritas compartilhadas por mais de um idioma ficam de fora
        assert!(!table.contains_key(&Alphabet::Latin));
        assert!(!table.contains_key(&Alphabet::Cyrillic));
        assert!(!table.contains_key(&Alphabet::Devanagari));
        assert!(!table.contains_key(&Alphabet::Han));
    }
}
