//! # Catálogo Estático de Idiomas
//!
//! Os 75 idiomas suportados pelo sistema, com seus códigos ISO 639-1/639-3,
//! os alfabetos (escritas Unicode) em que cada um é escrito e, quando existe,
//! o conjunto de caracteres exclusivos daquele idioma (ex.: "ß" só ocorre em
//! alemão).
//!
//! Este catálogo é dado de referência consumido pelo núcleo estatístico, não
//! computado por ele: as tabelas de capacidade de alfabeto
//! ([`crate::alphabet`]) e os filtros de eliminação ([`crate::filters`]) são
//! derivados daqui uma única vez na inicialização do processo.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::alphabet::Alphabet;

/// Idiomas detectáveis, identificados pelo nome em inglês (convenção dos
/// arquivos de modelo, onde a tag é serializada em caixa alta).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Armenian,
    Azerbaijani,
    Basque,
    Belarusian,
    Bengali,
    Bokmal,
    Bosnian,
    Bulgarian,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    Ganda,
    Georgian,
    German,
    Greek,
    Gujarati,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Kazakh,
    Korean,
    Latin,
    Latvian,
    Lithuanian,
    Macedonian,
    Malay,
    Maori,
    Marathi,
    Mongolian,
    Nynorsk,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Serbian,
    Shona,
    Slovak,
    Slovene,
    Somali,
    Sotho,
    Spanish,
    Swahili,
    Swedish,
    Tagalog,
    Tamil,
    Telugu,
    Thai,
    Tsonga,
    Tswana,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
    Xhosa,
    Yoruba,
    Zulu,
}

impl Language {
    /// Todos os idiomas do catálogo, em ordem alfabética de declaração.
    pub fn all() -> impl Iterator<Item = Language> {
        Language::iter()
    }

    /// Código ISO 639-1 (duas letras) do idioma.
    pub fn iso_code_639_1(&self) -> &'static str {
        match self {
            Language::Afrikaans => "af",
            Language::Albanian => "sq",
            Language::Arabic => "ar",
            Language::Armenian => "hy",
            Language::Azerbaijani => "az",
            Language::Basque => "eu",
            Language::Belarusian => "be",
            Language::Bengali => "bn",
            Language::Bokmal => "nb",
            Language::Bosnian => "bs",
            Language::Bulgarian => "bg",
            Language::Catalan => "ca",
            Language::Chinese => "zh",
            Language::Croatian => "hr",
            Language::Czech => "cs",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Esperanto => "eo",
            Language::Estonian => "et",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Ganda => "lg",
            Language::Georgian => "ka",
            Language::German => "de",
            Language::Greek => "el",
            Language::Gujarati => "gu",
            Language::Hebrew => "he",
            Language::Hindi => "hi",
            Language::Hungarian => "hu",
            Language::Icelandic => "is",
            Language::Indonesian => "id",
            Language::Irish => "ga",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Kazakh => "kk",
            Language::Korean => "ko",
            Language::Latin => "la",
            Language::Latvian => "lv",
            Language::Lithuanian => "lt",
            Language::Macedonian => "mk",
            Language::Malay => "ms",
            Language::Maori => "mi",
            Language::Marathi => "mr",
            Language::Mongolian => "mn",
            Language::Nynorsk => "nn",
            Language::Persian => "fa",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Punjabi => "pa",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Serbian => "sr",
            Language::Shona => "sn",
            Language::Slovak => "sk",
            Language::Slovene => "sl",
            Language::Somali => "so",
            Language::Sotho => "st",
            Language::Spanish => "es",
            Language::Swahili => "sw",
            Language::Swedish => "sv",
            Language::Tagalog => "tl",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Thai => "th",
            Language::Tsonga => "ts",
            Language::Tswana => "tn",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Urdu => "ur",
            Language::Vietnamese => "vi",
            Language::Welsh => "cy",
            Language::Xhosa => "xh",
            Language::Yoruba => "yo",
            Language::Zulu => "zu",
        }
    }

    /// Código ISO 639-3 (três letras) do idioma.
    pub fn iso_code_639_3(&self) -> &'static str {
        match self {
            Language::Afrikaans => "afr",
            Language::Albanian => "sqi",
            Language::Arabic => "ara",
            Language::Armenian => "hye",
            Language::Azerbaijani => "aze",
            Language::Basque => "eus",
            Language::Belarusian => "bel",
            Language::Bengali => "ben",
            Language::Bokmal => "nob",
            Language::Bosnian => "bos",
            Language::Bulgarian => "bul",
            Language::Catalan => "cat",
            Language::Chinese => "zho",
            Language::Croatian => "hrv",
            Language::Czech => "ces",
            Language::Danish => "dan",
            Language::Dutch => "nld",
            Language::English => "eng",
            Language::Esperanto => "epo",
            Language::Estonian => "est",
            Language::Finnish => "fin",
            Language::French => "fra",
            Language::Ganda => "lug",
            Language::Georgian => "kat",
            Language::German => "deu",
            Language::Greek => "ell",
            Language::Gujarati => "guj",
            Language::Hebrew => "heb",
            Language::Hindi => "hin",
            Language::Hungarian => "hun",
            Language::Icelandic => "isl",
            Language::Indonesian => "ind",
            Language::Irish => "gle",
            Language::Italian => "ita",
            Language::Japanese => "jpn",
            Language::Kazakh => "kaz",
            Language::Korean => "kor",
            Language::Latin => "lat",
            Language::Latvian => "lav",
            Language::Lithuanian => "lit",
            Language::Macedonian => "mkd",
            Language::Malay => "msa",
            Language::Maori => "mri",
            Language::Marathi => "mar",
            Language::Mongolian => "mon",
            Language::Nynorsk => "nno",
            Language::Persian => "fas",
            Language::Polish => "pol",
            Language::Portuguese => "por",
            Language::Punjabi => "pan",
            Language::Romanian => "ron",
            Language::Russian => "rus",
            Language::Serbian => "srp",
            Language::Shona => "sna",
            Language::Slovak => "slk",
            Language::Slovene => "slv",
            Language::Somali => "som",
            Language::Sotho => "sot",
            Language::Spanish => "spa",
            Language::Swahili => "swa",
            Language::Swedish => "swe",
            Language::Tagalog => "tgl",
            Language::Tamil => "tam",
            Language::Telugu => "tel",
            Language::Thai => "tha",
            Language::Tsonga => "tso",
            Language::Tswana => "tsn",
            Language::Turkish => "tur",
            Language::Ukrainian => "ukr",
            Language::Urdu => "urd",
            Language::Vietnamese => "vie",
            Language::Welsh => "cym",
            Language::Xhosa => "xho",
            Language::Yoruba => "yor",
            Language::Zulu => "zul",
        }
    }

    /// Busca pelo código ISO 639-1; `None` para códigos não catalogados.
    pub fn from_iso_code_639_1(code: &str) -> Option<Language> {
        Language::iter().find(|language| language.iso_code_639_1() == code)
    }

    /// Busca pelo código ISO 639-3; `None` para códigos não catalogados.
    pub fn from_iso_code_639_3(code: &str) -> Option<Language> {
        Language::iter().find(|language| language.iso_code_639_3() == code)
    }

    /// Alfabetos (escritas Unicode) em que o idioma é escrito.
    pub fn alphabets(&self) -> &'static [Alphabet] {
        match self {
            Language::Arabic | Language::Persian | Language::Urdu => &[Alphabet::Arabic],
            Language::Belarusian
            | Language::Bulgarian
            | Language::Kazakh
            | Language::Macedonian
            | Language::Mongolian
            | Language::Russian
            | Language::Serbian
            | Language::Ukrainian => &[Alphabet::Cyrillic],
            Language::Armenian => &[Alphabet::Armenian],
            Language::Bengali => &[Alphabet::Bengali],
            Language::Georgian => &[Alphabet::Georgian],
            Language::Greek => &[Alphabet::Greek],
            Language::Gujarati => &[Alphabet::Gujarati],
            Language::Hebrew => &[Alphabet::Hebrew],
            Language::Hindi | Language::Marathi => &[Alphabet::Devanagari],
            Language::Chinese => &[Alphabet::Han],
            Language::Japanese => &[Alphabet::Hiragana, Alphabet::Katakana, Alphabet::Han],
            Language::Korean => &[Alphabet::Hangul],
            Language::Punjabi => &[Alphabet::Gurmukhi],
            Language::Tamil => &[Alphabet::Tamil],
            Language::Telugu => &[Alphabet::Telugu],
            Language::Thai => &[Alphabet::Thai],
            // todos os demais idiomas do catálogo usam o alfabeto latino
            _ => &[Alphabet::Latin],
        }
    }

    /// Caracteres que, dentro do catálogo, ocorrem somente neste idioma.
    ///
    /// É o sinal mais barato de desambiguação disponível: encontrar "ß" no
    /// texto já restringe o candidato a alemão sem nenhuma pontuação de
    /// n-gramas.
    pub fn unique_characters(&self) -> Option<&'static str> {
        match self {
            Language::Azerbaijani => Some("Əə"),
            Language::Catalan => Some("Ïï"),
            Language::Czech => Some("ĚěŘřŮů"),
            Language::Esperanto => Some("ĈĉĜĝĤĥĴĵŜŝŬŭ"),
            Language::German => Some("ß"),
            Language::Hungarian => Some("ŐőŰű"),
            Language::Kazakh => Some("ӘәҒғҚқҢңҰұ"),
            Language::Latvian => Some("ĢģĶķĻļŅņ"),
            Language::Lithuanian => Some("ĖėĮįŲų"),
            Language::Macedonian => Some("ЃѓЅѕЌќЏџ"),
            Language::Marathi => Some("ळ"),
            Language::Mongolian => Some("ӨөҮү"),
            Language::Polish => Some("ŁłŃńŚśŹź"),
            Language::Romanian => Some("Țţ"),
            Language::Serbian => Some("ЂђЋћ"),
            Language::Slovak => Some("ĹĺĽľŔŕ"),
            Language::Spanish => Some("¿¡"),
            Language::Ukrainian => Some("ҐґЄєЇї"),
            Language::Vietnamese => Some(
                "ẰằẦầẲẳẨẩẴẵẪẫẮắẤấẠạẶặẬậỀềẺẻỂểẼẽỄễẾếỆệỈỉĨĩỊịƠơỒồỜờỎỏỔổỞởÕõỖỗỠỡỐốỚớỘộỢợƯư\
                 ỪừỦủỬửŨũỮữỨứỤụỰựỲỳỶỷỸỹỴỵ",
            ),
            Language::Yoruba => Some("Ṣṣ"),
            _ => None,
        }
    }
}
