//! # Erros do Núcleo Estatístico
//!
//! Taxonomia única de falhas do crate. Nenhum erro é recuperado internamente:
//! toda construção inválida é rejeitada na origem e propagada ao chamador,
//! que decide se pula um idioma, aborta o carregamento ou aborta o treinamento.
//! Não existe modo de sucesso parcial: ou o modelo/n-grama/fração é totalmente
//! válido, ou a construção falha por inteiro.

use thiserror::Error;

/// Erros produzidos pelas operações de construção, treinamento e
/// (de)serialização dos modelos estatísticos.
#[derive(Debug, Error)]
pub enum IdiomaError {
    /// Violação de intervalo: n-gramas carregam no máximo 5 caracteres.
    #[error("comprimento do n-grama '{0}' fora do intervalo 0..=5")]
    NgramLength(String),

    /// Violação de intervalo: as ordens de n-grama válidas são 1 a 5.
    #[error("ordem de n-grama {0} fora do intervalo 1..=5")]
    NgramOrder(usize),

    /// Esgotamento de sequência: o zerograma é a ordem mais baixa que existe.
    /// Indica que o chamador ignorou a checagem de "há próximo" do iterador.
    #[error("o zerograma é o n-grama de ordem mais baixa e não pode ser decrementado")]
    ZerogramDecrement,

    /// Intervalo de backoff invertido: o início deve ter ordem maior ou igual ao fim.
    #[error("'{start}' deve ser de ordem maior ou igual a '{end}'")]
    InvalidNgramRange { start: String, end: String },

    /// Invalidez aritmética: divisão por zero ao construir uma fração.
    #[error("denominador zero na fração '{numerator}/0'")]
    ZeroDenominator { numerator: i32 },

    /// Invalidez aritmética: a forma reduzida não cabe em 32 bits
    /// (só ocorre nos extremos envolvendo `i32::MIN`).
    #[error("overflow ao reduzir a fração '{numerator}/{denominator}'")]
    FractionOverflow { numerator: i32, denominator: i32 },

    /// Chave de fração malformada em um arquivo de modelo (esperado "num/den").
    #[error("chave de fração inválida '{0}' no modelo serializado")]
    InvalidFractionKey(String),

    /// Falha estrutural de parse: campo inesperado ou JSON malformado.
    /// Fatal, nunca repetida.
    #[error("falha ao ler o modelo serializado: {0}")]
    ModelFormat(#[from] serde_json::Error),

    /// Falha de E/S ao escrever ou ler um modelo.
    #[error("falha de E/S no arquivo de modelo: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias de resultado usado em todo o crate.
pub type Result<T> = std::result::Result<T, IdiomaError>;
