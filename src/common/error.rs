use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O único erro "de negócio" que o domínio conhece é "não encontrado por id";
// a camada de UI converte tudo isso em notificações (toasts) e segue em frente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Contato não encontrado")]
    ContactNotFound,

    #[error("Negociação não encontrada")]
    DealNotFound,

    #[error("Atividade não encontrada")]
    ActivityNotFound,

    #[error("Tarefa não encontrada")]
    TaskNotFound,

    #[error("Valor monetário inválido: '{0}'")]
    InvalidCurrency(String),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Todo erro aqui é recuperável; esse helper existe só para a UI decidir
    /// a mensagem do toast sem dar match no enum inteiro.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ContactNotFound
                | AppError::DealNotFound
                | AppError::ActivityNotFound
                | AppError::TaskNotFound
        )
    }
}
