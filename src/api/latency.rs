// src/api/latency.rs

use std::time::Duration;

// A API mock simula a latência de rede antes de cada mutação em memória.
// Os tempos vêm do comportamento observado: 500ms para listagens e escritas,
// 300ms para busca por id, move e toggle.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub base: Duration,
    pub quick: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(500),
            quick: Duration::from_millis(300),
        }
    }
}

impl Latency {
    /// Latência zero, para testes.
    pub fn none() -> Self {
        Self {
            base: Duration::ZERO,
            quick: Duration::ZERO,
        }
    }

    pub(crate) async fn base_delay(&self) {
        tokio::time::sleep(self.base).await;
    }

    pub(crate) async fn quick_delay(&self) {
        tokio::time::sleep(self.quick).await;
    }
}
