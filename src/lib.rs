// Núcleo de um dashboard de CRM do lado do cliente: entidades planas,
// uma API mock em memória com latência simulada, um store explícito com
// uma fatia por entidade e serviços que orquestram os dois.

pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod store;
