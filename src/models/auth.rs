// src/models/auth.rs

use serde::{Deserialize, Serialize};

// Estrutura de dados ("claims") dentro do JWT emitido pelo provedor de
// identidade. O backend só valida e lê; não emite tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (e-mail do usuário)
    pub exp: usize,  // Expiration time
}

/// Usuário autenticado da sessão corrente. É quem assina as entradas da
/// trilha de auditoria.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}
