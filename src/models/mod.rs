pub mod auth;
pub mod catalogo;
pub mod consulta;
pub mod empresa;
pub mod historico;
pub mod observacao;
pub mod processo;
