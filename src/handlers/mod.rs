pub mod atividades;
pub mod catalogos;
pub mod consulta;
pub mod empresas;
pub mod observacoes;
pub mod processos;
