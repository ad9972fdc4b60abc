pub mod atividade_repo;
pub use atividade_repo::AtividadeRepo;
pub mod catalogo_repo;
pub use catalogo_repo::CatalogoRepo;
pub mod empresa_repo;
pub use empresa_repo::EmpresaRepo;
pub mod historico_repo;
pub use historico_repo::HistoricoRepo;
pub mod observacao_repo;
pub use observacao_repo::ObservacaoRepo;
pub mod processo_repo;
pub use processo_repo::ProcessoRepo;
