pub mod consulta_cnpj;
pub mod empresa_service;
pub mod historico_service;
pub mod processo_service;
pub mod sincronizacao;
