// Testes de integração do fluxo de processos: exigem um Postgres
// apontado por TEST_DATABASE_URL; sem a variável eles não rodam.

mod common;

use common::PgTestContext;

use legaliza_backend::common::error::AppError;
use legaliza_backend::config::AppState;
use legaliza_backend::models::{
    empresa::{NovaAtividade, SalvarEmpresaPayload, TipoAtividade},
    processo::{NovaObservacao, Processo, SalvarProcessoPayload, TipoAlteracaoSelecionado},
};

const USUARIO: &str = "teste@legaliza.com.br";

async fn id_tipo_processo(state: &AppState, nome: &str) -> i64 {
    state
        .catalogo_repo
        .listar_tipos_processo()
        .await
        .unwrap()
        .into_iter()
        .find(|t| t.nome == nome)
        .expect("tipo de processo do seed")
        .id
}

async fn id_status(state: &AppState, nome: &str) -> i64 {
    state
        .catalogo_repo
        .listar_status()
        .await
        .unwrap()
        .into_iter()
        .find(|s| s.nome == nome)
        .expect("status do seed")
        .id
}

fn payload_empresa(nome: &str) -> SalvarEmpresaPayload {
    SalvarEmpresaPayload {
        nome: nome.to_string(),
        cnpj: "11.222.333/0001-81".to_string(),
        situacao: Some("ATIVA".to_string()),
        porte: Some("ME".to_string()),
        atividades: vec![NovaAtividade {
            tipo: TipoAtividade::Principal,
            cnae_codigo: "47.21-1-02".to_string(),
            descricao: "Padaria e confeitaria".to_string(),
        }],
        ..Default::default()
    }
}

/// Cria um processo já com empresa nova, no tipo e com os vínculos dados.
async fn criar_processo(
    state: &AppState,
    tipo_nome: &str,
    tipos_alteracao: Vec<TipoAlteracaoSelecionado>,
) -> Processo {
    let payload = SalvarProcessoPayload {
        empresa_id: None,
        empresa: Some(payload_empresa("Empresa Teste LTDA")),
        responsavel_id: None,
        tipo_processo_id: id_tipo_processo(state, tipo_nome).await,
        status_id: id_status(state, "Em Andamento").await,
        tipos_alteracao,
        observacoes: vec![],
        data_envio_junta: None,
        data_conclusao: None,
    };

    state.processo_service.criar(&payload, USUARIO).await.unwrap()
}

fn selecionado(id: i64) -> TipoAlteracaoSelecionado {
    TipoAlteracaoSelecionado { id, id_tabela: None }
}

#[tokio::test]
async fn cenario_constituicao_cria_empresa_processo_e_historicos() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let payload = SalvarProcessoPayload {
        empresa_id: None,
        empresa: Some(payload_empresa("Nova Empresa LTDA")),
        responsavel_id: None,
        tipo_processo_id: id_tipo_processo(state, "Constituição").await,
        status_id: id_status(state, "Em Andamento").await,
        tipos_alteracao: vec![],
        observacoes: vec![NovaObservacao {
            texto: "Aguardando contrato social assinado".to_string(),
        }],
        data_envio_junta: None,
        data_conclusao: None,
    };

    let processo = state.processo_service.criar(&payload, USUARIO).await.unwrap();

    // A empresa foi criada junto, com a atividade e o CNPJ formatado.
    let empresa = processo.empresa.as_ref().expect("empresa no detalhe");
    assert_eq!(empresa.nome, "Nova Empresa LTDA");
    assert_eq!(empresa.cnpj, "11.222.333/0001-81");
    assert_eq!(empresa.atividades.as_ref().unwrap().len(), 1);

    // Observação inicial gravada e assinada pelo usuário da sessão.
    assert_eq!(processo.observacoes.len(), 1);
    assert_eq!(processo.observacoes[0].criado_por.as_deref(), Some(USUARIO));

    // Exatamente uma entrada "Criação" para a empresa e uma para o processo.
    let hist_empresa = state
        .historico_service
        .listar_por_empresa(empresa.id)
        .await
        .unwrap();
    assert_eq!(hist_empresa.len(), 1);
    assert_eq!(hist_empresa[0].campo_alterado, "Criação");
    assert_eq!(hist_empresa[0].alterado_por.as_deref(), Some(USUARIO));

    let hist_processo = state
        .historico_service
        .listar_por_processo(processo.id)
        .await
        .unwrap();
    assert_eq!(hist_processo.len(), 1);
    assert_eq!(hist_processo[0].campo_alterado, "Criação");
    assert!(hist_processo[0].valor_anterior.is_none());
    assert!(hist_processo[0].valor_novo.is_some());

    ctx.cleanup().await;
}

#[tokio::test]
async fn reconciliacao_remove_insere_e_preserva_linha_mantida() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let catalogo = state.catalogo_repo.listar_tipos_alteracao().await.unwrap();
    let (t_a, t_b, t_c) = (catalogo[0].id, catalogo[1].id, catalogo[2].id);

    let processo = criar_processo(state, "Alteração", vec![selecionado(t_a), selecionado(t_b)]).await;

    let antes = processo.tipos_alteracao.clone();
    assert_eq!(antes.len(), 2);
    let linha_mantida = antes
        .iter()
        .find(|v| v.id == t_b)
        .expect("vínculo de t_b")
        .id_tabela;

    // Desejado: sai t_a, fica t_b, entra t_c.
    state
        .processo_service
        .sincronizar_tipos_alteracao(processo.id, &[selecionado(t_b), selecionado(t_c)])
        .await
        .unwrap();

    let depois = state
        .processo_service
        .buscar_detalhado(processo.id)
        .await
        .unwrap()
        .tipos_alteracao;

    let mut ids: Vec<i64> = depois.iter().map(|v| v.id).collect();
    ids.sort();
    let mut esperado = vec![t_b, t_c];
    esperado.sort();
    assert_eq!(ids, esperado);

    // A linha pivot de t_b não foi recriada.
    let vinculo_b = depois.iter().find(|v| v.id == t_b).unwrap();
    assert_eq!(vinculo_b.id_tabela, linha_mantida);

    ctx.cleanup().await;
}

#[tokio::test]
async fn reconciliacao_e_idempotente() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let catalogo = state.catalogo_repo.listar_tipos_alteracao().await.unwrap();
    let desejados = vec![selecionado(catalogo[0].id), selecionado(catalogo[1].id)];

    let processo = criar_processo(state, "Alteração", vec![]).await;

    state
        .processo_service
        .sincronizar_tipos_alteracao(processo.id, &desejados)
        .await
        .unwrap();
    let primeira = state
        .processo_service
        .buscar_detalhado(processo.id)
        .await
        .unwrap()
        .tipos_alteracao;

    state
        .processo_service
        .sincronizar_tipos_alteracao(processo.id, &desejados)
        .await
        .unwrap();
    let segunda = state
        .processo_service
        .buscar_detalhado(processo.id)
        .await
        .unwrap()
        .tipos_alteracao;

    // Segunda passada não muda nada — nem as linhas pivot.
    let chaves = |v: &Vec<legaliza_backend::models::catalogo::TipoAlteracaoVinculado>| {
        let mut c: Vec<(i64, i64)> = v.iter().map(|t| (t.id, t.id_tabela)).collect();
        c.sort();
        c
    };
    assert_eq!(chaves(&primeira), chaves(&segunda));
    assert_eq!(primeira.len(), 2);

    ctx.cleanup().await;
}

#[tokio::test]
async fn lista_desejada_vazia_remove_todos_os_vinculos() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let catalogo = state.catalogo_repo.listar_tipos_alteracao().await.unwrap();
    let processo = criar_processo(
        state,
        "Alteração",
        vec![selecionado(catalogo[0].id), selecionado(catalogo[1].id)],
    )
    .await;
    assert_eq!(processo.tipos_alteracao.len(), 2);

    state
        .processo_service
        .sincronizar_tipos_alteracao(processo.id, &[])
        .await
        .unwrap();

    let depois = state
        .processo_service
        .buscar_detalhado(processo.id)
        .await
        .unwrap();
    assert!(depois.tipos_alteracao.is_empty());

    ctx.cleanup().await;
}

#[tokio::test]
async fn tipo_sem_alteracao_forca_conjunto_vazio() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    // Mesmo mandando tipos de alteração, um processo de constituição
    // não guarda vínculo nenhum.
    let catalogo = state.catalogo_repo.listar_tipos_alteracao().await.unwrap();
    let processo = criar_processo(state, "Constituição", vec![selecionado(catalogo[0].id)]).await;

    assert!(processo.tipos_alteracao.is_empty());

    ctx.cleanup().await;
}

#[tokio::test]
async fn soft_delete_some_da_listagem_mas_mantem_historico() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let processo = criar_processo(state, "Baixa", vec![]).await;

    state
        .processo_service
        .excluir(processo.id, USUARIO)
        .await
        .unwrap();

    let listagem = state.processo_service.listar().await.unwrap();
    assert!(listagem.iter().all(|p| p.id != processo.id));

    // Criação + Exclusão continuam consultáveis depois do soft delete.
    let historico = state
        .historico_service
        .listar_por_processo(processo.id)
        .await
        .unwrap();
    assert_eq!(historico.len(), 2);
    assert_eq!(historico[0].campo_alterado, "Exclusão");
    assert_eq!(historico[1].campo_alterado, "Criação");

    ctx.cleanup().await;
}

#[tokio::test]
async fn processo_excluido_nao_aceita_nova_mutacao() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let processo = criar_processo(state, "Baixa", vec![]).await;
    state
        .processo_service
        .excluir(processo.id, USUARIO)
        .await
        .unwrap();

    // Excluir de novo não passa.
    let segunda_exclusao = state.processo_service.excluir(processo.id, USUARIO).await;
    assert!(matches!(segunda_exclusao, Err(AppError::NaoEncontrado)));

    // Atualizar também não.
    let payload = SalvarProcessoPayload {
        empresa_id: Some(processo.empresa_id),
        empresa: None,
        responsavel_id: None,
        tipo_processo_id: id_tipo_processo(state, "Baixa").await,
        status_id: id_status(state, "Concluído").await,
        tipos_alteracao: vec![],
        observacoes: vec![],
        data_envio_junta: None,
        data_conclusao: None,
    };
    let atualizacao = state
        .processo_service
        .atualizar(processo.id, &payload, USUARIO)
        .await;
    assert!(matches!(atualizacao, Err(AppError::NaoEncontrado)));

    // O histórico segue com uma única "Exclusão".
    let historico = state
        .historico_service
        .listar_por_processo(processo.id)
        .await
        .unwrap();
    let campos: Vec<&str> = historico.iter().map(|h| h.campo_alterado.as_str()).collect();
    assert_eq!(campos, vec!["Exclusão", "Criação"]);

    ctx.cleanup().await;
}

#[tokio::test]
async fn empresa_excluida_nao_aceita_nova_mutacao() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let empresa = state
        .empresa_service
        .criar(&payload_empresa("Empresa Encerrada LTDA"), USUARIO)
        .await
        .unwrap();
    state
        .empresa_service
        .excluir(empresa.id, USUARIO)
        .await
        .unwrap();

    let segunda_exclusao = state.empresa_service.excluir(empresa.id, USUARIO).await;
    assert!(matches!(segunda_exclusao, Err(AppError::NaoEncontrado)));

    let atualizacao = state
        .empresa_service
        .atualizar(empresa.id, &payload_empresa("Empresa Encerrada LTDA"), USUARIO)
        .await;
    assert!(matches!(atualizacao, Err(AppError::NaoEncontrado)));

    let historico = state
        .historico_service
        .listar_por_empresa(empresa.id)
        .await
        .unwrap();
    let campos: Vec<&str> = historico.iter().map(|h| h.campo_alterado.as_str()).collect();
    assert_eq!(campos, vec!["Exclusão", "Criação"]);

    ctx.cleanup().await;
}

#[tokio::test]
async fn cada_mutacao_gera_exatamente_uma_entrada_de_historico() {
    let Some(ctx) = PgTestContext::new().await else {
        eprintln!("TEST_DATABASE_URL não definida; pulando");
        return;
    };
    let state = &ctx.state;

    let processo = criar_processo(state, "Regularização", vec![]).await;

    let payload = SalvarProcessoPayload {
        empresa_id: Some(processo.empresa_id),
        empresa: None,
        responsavel_id: None,
        tipo_processo_id: id_tipo_processo(state, "Regularização").await,
        status_id: id_status(state, "Concluído").await,
        tipos_alteracao: vec![],
        observacoes: vec![],
        data_envio_junta: None,
        data_conclusao: None,
    };
    state
        .processo_service
        .atualizar(processo.id, &payload, USUARIO)
        .await
        .unwrap();

    state
        .processo_service
        .excluir(processo.id, USUARIO)
        .await
        .unwrap();

    let historico = state
        .historico_service
        .listar_por_processo(processo.id)
        .await
        .unwrap();

    // Uma entrada por mutação: Criação, Atualização, Exclusão.
    assert_eq!(historico.len(), 3);
    let campos: Vec<&str> = historico.iter().map(|h| h.campo_alterado.as_str()).collect();
    assert_eq!(campos, vec!["Exclusão", "Atualização", "Criação"]);

    ctx.cleanup().await;
}
