// src/services/sincronizacao.rs

use std::collections::HashSet;

use crate::models::processo::{TipoAlteracaoSelecionado, VinculoTipoAlteracao};

/// Resultado do planejamento: ids de linha pivot a excluir e ids de
/// catálogo a inserir para o processo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanoSincronizacao {
    pub remover: Vec<i64>,
    pub inserir: Vec<i64>,
}

impl PlanoSincronizacao {
    pub fn vazio(&self) -> bool {
        self.remover.is_empty() && self.inserir.is_empty()
    }
}

/// Calcula o conjunto de exclusões e inserções que leva os vínculos
/// atuais de um processo ao conjunto desejado.
///
/// A pertinência é decidida estritamente pelo id de catálogo: uma linha
/// atual sobrevive se e somente se o seu `tipo_alteracao_id` aparece na
/// lista desejada. O `id_tabela` da linha serve apenas para endereçar a
/// exclusão, nunca para casar com um id de catálogo.
///
/// Ids de catálogo repetidos na lista desejada contam uma vez só — a
/// pivot tem unicidade por (processo, tipo de alteração).
pub fn planejar(
    atuais: &[VinculoTipoAlteracao],
    desejados: &[TipoAlteracaoSelecionado],
) -> PlanoSincronizacao {
    let ids_desejados: HashSet<i64> = desejados.iter().map(|d| d.id).collect();
    let ids_atuais: HashSet<i64> = atuais.iter().map(|a| a.tipo_alteracao_id).collect();

    let remover: Vec<i64> = atuais
        .iter()
        .filter(|atual| !ids_desejados.contains(&atual.tipo_alteracao_id))
        .map(|atual| atual.id_tabela)
        .collect();

    let mut inserir: Vec<i64> = Vec::new();
    let mut vistos: HashSet<i64> = HashSet::new();
    for desejado in desejados {
        if !ids_atuais.contains(&desejado.id) && vistos.insert(desejado.id) {
            inserir.push(desejado.id);
        }
    }

    PlanoSincronizacao { remover, inserir }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atual(id_tabela: i64, tipo: i64) -> VinculoTipoAlteracao {
        VinculoTipoAlteracao {
            id_tabela,
            tipo_alteracao_id: tipo,
        }
    }

    fn desejado(id: i64) -> TipoAlteracaoSelecionado {
        TipoAlteracaoSelecionado {
            id,
            id_tabela: None,
        }
    }

    fn desejado_vinculado(id: i64, id_tabela: i64) -> TipoAlteracaoSelecionado {
        TipoAlteracaoSelecionado {
            id,
            id_tabela: Some(id_tabela),
        }
    }

    #[test]
    fn remove_o_que_saiu_e_insere_o_que_entrou() {
        // Vínculos atuais: linha 1 -> tipo 5, linha 2 -> tipo 6.
        // Desejado: tipos 6 e 7.
        let atuais = vec![atual(1, 5), atual(2, 6)];
        let desejados = vec![desejado(6), desejado(7)];

        let plano = planejar(&atuais, &desejados);

        assert_eq!(plano.remover, vec![1]);
        assert_eq!(plano.inserir, vec![7]);
    }

    #[test]
    fn lista_desejada_vazia_remove_tudo() {
        let atuais = vec![atual(10, 1), atual(11, 2)];
        let plano = planejar(&atuais, &[]);

        assert_eq!(plano.remover, vec![10, 11]);
        assert!(plano.inserir.is_empty());
    }

    #[test]
    fn sem_vinculos_atuais_insere_tudo() {
        let desejados = vec![desejado(3), desejado(4)];
        let plano = planejar(&[], &desejados);

        assert!(plano.remover.is_empty());
        assert_eq!(plano.inserir, vec![3, 4]);
    }

    #[test]
    fn listas_iguais_geram_plano_vazio() {
        let atuais = vec![atual(1, 5), atual(2, 6)];
        let desejados = vec![desejado_vinculado(5, 1), desejado_vinculado(6, 2)];

        let plano = planejar(&atuais, &desejados);
        assert!(plano.vazio());
    }

    #[test]
    fn id_de_catalogo_igual_a_id_de_tabela_nao_confunde() {
        // Linha pivot 7 aponta para o tipo 5. O desejado traz o tipo de
        // catálogo 7 — mesmo número da linha pivot, mas outro universo
        // de ids. A linha 7 deve cair e o tipo 7 deve entrar.
        let atuais = vec![atual(7, 5)];
        let desejados = vec![desejado(7)];

        let plano = planejar(&atuais, &desejados);

        assert_eq!(plano.remover, vec![7]);
        assert_eq!(plano.inserir, vec![7]);
    }

    #[test]
    fn desejados_duplicados_inserem_uma_vez() {
        let desejados = vec![desejado(3), desejado(3), desejado(3)];
        let plano = planejar(&[], &desejados);

        assert_eq!(plano.inserir, vec![3]);
    }

    #[test]
    fn planejar_sobre_o_resultado_aplicado_e_no_op() {
        // Idempotência: aplicar o plano e planejar de novo com a mesma
        // lista desejada não gera trabalho.
        let atuais = vec![atual(1, 5), atual(2, 6)];
        let desejados = vec![desejado(6), desejado(7)];
        let plano = planejar(&atuais, &desejados);

        // Simula a aplicação: remove a linha 1, insere o tipo 7 numa
        // linha nova (id 3).
        let mut pos_aplicacao: Vec<VinculoTipoAlteracao> = atuais
            .into_iter()
            .filter(|a| !plano.remover.contains(&a.id_tabela))
            .collect();
        pos_aplicacao.extend(plano.inserir.iter().map(|&tipo| atual(3, tipo)));

        let segundo_plano = planejar(&pos_aplicacao, &desejados);
        assert!(segundo_plano.vazio());
    }
}
