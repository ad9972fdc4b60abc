// src/models/consulta.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::formatters::limpar_cnpj;
use crate::models::empresa::{NovaAtividade, SalvarEmpresaPayload, TipoAtividade};

// Schema da resposta da ReceitaWS para consulta de CNPJ. O gateway
// repassa o corpo como chegou, inclusive o campo `status` ("OK" no
// sucesso); interpretá-lo fica por conta do consumidor.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AtividadeReceita {
    pub code: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegimeSimplificado {
    #[serde(default)]
    pub optante: bool,
    pub data_opcao: Option<String>,
    pub data_exclusao: Option<String>,
    pub ultima_atualizacao: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConsultaReceitaWS {
    pub status: String,
    pub cnpj: String,
    pub nome: String,
    pub fantasia: Option<String>,
    pub tipo: Option<String>,
    pub porte: Option<String>,
    pub abertura: Option<String>,
    #[serde(default)]
    pub atividade_principal: Vec<AtividadeReceita>,
    #[serde(default)]
    pub atividades_secundarias: Vec<AtividadeReceita>,
    pub natureza_juridica: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cep: Option<String>,
    pub bairro: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub situacao: Option<String>,
    pub data_situacao: Option<String>,
    #[serde(default)]
    pub simples: RegimeSimplificado,
    #[serde(default)]
    pub simei: RegimeSimplificado,
}

impl ConsultaReceitaWS {
    /// Normaliza o retorno do cadastro no formato interno de empresa,
    /// pronto para pré-preencher o formulário de criação.
    pub fn como_empresa(&self) -> SalvarEmpresaPayload {
        let mut atividades: Vec<NovaAtividade> = self
            .atividade_principal
            .iter()
            .map(|a| NovaAtividade {
                tipo: TipoAtividade::Principal,
                cnae_codigo: a.code.clone(),
                descricao: a.text.clone(),
            })
            .collect();
        atividades.extend(self.atividades_secundarias.iter().map(|a| NovaAtividade {
            tipo: TipoAtividade::Secundaria,
            cnae_codigo: a.code.clone(),
            descricao: a.text.clone(),
        }));

        SalvarEmpresaPayload {
            nome: self.nome.clone(),
            cnpj: limpar_cnpj(&self.cnpj),
            situacao: self.situacao.clone(),
            porte: self.porte.clone(),
            natureza_juridica: self.natureza_juridica.clone(),
            logradouro: self.logradouro.clone(),
            numero: self.numero.clone(),
            complemento: self.complemento.clone(),
            municipio: self.municipio.clone(),
            bairro: self.bairro.clone(),
            uf: self.uf.clone(),
            cep: self.cep.clone(),
            simples_optante: self.simples.optante,
            simples_data_opcao: self.simples.data_opcao.clone(),
            simples_data_exclusao: self.simples.data_exclusao.clone(),
            simei_optante: self.simei.optante,
            simei_data_opcao: self.simei.data_opcao.clone(),
            simei_data_exclusao: self.simei.data_exclusao.clone(),
            atividades,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETORNO_RECEITA: &str = r#"{
        "status": "OK",
        "cnpj": "11.222.333/0001-81",
        "nome": "PADARIA EXEMPLO LTDA",
        "fantasia": "PADARIA EXEMPLO",
        "tipo": "MATRIZ",
        "porte": "ME",
        "abertura": "03/11/2005",
        "atividade_principal": [
            { "code": "47.21-1-02", "text": "Padaria e confeitaria" }
        ],
        "atividades_secundarias": [
            { "code": "56.11-2-03", "text": "Lanchonetes" }
        ],
        "natureza_juridica": "206-2 - Sociedade Empresária Limitada",
        "logradouro": "RUA DAS FLORES",
        "numero": "100",
        "complemento": "",
        "cep": "01.001-000",
        "bairro": "CENTRO",
        "municipio": "SAO PAULO",
        "uf": "SP",
        "email": "contato@padaria.com",
        "telefone": "(11) 3000-0000",
        "situacao": "ATIVA",
        "data_situacao": "03/11/2005",
        "simples": { "optante": true, "data_opcao": "01/01/2007" },
        "simei": { "optante": false }
    }"#;

    #[test]
    fn desserializa_retorno_da_receita() {
        let consulta: ConsultaReceitaWS = serde_json::from_str(RETORNO_RECEITA).unwrap();
        assert_eq!(consulta.status, "OK");
        assert_eq!(consulta.atividade_principal.len(), 1);
        assert_eq!(consulta.atividades_secundarias.len(), 1);
        assert!(consulta.simples.optante);
        assert!(!consulta.simei.optante);
    }

    #[test]
    fn normaliza_para_o_formato_interno_de_empresa() {
        let consulta: ConsultaReceitaWS = serde_json::from_str(RETORNO_RECEITA).unwrap();
        let empresa = consulta.como_empresa();

        assert_eq!(empresa.nome, "PADARIA EXEMPLO LTDA");
        // O CNPJ entra no banco sem pontuação.
        assert_eq!(empresa.cnpj, "11222333000181");
        assert_eq!(empresa.atividades.len(), 2);
        assert_eq!(empresa.atividades[0].tipo, TipoAtividade::Principal);
        assert_eq!(empresa.atividades[1].tipo, TipoAtividade::Secundaria);
        assert!(empresa.simples_optante);
        assert_eq!(empresa.simples_data_opcao.as_deref(), Some("01/01/2007"));
    }
}
