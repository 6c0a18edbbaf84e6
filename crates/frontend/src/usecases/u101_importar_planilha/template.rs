//! Geração do modelo de planilha para importação de indicadores.
//!
//! Linha 1: cabeçalhos técnicos; linha 2: instruções de preenchimento;
//! linha 3: um exemplo preenchido com a primeira entrada de cada tabela de
//! referência carregada.

use crate::domain::a010_controle_indicador::ui::model::Lookups;
use crate::shared::excel::writer::write_workbook;
use crate::shared::export::{blob_binario, download_blob};
use contracts::domain::a010_controle_indicador::planilha::COLUNAS_MODELO;

const MIME_XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const NOME_ARQUIVO_MODELO: &str = "modelo_controle_indicadores_projetos_vinculados.xlsx";

/// Monta as três linhas do modelo (cabeçalhos, instruções, exemplo)
pub fn montar_linhas(lookups: &Lookups) -> Vec<Vec<String>> {
    let cabecalhos: Vec<String> = COLUNAS_MODELO.iter().map(|c| c.to_string()).collect();

    let instrucoes: Vec<String> = vec![
        "Nome do Projeto (apenas vinculados)".to_string(),
        "Nome da Categoria".to_string(),
        "Nome do indicador".to_string(),
        "Observações (opcional)".to_string(),
        "Descrição detalhada do indicador (opcional)".to_string(),
        "Descrição resumida do indicador (opcional)".to_string(),
        "Nome do tipo de indicador".to_string(),
        "Nome da subcategoria".to_string(),
        "Formato: AAAA-MM-DD".to_string(),
        "dia, mês, ano, sem recorrencia".to_string(),
        "Número inteiro".to_string(),
        "Número de repetições (0 ou mais)".to_string(),
        "SIM ou NÃO".to_string(),
    ];

    let exemplos = lookups.primeiro_de_cada();
    let pegar = |chave: &str, padrao: &str| {
        exemplos
            .get(chave)
            .cloned()
            .unwrap_or_else(|| padrao.to_string())
    };

    let exemplo: Vec<String> = vec![
        pegar("projeto", "Nome do Projeto"),
        pegar("categoria", "Nome da Categoria"),
        "Taxa de conversão".to_string(),
        "Indicador mensal de performance".to_string(),
        "Este indicador mede a eficácia da conversão de leads em clientes, considerando todo o funil de vendas desde o primeiro contato até o fechamento do negócio".to_string(),
        "Percentual de conversão de leads em clientes".to_string(),
        pegar("tipo", "Nome do Tipo"),
        pegar("subcategoria", "Nome da Subcategoria"),
        "2024-01-31".to_string(),
        "mês".to_string(),
        "1".to_string(),
        "11".to_string(),
        "SIM".to_string(),
    ];

    vec![cabecalhos, instrucoes, exemplo]
}

/// Gera o arquivo .xlsx do modelo e dispara o download no navegador
pub fn baixar_modelo(lookups: &Lookups) -> Result<(), String> {
    let linhas = montar_linhas(lookups);
    let bytes = write_workbook(&linhas, "Modelo Indicadores")?;
    let blob = blob_binario(&bytes, MIME_XLSX)?;
    download_blob(&blob, NOME_ARQUIVO_MODELO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn modelo_tem_tres_linhas_com_todas_as_colunas() {
        let lookups = Lookups {
            projetos: vec![(Uuid::new_v4(), "Projeto Alpha".to_string())],
            categorias: vec![(Uuid::new_v4(), "Qualidade".to_string())],
            subcategorias: vec![(1, "Gestão".to_string())],
            tipos_unidade: vec![(1, "Porcentagem".to_string())],
            tipos_apresentacao: vec![(1, "Percentual".to_string())],
        };

        let linhas = montar_linhas(&lookups);
        assert_eq!(linhas.len(), 3);
        for linha in &linhas {
            assert_eq!(linha.len(), COLUNAS_MODELO.len());
        }
        assert_eq!(linhas[0][0], "projeto_id");
        // O exemplo usa a primeira entrada de cada referência carregada
        assert_eq!(linhas[2][0], "Projeto Alpha");
        assert_eq!(linhas[2][6], "Percentual");
        assert_eq!(linhas[2][7], "Gestão");
        assert_eq!(linhas[2][12], "SIM");
    }

    #[test]
    fn modelo_sem_referencias_usa_textos_padrao() {
        let linhas = montar_linhas(&Lookups::default());
        assert_eq!(linhas[2][0], "Nome do Projeto");
        assert_eq!(linhas[2][7], "Nome da Subcategoria");
    }
}
