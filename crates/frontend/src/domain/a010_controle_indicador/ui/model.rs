//! Funções de API e tabelas de consulta da tela de controle de indicadores

use crate::domain::{
    a001_projeto, a002_categoria, a003_subcategoria, a004_tipo_unidade, a005_tipo_apresentacao,
};
use crate::shared::api::{get_json, send_json};
use contracts::domain::a010_controle_indicador::{
    AtualizacaoControleIndicador, ControleIndicador, EdicaoLinhaControle, NovoControleIndicador,
};
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Filtros da listagem, refletidos direto na query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtros {
    pub projeto_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
    pub busca: String,
}

impl Filtros {
    pub fn ativos(&self) -> bool {
        self.projeto_id.is_some() || self.categoria_id.is_some() || !self.busca.trim().is_empty()
    }
}

/// Tabelas de referência carregadas uma vez por montagem da tela e tratadas
/// como somente leitura dali em diante
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub projetos: Vec<(Uuid, String)>,
    pub categorias: Vec<(Uuid, String)>,
    pub subcategorias: Vec<(i32, String)>,
    pub tipos_unidade: Vec<(i32, String)>,
    pub tipos_apresentacao: Vec<(i32, String)>,
}

impl Lookups {
    pub fn nome_projeto(&self, id: &Uuid) -> String {
        self.projetos
            .iter()
            .find(|(pid, _)| pid == id)
            .map(|(_, nome)| nome.clone())
            .unwrap_or_else(|| "Projeto indisponível".to_string())
    }

    pub fn nome_categoria(&self, id: &Uuid) -> String {
        self.categorias
            .iter()
            .find(|(cid, _)| cid == id)
            .map(|(_, nome)| nome.clone())
            .unwrap_or_else(|| "Categoria indisponível".to_string())
    }

    pub fn nome_subcategoria(&self, id: Option<i32>) -> String {
        id.and_then(|id| {
            self.subcategorias
                .iter()
                .find(|(sid, _)| *sid == id)
                .map(|(_, nome)| nome.clone())
        })
        .unwrap_or_else(|| "Subcategoria indisponível".to_string())
    }

    pub fn nome_tipo_unidade(&self, id: Option<i32>) -> String {
        id.and_then(|id| {
            self.tipos_unidade
                .iter()
                .find(|(tid, _)| *tid == id)
                .map(|(_, nome)| nome.clone())
        })
        .unwrap_or_else(|| "Tipo indisponível".to_string())
    }

    /// Mapas nome→id usados pela importação (para montar a linha de exemplo)
    pub fn primeiro_de_cada(&self) -> HashMap<&'static str, String> {
        let mut exemplo = HashMap::new();
        if let Some((_, nome)) = self.projetos.first() {
            exemplo.insert("projeto", nome.clone());
        }
        if let Some((_, nome)) = self.categorias.first() {
            exemplo.insert("categoria", nome.clone());
        }
        if let Some((_, nome)) = self.subcategorias.first() {
            exemplo.insert("subcategoria", nome.clone());
        }
        if let Some((_, nome)) = self.tipos_apresentacao.first() {
            exemplo.insert("tipo", nome.clone());
        }
        exemplo
    }
}

/// Carrega todas as tabelas de referência. Qualquer falha devolve erro e a
/// tela correspondente fica com o lookup vazio (ações dependentes desabilitam).
pub async fn fetch_lookups(usuario_id: &Uuid) -> Result<Lookups, String> {
    let projetos = a001_projeto::model::fetch_vinculados(usuario_id).await?;
    let categorias = a002_categoria::model::fetch_all().await?;
    let subcategorias = a003_subcategoria::model::fetch_all().await?;
    let tipos_unidade = a004_tipo_unidade::model::fetch_all().await?;
    let tipos_apresentacao = a005_tipo_apresentacao::model::fetch_all().await?;

    Ok(Lookups {
        projetos: projetos
            .into_iter()
            .map(|p| (p.id.value(), p.nome))
            .collect(),
        categorias: categorias
            .into_iter()
            .map(|c| (c.id.value(), c.nome))
            .collect(),
        subcategorias: subcategorias.into_iter().map(|s| (s.id, s.nome)).collect(),
        tipos_unidade: tipos_unidade.into_iter().map(|t| (t.id, t.tipo)).collect(),
        tipos_apresentacao: tipos_apresentacao
            .into_iter()
            .map(|t| (t.id, t.tipo))
            .collect(),
    })
}

/// Listagem de controles com os filtros correntes
pub async fn fetch_controles(
    usuario_id: &Uuid,
    filtros: &Filtros,
) -> Result<Vec<ControleIndicador>, String> {
    let mut caminho = format!("/api/controle_indicador?usuario_id={}", usuario_id);
    if let Some(projeto_id) = &filtros.projeto_id {
        caminho.push_str(&format!("&projeto_id={}", projeto_id));
    }
    if let Some(categoria_id) = &filtros.categoria_id {
        caminho.push_str(&format!("&categoria_id={}", categoria_id));
    }
    let busca = filtros.busca.trim();
    if !busca.is_empty() {
        caminho.push_str(&format!("&busca={}", escapar_query(busca)));
    }
    get_json(&caminho).await
}

/// Percent-encoding mínimo para o termo de busca na query string
fn escapar_query(termo: &str) -> String {
    let mut saida = String::new();
    for byte in termo.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                saida.push(byte as char)
            }
            _ => saida.push_str(&format!("%{:02X}", byte)),
        }
    }
    saida
}

#[derive(Debug, Clone, Deserialize)]
pub struct CriacaoResposta {
    pub id: String,
    pub linhas_previstas: i32,
}

pub async fn create(dto: &NovoControleIndicador) -> Result<CriacaoResposta, String> {
    send_json("POST", "/api/controle_indicador", Some(dto)).await
}

pub async fn update(id: i64, dto: &AtualizacaoControleIndicador) -> Result<(), String> {
    let _: serde_json::Value =
        send_json("PUT", &format!("/api/controle_indicador/{}", id), Some(dto)).await?;
    Ok(())
}

pub async fn update_linha(linha: &EdicaoLinhaControle) -> Result<(), String> {
    let _: serde_json::Value = send_json(
        "PUT",
        &format!("/api/controle_indicador/{}/linha", linha.id.value()),
        Some(linha),
    )
    .await?;
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), String> {
    let _: serde_json::Value = send_json::<(), _>(
        "DELETE",
        &format!("/api/controle_indicador/{}", id),
        None,
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapar_query_preserva_ascii_simples() {
        assert_eq!(escapar_query("taxa"), "taxa");
        assert_eq!(escapar_query("taxa de conversão"), "taxa%20de%20convers%C3%A3o");
    }

    #[test]
    fn filtros_ativos() {
        assert!(!Filtros::default().ativos());
        let filtros = Filtros {
            busca: "  ".to_string(),
            ..Default::default()
        };
        assert!(!filtros.ativos());
        let filtros = Filtros {
            busca: "meta".to_string(),
            ..Default::default()
        };
        assert!(filtros.ativos());
    }
}
