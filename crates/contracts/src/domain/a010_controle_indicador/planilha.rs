//! Esquema da planilha de importação de indicadores.
//!
//! Layout do arquivo: linha 1 = cabeçalhos técnicos, linha 2 = instruções de
//! preenchimento, linha 3 em diante = dados. As colunas de referência
//! (`projeto_id`, `categoria_id`, `tipo_indicador`, `subcategoria_id`) são
//! preenchidas com NOMES e convertidas em IDs na validação da importação.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Colunas do modelo, na ordem em que aparecem na planilha gerada
pub const COLUNAS_MODELO: [&str; 13] = [
    "projeto_id",
    "categoria_id",
    "indicador",
    "observacao",
    "descricao_detalhada",
    "descricao_resumida",
    "tipo_indicador",
    "subcategoria_id",
    "prazo_entrega_inicial",
    "recorrencia",
    "tempo_recorrencia",
    "repeticoes",
    "obrigatorio",
];

/// Cabeçalhos que precisam existir no arquivo para o processamento começar
pub const CABECALHOS_OBRIGATORIOS: [&str; 5] = [
    "projeto_id",
    "categoria_id",
    "indicador",
    "tipo_indicador",
    "subcategoria_id",
];

/// Uma linha de dados extraída da planilha
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinhaPlanilha {
    /// Número da linha na planilha (base 1, contando os dois cabeçalhos)
    pub numero: usize,
    /// Células indexadas pelo cabeçalho técnico da coluna
    pub valores: HashMap<String, String>,
}

impl LinhaPlanilha {
    pub fn celula(&self, coluna: &str) -> &str {
        self.valores.get(coluna).map(String::as_str).unwrap_or("")
    }
}

/// Conteúdo tabular de uma planilha de indicadores já conferido contra o
/// esquema do modelo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanilhaControle {
    pub arquivo: String,
    pub linhas: Vec<LinhaPlanilha>,
}

impl PlanilhaControle {
    /// Monta a planilha a partir da matriz crua (linhas × células) lida do
    /// arquivo.
    ///
    /// Falha de imediato, sem processar nenhuma linha de dados, se algum
    /// cabeçalho obrigatório não estiver presente na linha 1. Linhas
    /// totalmente em branco são ignoradas; as demais guardam o número
    /// original da planilha para as mensagens de erro.
    pub fn from_raw(raw: Vec<Vec<String>>, arquivo: String) -> Result<Self, String> {
        if raw.is_empty() {
            return Err("A planilha não pôde ser carregada".to_string());
        }

        let cabecalhos: Vec<String> = raw[0].iter().map(|h| h.trim().to_string()).collect();

        for obrigatorio in CABECALHOS_OBRIGATORIOS.iter() {
            if !cabecalhos.iter().any(|h| h == obrigatorio) {
                return Err(format!(
                    "Cabeçalho obrigatório \"{}\" não encontrado no arquivo",
                    obrigatorio
                ));
            }
        }

        // Linha 2 é a linha de instruções do modelo; dados começam na linha 3
        let mut linhas = Vec::new();
        for (idx, celulas) in raw.iter().enumerate().skip(2) {
            let mut valores = HashMap::new();
            for (col, cabecalho) in cabecalhos.iter().enumerate() {
                if cabecalho.is_empty() {
                    continue;
                }
                let valor = celulas.get(col).map(|c| c.trim().to_string());
                valores.insert(cabecalho.clone(), valor.unwrap_or_default());
            }
            if valores.values().any(|v| !v.is_empty()) {
                linhas.push(LinhaPlanilha {
                    numero: idx + 1,
                    valores,
                });
            }
        }

        if linhas.is_empty() {
            return Err("A planilha não contém dados válidos".to_string());
        }

        Ok(PlanilhaControle { arquivo, linhas })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabecalhos() -> Vec<String> {
        COLUNAS_MODELO.iter().map(|c| c.to_string()).collect()
    }

    fn linha_dados(indicador: &str) -> Vec<String> {
        let mut celulas = vec![String::new(); COLUNAS_MODELO.len()];
        celulas[0] = "Projeto Alpha".to_string();
        celulas[1] = "Qualidade".to_string();
        celulas[2] = indicador.to_string();
        celulas[6] = "Percentual".to_string();
        celulas[7] = "Gestão".to_string();
        celulas[12] = "SIM".to_string();
        celulas
    }

    #[test]
    fn cabecalho_ausente_falha_sem_processar_linhas() {
        let mut cab = cabecalhos();
        cab.retain(|c| c != "subcategoria_id");
        let raw = vec![cab, vec![], linha_dados("Taxa de conversão")];

        let erro = PlanilhaControle::from_raw(raw, "modelo.xlsx".into()).unwrap_err();
        assert!(erro.contains("subcategoria_id"), "{erro}");
    }

    #[test]
    fn dados_comecam_na_linha_3_e_linhas_vazias_sao_puladas() {
        let raw = vec![
            cabecalhos(),
            vec!["instruções".to_string()],
            linha_dados("Indicador A"),
            vec![String::new(); COLUNAS_MODELO.len()],
            linha_dados("Indicador B"),
        ];

        let planilha = PlanilhaControle::from_raw(raw, "modelo.xlsx".into()).unwrap();
        assert_eq!(planilha.linhas.len(), 2);
        assert_eq!(planilha.linhas[0].numero, 3);
        assert_eq!(planilha.linhas[0].celula("indicador"), "Indicador A");
        assert_eq!(planilha.linhas[1].numero, 5);
    }

    #[test]
    fn planilha_sem_dados_e_rejeitada() {
        let raw = vec![cabecalhos(), vec!["instruções".to_string()]];
        assert!(PlanilhaControle::from_raw(raw, "modelo.xlsx".into()).is_err());
    }

    #[test]
    fn celulas_sao_aparadas() {
        let mut linha = linha_dados("  Indicador C  ");
        linha[3] = "  obs  ".to_string();
        let raw = vec![cabecalhos(), vec![], linha];

        let planilha = PlanilhaControle::from_raw(raw, "modelo.xlsx".into()).unwrap();
        assert_eq!(planilha.linhas[0].celula("indicador"), "Indicador C");
        assert_eq!(planilha.linhas[0].celula("observacao"), "obs");
    }
}
