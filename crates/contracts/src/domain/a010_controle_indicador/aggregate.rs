use crate::domain::common::AggregateId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID tipado da linha base de indicador (sequencial, atribuído pelo banco)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControleIndicadorId(pub i64);

impl ControleIndicadorId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ControleIndicadorId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ControleIndicadorId::new)
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

/// Política de recorrência da linha base.
///
/// Os valores serializados são exatamente os tokens gravados na coluna
/// `recorrencia` ("sem recorrencia", "dia", "mês", "ano"); as linhas
/// Meta/Realizado são expandidas por triggers no banco a partir deles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recorrencia {
    #[serde(rename = "sem recorrencia")]
    SemRecorrencia,
    #[serde(rename = "dia")]
    Dia,
    #[serde(rename = "mês")]
    Mes,
    #[serde(rename = "ano")]
    Ano,
}

impl Recorrencia {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recorrencia::SemRecorrencia => "sem recorrencia",
            Recorrencia::Dia => "dia",
            Recorrencia::Mes => "mês",
            Recorrencia::Ano => "ano",
        }
    }

    /// Interpretar o token gravado no banco; tokens desconhecidos caem em
    /// "sem recorrencia" (linhas antigas com a coluna vazia).
    pub fn from_str(s: &str) -> Self {
        match s {
            "dia" => Recorrencia::Dia,
            "mês" | "mes" => Recorrencia::Mes,
            "ano" => Recorrencia::Ano,
            _ => Recorrencia::SemRecorrencia,
        }
    }

    pub fn ativa(&self) -> bool {
        !matches!(self, Recorrencia::SemRecorrencia)
    }
}

impl Default for Recorrencia {
    fn default() -> Self {
        Recorrencia::SemRecorrencia
    }
}

/// Linha base de controle de indicador (agregado a010).
///
/// Cada linha base configura a geração de linhas Meta/Realizado na tabela de
/// controle geral; a expansão em si acontece no banco, fora deste repositório.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControleIndicador {
    pub id: ControleIndicadorId,
    pub projeto_id: Uuid,
    pub categoria_id: Uuid,
    pub subcategoria_id: Option<i32>,
    pub indicador: String,
    pub observacao: Option<String>,
    pub descricao_detalhada: Option<String>,
    pub descricao_resumida: Option<String>,
    pub tipo_unidade_id: Option<i32>,
    pub tipo_apresentacao_id: Option<i32>,
    pub prazo_entrega_inicial: Option<NaiveDate>,
    pub recorrencia: Recorrencia,
    pub tempo_recorrencia: Option<i32>,
    pub repeticoes: i32,
    pub obrigatorio: bool,
    pub tem_documento: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl ControleIndicador {
    /// Quantidade estimada de linhas geradas para esta configuração
    pub fn linhas_previstas(&self) -> i32 {
        linhas_previstas(self.repeticoes)
    }
}

/// Estimativa de linhas geradas no controle geral: linha base (+ repetições),
/// cada uma duplicada em Meta e Realizado. Valor exibido ao usuário como
/// aproximação; a contagem real pertence ao banco.
pub fn linhas_previstas(repeticoes: i32) -> i32 {
    let base = if repeticoes <= 0 { 1 } else { 1 + repeticoes };
    base * 2
}

/// Payload de inserção de uma linha base (diálogo de criação e importação)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovoControleIndicador {
    pub projeto_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
    pub subcategoria_id: Option<i32>,
    pub indicador: String,
    pub observacao: Option<String>,
    pub descricao_detalhada: Option<String>,
    pub descricao_resumida: Option<String>,
    pub tipo_unidade_id: Option<i32>,
    pub tipo_apresentacao_id: Option<i32>,
    pub prazo_entrega_inicial: Option<NaiveDate>,
    #[serde(default)]
    pub recorrencia: Recorrencia,
    pub tempo_recorrencia: Option<i32>,
    #[serde(default)]
    pub repeticoes: i32,
    #[serde(default)]
    pub obrigatorio: bool,
}

impl Default for NovoControleIndicador {
    fn default() -> Self {
        Self {
            projeto_id: None,
            categoria_id: None,
            subcategoria_id: None,
            indicador: String::new(),
            observacao: None,
            descricao_detalhada: None,
            descricao_resumida: None,
            tipo_unidade_id: None,
            tipo_apresentacao_id: None,
            prazo_entrega_inicial: None,
            recorrencia: Recorrencia::SemRecorrencia,
            tempo_recorrencia: None,
            repeticoes: 0,
            obrigatorio: false,
        }
    }
}

impl NovoControleIndicador {
    /// Validação feita antes de qualquer chamada de rede.
    ///
    /// Campos obrigatórios na criação: projeto, categoria, indicador e
    /// subcategoria; com recorrência ativa, tempo e repetições ≥ 1.
    pub fn validate(&self) -> Result<(), String> {
        if self.projeto_id.is_none() {
            return Err("Por favor, selecione um projeto".into());
        }
        if self.categoria_id.is_none() {
            return Err("Por favor, selecione uma categoria".into());
        }
        if self.indicador.trim().is_empty() {
            return Err("Por favor, preencha o indicador".into());
        }
        if self.subcategoria_id.is_none() {
            return Err("Por favor, selecione uma subcategoria".into());
        }
        if self.recorrencia.ativa() {
            match self.tempo_recorrencia {
                Some(t) if t >= 1 => {}
                _ => return Err("Por favor, informe um tempo de recorrência válido".into()),
            }
            if self.repeticoes < 1 {
                return Err("Por favor, informe um número válido de repetições".into());
            }
        }
        Ok(())
    }

    /// Forma final persistida: texto aparado, opcionais vazios viram NULL e,
    /// sem recorrência, tempo/repetições são sempre zerados, independente do
    /// que sobrou no formulário.
    pub fn normalizado(&self) -> Self {
        let limpar = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            indicador: self.indicador.trim().to_string(),
            observacao: limpar(&self.observacao),
            descricao_detalhada: limpar(&self.descricao_detalhada),
            descricao_resumida: limpar(&self.descricao_resumida),
            tempo_recorrencia: if self.recorrencia.ativa() {
                self.tempo_recorrencia
            } else {
                None
            },
            repeticoes: if self.recorrencia.ativa() {
                self.repeticoes
            } else {
                0
            },
            ..self.clone()
        }
    }

    pub fn linhas_previstas(&self) -> i32 {
        linhas_previstas(if self.recorrencia.ativa() {
            self.repeticoes
        } else {
            0
        })
    }
}

/// Payload de atualização do diálogo de edição individual.
///
/// Propositalmente NÃO carrega prazo, recorrência, tempo nem repetições: uma
/// vez usados pela geração de linhas, esses campos não mudam por este caminho.
/// A subcategoria também não aparece aqui: este caminho de edição grava
/// `subcategoria_id = NULL` (saneamento de dados decidido junto ao negócio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtualizacaoControleIndicador {
    pub projeto_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
    pub indicador: String,
    pub observacao: Option<String>,
    pub descricao_detalhada: Option<String>,
    pub descricao_resumida: Option<String>,
    pub tipo_unidade_id: Option<i32>,
    pub tipo_apresentacao_id: Option<i32>,
    #[serde(default)]
    pub obrigatorio: bool,
}

impl AtualizacaoControleIndicador {
    /// Na edição individual o tipo de unidade e o tipo de apresentação passam
    /// a ser obrigatórios, além de projeto, categoria e indicador.
    pub fn validate(&self) -> Result<(), String> {
        if self.projeto_id.is_none() {
            return Err("Por favor, selecione um projeto".into());
        }
        if self.categoria_id.is_none() {
            return Err("Por favor, selecione uma categoria".into());
        }
        if self.indicador.trim().is_empty() {
            return Err("Por favor, preencha o indicador".into());
        }
        if self.tipo_unidade_id.is_none() {
            return Err("Por favor, selecione o tipo de unidade".into());
        }
        if self.tipo_apresentacao_id.is_none() {
            return Err("Por favor, selecione o tipo de apresentação".into());
        }
        Ok(())
    }

    pub fn normalizado(&self) -> Self {
        let limpar = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            indicador: self.indicador.trim().to_string(),
            observacao: limpar(&self.observacao),
            descricao_detalhada: limpar(&self.descricao_detalhada),
            descricao_resumida: limpar(&self.descricao_resumida),
            ..self.clone()
        }
    }
}

/// Linha editável da grade de edição em massa: todos os campos da linha base,
/// inclusive os de recorrência (diferente da edição individual; ver DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdicaoLinhaControle {
    pub id: ControleIndicadorId,
    pub projeto_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
    pub subcategoria_id: Option<i32>,
    pub indicador: String,
    pub observacao: Option<String>,
    pub descricao_detalhada: Option<String>,
    pub descricao_resumida: Option<String>,
    pub tipo_unidade_id: Option<i32>,
    pub tipo_apresentacao_id: Option<i32>,
    pub prazo_entrega_inicial: Option<NaiveDate>,
    pub recorrencia: Recorrencia,
    pub tempo_recorrencia: Option<i32>,
    pub repeticoes: i32,
    pub obrigatorio: bool,
}

impl EdicaoLinhaControle {
    pub fn from_registro(r: &ControleIndicador) -> Self {
        Self {
            id: r.id,
            projeto_id: Some(r.projeto_id),
            categoria_id: Some(r.categoria_id),
            subcategoria_id: r.subcategoria_id,
            indicador: r.indicador.clone(),
            observacao: r.observacao.clone(),
            descricao_detalhada: r.descricao_detalhada.clone(),
            descricao_resumida: r.descricao_resumida.clone(),
            tipo_unidade_id: r.tipo_unidade_id,
            tipo_apresentacao_id: r.tipo_apresentacao_id,
            prazo_entrega_inicial: r.prazo_entrega_inicial,
            recorrencia: r.recorrencia,
            tempo_recorrencia: r.tempo_recorrencia,
            repeticoes: r.repeticoes,
            obrigatorio: r.obrigatorio,
        }
    }

    /// Erros por campo desta linha, recalculados a cada alteração na grade.
    /// A chave é o nome do campo; a grade usa o par (linha, campo) para
    /// destacar a célula.
    pub fn erros_campos(&self) -> Vec<(&'static str, String)> {
        let mut erros = Vec::new();
        if self.projeto_id.is_none() {
            erros.push(("projeto_id", "Projeto é obrigatório".to_string()));
        }
        if self.categoria_id.is_none() {
            erros.push(("categoria_id", "Categoria é obrigatória".to_string()));
        }
        if self.subcategoria_id.is_none() {
            erros.push(("subcategoria_id", "Subcategoria é obrigatória".to_string()));
        }
        if self.tipo_unidade_id.is_none() {
            erros.push((
                "tipo_unidade_id",
                "Tipo de unidade do indicador é obrigatório".to_string(),
            ));
        }
        if self.indicador.trim().is_empty() {
            erros.push(("indicador", "Indicador é obrigatório".to_string()));
        }
        if self.recorrencia.ativa() {
            if self.tempo_recorrencia.map_or(true, |t| t < 1) {
                erros.push((
                    "tempo_recorrencia",
                    "Tempo de recorrência deve ser um número maior que 0".to_string(),
                ));
            }
            if self.repeticoes < 1 {
                erros.push((
                    "repeticoes",
                    "Número de repetições deve ser um número maior que 0".to_string(),
                ));
            }
        }
        erros
    }

    /// Forma persistida da linha: sem recorrência, tempo/repetições zerados.
    pub fn normalizado(&self) -> Self {
        Self {
            indicador: self.indicador.trim().to_string(),
            tempo_recorrencia: if self.recorrencia.ativa() {
                self.tempo_recorrencia
            } else {
                None
            },
            repeticoes: if self.recorrencia.ativa() {
                self.repeticoes
            } else {
                0
            },
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn novo_valido() -> NovoControleIndicador {
        NovoControleIndicador {
            projeto_id: Some(Uuid::new_v4()),
            categoria_id: Some(Uuid::new_v4()),
            subcategoria_id: Some(3),
            indicador: "Taxa de conversão".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn linhas_previstas_sem_repeticoes() {
        assert_eq!(linhas_previstas(0), 2);
        assert_eq!(linhas_previstas(-1), 2);
    }

    #[test]
    fn linhas_previstas_com_repeticoes() {
        // 3 repetições: (1 + 3) linhas base × 2 (Meta/Realizado)
        assert_eq!(linhas_previstas(3), 8);
        assert_eq!(linhas_previstas(11), 24);
    }

    #[test]
    fn criacao_exige_campos_obrigatorios() {
        let mut dto = novo_valido();
        dto.indicador = "   ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = novo_valido();
        dto.subcategoria_id = None;
        assert!(dto.validate().is_err());

        assert!(novo_valido().validate().is_ok());
    }

    #[test]
    fn recorrencia_ativa_exige_tempo_e_repeticoes() {
        let mut dto = novo_valido();
        dto.recorrencia = Recorrencia::Mes;
        dto.tempo_recorrencia = Some(0);
        dto.repeticoes = 5;
        assert!(dto.validate().is_err());

        dto.tempo_recorrencia = Some(1);
        dto.repeticoes = 0;
        assert!(dto.validate().is_err());

        dto.repeticoes = 5;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn sem_recorrencia_zera_tempo_e_repeticoes() {
        let mut dto = novo_valido();
        dto.recorrencia = Recorrencia::SemRecorrencia;
        dto.tempo_recorrencia = Some(4);
        dto.repeticoes = 7;

        let persistido = dto.normalizado();
        assert_eq!(persistido.tempo_recorrencia, None);
        assert_eq!(persistido.repeticoes, 0);
        assert_eq!(persistido.linhas_previstas(), 2);
    }

    #[test]
    fn normalizado_apara_texto_e_anula_vazios() {
        let mut dto = novo_valido();
        dto.indicador = "  Taxa de conversão  ".to_string();
        dto.observacao = Some("   ".to_string());
        dto.descricao_resumida = Some(" mensal ".to_string());

        let persistido = dto.normalizado();
        assert_eq!(persistido.indicador, "Taxa de conversão");
        assert_eq!(persistido.observacao, None);
        assert_eq!(persistido.descricao_resumida, Some("mensal".to_string()));
    }

    #[test]
    fn edicao_individual_exige_tipos() {
        let atualizacao = AtualizacaoControleIndicador {
            projeto_id: Some(Uuid::new_v4()),
            categoria_id: Some(Uuid::new_v4()),
            indicador: "Indicador".to_string(),
            observacao: None,
            descricao_detalhada: None,
            descricao_resumida: None,
            tipo_unidade_id: None,
            tipo_apresentacao_id: Some(1),
            obrigatorio: false,
        };
        assert!(atualizacao.validate().is_err());

        let atualizacao = AtualizacaoControleIndicador {
            tipo_unidade_id: Some(2),
            ..atualizacao
        };
        assert!(atualizacao.validate().is_ok());
    }

    #[test]
    fn erros_campos_cobrem_obrigatorios_da_grade() {
        let linha = EdicaoLinhaControle {
            id: ControleIndicadorId::new(1),
            projeto_id: None,
            categoria_id: Some(Uuid::new_v4()),
            subcategoria_id: None,
            indicador: String::new(),
            observacao: None,
            descricao_detalhada: None,
            descricao_resumida: None,
            tipo_unidade_id: Some(1),
            tipo_apresentacao_id: None,
            prazo_entrega_inicial: None,
            recorrencia: Recorrencia::Dia,
            tempo_recorrencia: None,
            repeticoes: 0,
            obrigatorio: false,
        };
        let campos: Vec<&str> = linha.erros_campos().iter().map(|(c, _)| *c).collect();
        assert_eq!(
            campos,
            vec![
                "projeto_id",
                "subcategoria_id",
                "indicador",
                "tempo_recorrencia",
                "repeticoes"
            ]
        );
    }

    #[test]
    fn recorrencia_serializa_com_tokens_do_banco() {
        assert_eq!(
            serde_json::to_string(&Recorrencia::Mes).unwrap(),
            "\"mês\""
        );
        assert_eq!(
            serde_json::from_str::<Recorrencia>("\"sem recorrencia\"").unwrap(),
            Recorrencia::SemRecorrencia
        );
    }
}
