use chrono::Utc;
use contracts::domain::a010_controle_indicador::{
    AtualizacaoControleIndicador, ControleIndicador, ControleIndicadorId, EdicaoLinhaControle,
    NovoControleIndicador, Recorrencia,
};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

mod controle_indicador {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "controle_indicador")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub projeto_id: String,
        pub categoria_id: String,
        pub subcategoria_id: Option<i32>,
        pub indicador: String,
        pub observacao: Option<String>,
        pub descricao_detalhada: Option<String>,
        pub descricao_resumida: Option<String>,
        pub tipo_unidade_id: Option<i32>,
        pub tipo_apresentacao_id: Option<i32>,
        pub prazo_entrega_inicial: Option<chrono::NaiveDate>,
        pub recorrencia: String,
        pub tempo_recorrencia: Option<i32>,
        pub repeticoes: i32,
        pub obrigatorio: bool,
        pub tem_documento: bool,
        pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<controle_indicador::Model> for ControleIndicador {
    fn from(m: controle_indicador::Model) -> Self {
        ControleIndicador {
            id: ControleIndicadorId::new(m.id),
            projeto_id: Uuid::parse_str(&m.projeto_id).unwrap_or_else(|_| Uuid::nil()),
            categoria_id: Uuid::parse_str(&m.categoria_id).unwrap_or_else(|_| Uuid::nil()),
            subcategoria_id: m.subcategoria_id,
            indicador: m.indicador,
            observacao: m.observacao,
            descricao_detalhada: m.descricao_detalhada,
            descricao_resumida: m.descricao_resumida,
            tipo_unidade_id: m.tipo_unidade_id,
            tipo_apresentacao_id: m.tipo_apresentacao_id,
            prazo_entrega_inicial: m.prazo_entrega_inicial,
            recorrencia: Recorrencia::from_str(&m.recorrencia),
            tempo_recorrencia: m.tempo_recorrencia,
            repeticoes: m.repeticoes,
            obrigatorio: m.obrigatorio,
            tem_documento: m.tem_documento,
            created_at: m.created_at,
        }
    }
}

/// Filtros aplicados na listagem, sempre dentro do escopo dos projetos
/// vinculados ao usuário
#[derive(Debug, Clone, Default)]
pub struct FiltroControles {
    pub projeto_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
    pub busca: Option<String>,
}

/// Monta a consulta da listagem: `projeto_id IN (vinculados)`, filtros de
/// igualdade opcionais e busca textual por substring (sem caixa) em
/// indicador, observação e nas duas descrições, combinadas com OR. Ordenada
/// por id ascendente.
fn consulta_listagem(
    vinculados: &[Uuid],
    filtro: &FiltroControles,
) -> sea_orm::Select<controle_indicador::Entity> {
    let vinculados: Vec<String> = vinculados.iter().map(|id| id.to_string()).collect();
    let mut query = controle_indicador::Entity::find()
        .filter(controle_indicador::Column::ProjetoId.is_in(vinculados))
        .order_by_asc(controle_indicador::Column::Id);

    if let Some(projeto_id) = &filtro.projeto_id {
        query = query.filter(controle_indicador::Column::ProjetoId.eq(projeto_id.to_string()));
    }

    if let Some(categoria_id) = &filtro.categoria_id {
        query = query.filter(controle_indicador::Column::CategoriaId.eq(categoria_id.to_string()));
    }

    if let Some(termo) = filtro.busca.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(controle_indicador::Column::Indicador.contains(termo))
                .add(controle_indicador::Column::Observacao.contains(termo))
                .add(controle_indicador::Column::DescricaoResumida.contains(termo))
                .add(controle_indicador::Column::DescricaoDetalhada.contains(termo)),
        );
    }

    query
}

/// Listagem escopada aos projetos vinculados. Sem vínculo, nenhuma consulta
/// chega ao banco.
pub async fn list(
    db: &DatabaseConnection,
    vinculados: &[Uuid],
    filtro: &FiltroControles,
) -> Result<Vec<ControleIndicador>, DbErr> {
    if vinculados.is_empty() {
        return Ok(Vec::new());
    }

    let models = consulta_listagem(vinculados, filtro).all(db).await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: &ControleIndicadorId,
) -> Result<Option<ControleIndicador>, DbErr> {
    let model = controle_indicador::Entity::find_by_id(id.value())
        .one(db)
        .await?;
    Ok(model.map(|m| m.into()))
}

fn novo_para_active_model(item: &NovoControleIndicador) -> controle_indicador::ActiveModel {
    controle_indicador::ActiveModel {
        projeto_id: Set(item
            .projeto_id
            .map(|id| id.to_string())
            .unwrap_or_default()),
        categoria_id: Set(item
            .categoria_id
            .map(|id| id.to_string())
            .unwrap_or_default()),
        subcategoria_id: Set(item.subcategoria_id),
        indicador: Set(item.indicador.clone()),
        observacao: Set(item.observacao.clone()),
        descricao_detalhada: Set(item.descricao_detalhada.clone()),
        descricao_resumida: Set(item.descricao_resumida.clone()),
        tipo_unidade_id: Set(item.tipo_unidade_id),
        tipo_apresentacao_id: Set(item.tipo_apresentacao_id),
        prazo_entrega_inicial: Set(item.prazo_entrega_inicial),
        recorrencia: Set(item.recorrencia.as_str().to_string()),
        tempo_recorrencia: Set(item.tempo_recorrencia),
        repeticoes: Set(item.repeticoes),
        obrigatorio: Set(item.obrigatorio),
        // Linhas novas nunca nascem com documento anexado
        tem_documento: Set(false),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    }
}

/// Insere uma linha base e devolve o id gerado pelo banco
pub async fn insert(
    db: &DatabaseConnection,
    item: &NovoControleIndicador,
) -> Result<ControleIndicadorId, DbErr> {
    let result = controle_indicador::Entity::insert(novo_para_active_model(item))
        .exec(db)
        .await?;
    Ok(ControleIndicadorId::new(result.last_insert_id))
}

/// Inserção em lote da importação; devolve o total efetivamente gravado
pub async fn insert_many(
    db: &DatabaseConnection,
    itens: &[NovoControleIndicador],
) -> Result<usize, DbErr> {
    if itens.is_empty() {
        return Ok(0);
    }
    let models: Vec<controle_indicador::ActiveModel> =
        itens.iter().map(novo_para_active_model).collect();
    let inseridos = controle_indicador::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;
    Ok(inseridos as usize)
}

/// Atualização do caminho de edição individual.
///
/// Grava somente o subconjunto editável; prazo, recorrência, tempo e
/// repetições ficam fora do UPDATE, e `subcategoria_id` é gravada como NULL.
pub async fn update_editaveis(
    db: &DatabaseConnection,
    id: &ControleIndicadorId,
    item: &AtualizacaoControleIndicador,
) -> Result<(), DbErr> {
    let active_model = controle_indicador::ActiveModel {
        id: Set(id.value()),
        projeto_id: Set(item
            .projeto_id
            .map(|v| v.to_string())
            .unwrap_or_default()),
        categoria_id: Set(item
            .categoria_id
            .map(|v| v.to_string())
            .unwrap_or_default()),
        subcategoria_id: Set(None),
        indicador: Set(item.indicador.clone()),
        observacao: Set(item.observacao.clone()),
        descricao_detalhada: Set(item.descricao_detalhada.clone()),
        descricao_resumida: Set(item.descricao_resumida.clone()),
        tipo_unidade_id: Set(item.tipo_unidade_id),
        tipo_apresentacao_id: Set(item.tipo_apresentacao_id),
        obrigatorio: Set(item.obrigatorio),
        ..Default::default()
    };
    controle_indicador::Entity::update(active_model)
        .exec(db)
        .await?;
    Ok(())
}

/// Atualização de uma linha da grade de edição em massa (todos os campos)
pub async fn update_linha(
    db: &DatabaseConnection,
    linha: &EdicaoLinhaControle,
) -> Result<(), DbErr> {
    let active_model = controle_indicador::ActiveModel {
        id: Set(linha.id.value()),
        projeto_id: Set(linha
            .projeto_id
            .map(|v| v.to_string())
            .unwrap_or_default()),
        categoria_id: Set(linha
            .categoria_id
            .map(|v| v.to_string())
            .unwrap_or_default()),
        subcategoria_id: Set(linha.subcategoria_id),
        indicador: Set(linha.indicador.clone()),
        observacao: Set(linha.observacao.clone()),
        descricao_detalhada: Set(linha.descricao_detalhada.clone()),
        descricao_resumida: Set(linha.descricao_resumida.clone()),
        tipo_unidade_id: Set(linha.tipo_unidade_id),
        tipo_apresentacao_id: Set(linha.tipo_apresentacao_id),
        prazo_entrega_inicial: Set(linha.prazo_entrega_inicial),
        recorrencia: Set(linha.recorrencia.as_str().to_string()),
        tempo_recorrencia: Set(linha.tempo_recorrencia),
        repeticoes: Set(linha.repeticoes),
        obrigatorio: Set(linha.obrigatorio),
        ..Default::default()
    };
    controle_indicador::Entity::update(active_model)
        .exec(db)
        .await?;
    Ok(())
}

/// Exclusão por id. As linhas Meta/Realizado derivadas caem em cascata no
/// banco; aqui não há verificação nem contagem do que foi removido.
pub async fn delete_by_id(
    db: &DatabaseConnection,
    id: &ControleIndicadorId,
) -> Result<bool, DbErr> {
    let result = controle_indicador::Entity::delete_by_id(id.value())
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};

    fn sql(vinculados: &[Uuid], filtro: &FiltroControles) -> String {
        consulta_listagem(vinculados, filtro)
            .build(DatabaseBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn listagem_escopa_pelos_vinculados_e_ordena_por_id() {
        let vinculados = vec![Uuid::new_v4(), Uuid::new_v4()];
        let sql = sql(&vinculados, &FiltroControles::default());

        assert!(sql.contains("\"projeto_id\" IN"), "{sql}");
        assert!(sql.contains(&vinculados[0].to_string()), "{sql}");
        assert!(sql.contains("ORDER BY \"controle_indicador\".\"id\" ASC"), "{sql}");
    }

    #[test]
    fn busca_textual_cobre_as_quatro_colunas_com_or() {
        let filtro = FiltroControles {
            busca: Some("meta".to_string()),
            ..Default::default()
        };
        let sql = sql(&[Uuid::new_v4()], &filtro);

        // Termo presente só na descrição detalhada ainda encontra o registro
        for coluna in [
            "indicador",
            "observacao",
            "descricao_resumida",
            "descricao_detalhada",
        ] {
            assert!(
                sql.contains(&format!("\"{}\" LIKE '%meta%'", coluna)),
                "coluna {coluna} fora da busca: {sql}"
            );
        }
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn busca_em_branco_nao_gera_clausula_like() {
        let filtro = FiltroControles {
            busca: Some("   ".to_string()),
            ..Default::default()
        };
        let sql = sql(&[Uuid::new_v4()], &filtro);
        assert!(!sql.contains("LIKE"), "{sql}");
    }

    #[test]
    fn filtros_de_projeto_e_categoria_entram_como_igualdade() {
        let projeto = Uuid::new_v4();
        let categoria = Uuid::new_v4();
        let filtro = FiltroControles {
            projeto_id: Some(projeto),
            categoria_id: Some(categoria),
            busca: None,
        };
        let sql = sql(&[projeto], &filtro);

        assert!(sql.contains(&format!("\"projeto_id\" = '{}'", projeto)), "{sql}");
        assert!(sql.contains(&format!("\"categoria_id\" = '{}'", categoria)), "{sql}");
    }
}
