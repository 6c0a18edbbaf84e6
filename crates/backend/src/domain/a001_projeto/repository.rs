use contracts::domain::a001_projeto::Projeto;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

mod projeto {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "projetos")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub nome: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

mod relacao_usuarios_projetos {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "relacao_usuarios_projetos")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub usuario_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub projeto_id: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<projeto::Model> for Projeto {
    fn from(m: projeto::Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::nil());
        Projeto::new(uuid, m.nome)
    }
}

/// Todos os projetos, em ordem alfabética
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Projeto>, DbErr> {
    let models = projeto::Entity::find()
        .order_by_asc(projeto::Column::Nome)
        .all(db)
        .await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

/// IDs dos projetos vinculados ao usuário na tabela de relação
pub async fn list_vinculo_ids(
    db: &DatabaseConnection,
    usuario_id: &Uuid,
) -> Result<Vec<Uuid>, DbErr> {
    let models = relacao_usuarios_projetos::Entity::find()
        .filter(relacao_usuarios_projetos::Column::UsuarioId.eq(usuario_id.to_string()))
        .all(db)
        .await?;
    Ok(models
        .into_iter()
        .filter_map(|m| Uuid::parse_str(&m.projeto_id).ok())
        .collect())
}

/// Somente os projetos cujo id está no conjunto informado
pub async fn list_by_ids(
    db: &DatabaseConnection,
    ids: &[Uuid],
) -> Result<Vec<Projeto>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let models = projeto::Entity::find()
        .filter(projeto::Column::Id.is_in(ids))
        .order_by_asc(projeto::Column::Nome)
        .all(db)
        .await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

pub async fn insert(db: &DatabaseConnection, item: &Projeto) -> Result<(), DbErr> {
    use contracts::domain::common::AggregateId;
    let active_model = projeto::ActiveModel {
        id: Set(item.id.as_string()),
        nome: Set(item.nome.clone()),
    };
    active_model.insert(db).await?;
    Ok(())
}

pub async fn insert_vinculo(
    db: &DatabaseConnection,
    usuario_id: &Uuid,
    projeto_id: &Uuid,
) -> Result<(), DbErr> {
    let active_model = relacao_usuarios_projetos::ActiveModel {
        usuario_id: Set(usuario_id.to_string()),
        projeto_id: Set(projeto_id.to_string()),
    };
    active_model.insert(db).await?;
    Ok(())
}
