use contracts::domain::a004_tipo_unidade::TipoUnidade;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

mod tipo_unidade {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "tipos_unidade_indicador")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub tipo: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<tipo_unidade::Model> for TipoUnidade {
    fn from(m: tipo_unidade::Model) -> Self {
        TipoUnidade {
            id: m.id,
            tipo: m.tipo,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<TipoUnidade>, DbErr> {
    let models = tipo_unidade::Entity::find()
        .order_by_asc(tipo_unidade::Column::Tipo)
        .all(db)
        .await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

pub async fn insert(db: &DatabaseConnection, tipo: &str) -> Result<(), DbErr> {
    let active_model = tipo_unidade::ActiveModel {
        tipo: Set(tipo.to_string()),
        ..Default::default()
    };
    active_model.insert(db).await?;
    Ok(())
}
