use contracts::domain::a005_tipo_apresentacao::TipoApresentacao;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

mod tipo_apresentacao {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "tipos_apresentacao")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub tipo: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<tipo_apresentacao::Model> for TipoApresentacao {
    fn from(m: tipo_apresentacao::Model) -> Self {
        TipoApresentacao {
            id: m.id,
            tipo: m.tipo,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<TipoApresentacao>, DbErr> {
    let models = tipo_apresentacao::Entity::find()
        .order_by_asc(tipo_apresentacao::Column::Tipo)
        .all(db)
        .await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

pub async fn insert(db: &DatabaseConnection, tipo: &str) -> Result<(), DbErr> {
    let active_model = tipo_apresentacao::ActiveModel {
        tipo: Set(tipo.to_string()),
        ..Default::default()
    };
    active_model.insert(db).await?;
    Ok(())
}
