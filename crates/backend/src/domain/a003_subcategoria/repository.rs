use contracts::domain::a003_subcategoria::Subcategoria;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

mod subcategoria {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "subcategorias")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub nome: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<subcategoria::Model> for Subcategoria {
    fn from(m: subcategoria::Model) -> Self {
        Subcategoria {
            id: m.id,
            nome: m.nome,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Subcategoria>, DbErr> {
    let models = subcategoria::Entity::find()
        .order_by_asc(subcategoria::Column::Nome)
        .all(db)
        .await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

pub async fn insert(db: &DatabaseConnection, nome: &str) -> Result<(), DbErr> {
    let active_model = subcategoria::ActiveModel {
        nome: Set(nome.to_string()),
        ..Default::default()
    };
    active_model.insert(db).await?;
    Ok(())
}
