use contracts::domain::a002_categoria::Categoria;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use uuid::Uuid;

mod categoria {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "categorias")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub nome: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<categoria::Model> for Categoria {
    fn from(m: categoria::Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::nil());
        Categoria::new(uuid, m.nome)
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Categoria>, DbErr> {
    let models = categoria::Entity::find()
        .order_by_asc(categoria::Column::Nome)
        .all(db)
        .await?;
    Ok(models.into_iter().map(|m| m.into()).collect())
}

pub async fn insert(db: &DatabaseConnection, item: &Categoria) -> Result<(), DbErr> {
    use contracts::domain::common::AggregateId;
    let active_model = categoria::ActiveModel {
        id: Set(item.id.as_string()),
        nome: Set(item.nome.clone()),
    };
    active_model.insert(db).await?;
    Ok(())
}
