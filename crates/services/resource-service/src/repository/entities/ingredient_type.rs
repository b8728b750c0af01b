//! Ingredient type database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::IngredientType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredient_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub repeatable: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for IngredientType {
    fn from(model: Model) -> Self {
        IngredientType {
            id: model.id,
            name: model.name,
            repeatable: model.repeatable,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
