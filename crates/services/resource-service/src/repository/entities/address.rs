//! Address database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Address;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub person_id: i32,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Address {
    fn from(model: Model) -> Self {
        Address {
            id: model.id,
            person_id: model.person_id,
            street: model.street,
            number: model.number,
            complement: model.complement,
            district: model.district,
            city: model.city,
            state: model.state,
            country: model.country,
            zip_code: model.zip_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
