//! `produtos` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "produtos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "nome")]
    pub name: String,
    #[sea_orm(column_name = "descricao")]
    pub description: String,
    #[sea_orm(column_name = "preco", column_type = "Decimal(Some((19, 4)))")]
    pub price: Decimal,
    #[sea_orm(column_name = "quantidade_estoque")]
    pub stock_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
