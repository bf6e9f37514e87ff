use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One line item within a sales transaction. Product code, name, and price
/// are denormalized copies taken at sale time so the record survives later
/// catalog edits; the `product_id` reference is kept for traceability only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transaction_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub transaction_id: i64,

    /// Line sequence within the transaction, contiguous from 1.
    #[sea_orm(primary_key, auto_increment = false)]
    pub line_no: i32,

    pub product_id: i64,

    pub product_code: String,

    pub product_name: String,

    /// Unit price at sale time, not re-read from the catalog.
    pub unit_price: i64,

    /// Tax code applied to this line.
    pub tax_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transaction::Entity",
        from = "Column::TransactionId",
        to = "super::transaction::Column::Id"
    )]
    Transaction,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
