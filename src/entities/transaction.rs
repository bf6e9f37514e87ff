use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sales transaction header. Rows are insert-only; this system never updates
/// or deletes a recorded sale.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub recorded_at: DateTime,

    /// Employee code of the cashier, sentinel "9999999999" when unattended.
    pub emp_cd: String,

    pub store_cd: String,

    pub pos_no: String,

    /// Tax-inclusive total in whole currency units.
    pub total_amount: i64,

    pub total_amount_ex_tax: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transaction_detail::Entity")]
    TransactionDetails,
}

impl Related<super::transaction_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
