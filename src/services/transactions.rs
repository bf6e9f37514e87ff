use crate::{
    entities::{transaction, transaction_detail},
    errors::ServiceError,
    services::tax_rates::TaxRateService,
};
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument};

/// Tax code applied to every line. The schema stores a code per detail row,
/// but the recorder currently uses the standard rate only.
pub const FIXED_TAX_CODE: &str = "10";

/// Sentinel header values substituted when the caller omits them.
pub const DEFAULT_EMP_CD: &str = "9999999999";
pub const DEFAULT_STORE_CD: &str = "30";
pub const DEFAULT_POS_NO: &str = "90";

/// One requested line item. Product fields are a caller-supplied snapshot
/// taken at scan time and are persisted as-is, not re-fetched from the
/// catalog, so the sale record is decoupled from later catalog edits.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    pub product_id: i64,
    pub product_code: String,
    pub product_name: String,
    pub unit_price: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default)]
pub struct RecordTransactionInput {
    pub emp_cd: Option<String>,
    pub store_cd: Option<String>,
    pub pos_no: Option<String>,
    pub items: Vec<LineItemInput>,
}

/// Totals computed for a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionTotals {
    pub total_amount: i64,
    pub total_amount_ex_tax: i64,
}

/// Records sales transactions: computes totals and persists the header and
/// its detail rows as a single atomic unit.
#[derive(Clone)]
pub struct TransactionService {
    db: Arc<DatabaseConnection>,
    tax_rates: TaxRateService,
}

impl TransactionService {
    pub fn new(db: Arc<DatabaseConnection>, tax_rates: TaxRateService) -> Self {
        Self { db, tax_rates }
    }

    /// Records a completed basket.
    ///
    /// Resolves the tax rate, computes both totals, then inserts the header
    /// and one detail row per item (line numbers 1..N, input order) inside
    /// one database transaction. Any persistence failure rolls the whole
    /// write back; no partial header or detail rows survive.
    #[instrument(skip(self, input), fields(items = input.items.len()))]
    pub async fn record(
        &self,
        input: RecordTransactionInput,
    ) -> Result<TransactionTotals, ServiceError> {
        if input.items.is_empty() {
            return Err(ServiceError::ValidationError(
                "Transaction must contain at least one item".to_string(),
            ));
        }

        let rate = self.tax_rates.resolve(FIXED_TAX_CODE).await?;
        let totals = compute_totals(&input.items, rate)?;

        let txn = self.db.begin().await?;

        let header = transaction::ActiveModel {
            recorded_at: Set(Utc::now().naive_utc()),
            emp_cd: Set(input
                .emp_cd
                .unwrap_or_else(|| DEFAULT_EMP_CD.to_string())),
            store_cd: Set(input
                .store_cd
                .unwrap_or_else(|| DEFAULT_STORE_CD.to_string())),
            pos_no: Set(input.pos_no.unwrap_or_else(|| DEFAULT_POS_NO.to_string())),
            total_amount: Set(totals.total_amount),
            total_amount_ex_tax: Set(totals.total_amount_ex_tax),
            ..Default::default()
        };
        let header = header.insert(&txn).await?;

        for (idx, item) in input.items.iter().enumerate() {
            let detail = transaction_detail::ActiveModel {
                transaction_id: Set(header.id),
                line_no: Set(idx as i32 + 1),
                product_id: Set(item.product_id),
                product_code: Set(item.product_code.clone()),
                product_name: Set(item.product_name.clone()),
                unit_price: Set(item.unit_price),
                tax_code: Set(FIXED_TAX_CODE.to_string()),
            };
            detail.insert(&txn).await?;
        }

        txn.commit().await?;

        info!(
            transaction_id = header.id,
            total_amount = totals.total_amount,
            total_amount_ex_tax = totals.total_amount_ex_tax,
            "recorded transaction"
        );

        Ok(totals)
    }
}

/// Computes both totals for a basket.
///
/// The ex-tax total is the exact integer sum of price x quantity; the
/// inclusive total is truncated toward zero after applying the rate.
fn compute_totals(items: &[LineItemInput], rate: Decimal) -> Result<TransactionTotals, ServiceError> {
    let total_amount_ex_tax: i64 = items
        .iter()
        .map(|item| item.unit_price * i64::from(item.quantity))
        .sum();

    let total_amount = (Decimal::from(total_amount_ex_tax) * (Decimal::ONE + rate))
        .trunc()
        .to_i64()
        .ok_or_else(|| {
            ServiceError::InternalError("transaction total overflowed".to_string())
        })?;

    Ok(TransactionTotals {
        total_amount,
        total_amount_ex_tax,
    })
}
