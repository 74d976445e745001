// Invoice domain entity and its storage-shaped record.
//
// The entity is what the API accepts and returns; its monetary fields are
// plain floats. The record is what the database stores; every monetary
// column is an exact decimal to avoid rounding drift on repeated
// reads/writes. Derived amounts (fee, tax, total) are always computed
// server-side and cannot be supplied by clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::error::{AppError, Result};
use crate::core::money::{self, DerivedAmounts};

/// Business state of an invoice that has not been processed yet
pub const DEFAULT_STATUS: &str = "unprocessed";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Represents the invoice data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Assigned by the database; 0 before persistence
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub company_id: i64,

    #[serde(default)]
    pub client_id: i64,

    /// None when the caller did not supply the field
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub payment_amount: f64,

    /// Derived from payment_amount; client-supplied values are ignored
    #[serde(skip_deserializing)]
    pub fee_amount: f64,

    #[serde(skip_deserializing)]
    pub tax_amount: f64,

    #[serde(skip_deserializing)]
    pub total_amount: f64,

    #[serde(default = "default_status")]
    pub status: String,
}

impl Default for Invoice {
    fn default() -> Self {
        Self {
            id: 0,
            company_id: 0,
            client_id: 0,
            issue_date: None,
            due_date: None,
            payment_amount: 0.0,
            fee_amount: 0.0,
            tax_amount: 0.0,
            total_amount: 0.0,
            status: default_status(),
        }
    }
}

impl Invoice {
    /// Check that the invoice is structurally valid before any persistence
    /// attempt. Short-circuits at the first missing field; payment amount,
    /// status, and date ordering are deliberately not checked.
    pub fn validate(&self) -> Result<()> {
        if self.company_id == 0 {
            return Err(AppError::validation("company_id is required"));
        }
        if self.client_id == 0 {
            return Err(AppError::validation("client_id is required"));
        }
        if self.issue_date.is_none() {
            return Err(AppError::validation("issue_date is required"));
        }
        if self.due_date.is_none() {
            return Err(AppError::validation("due_date is required"));
        }
        Ok(())
    }

    /// Compute fee, tax, and total from the payment amount and store them
    /// on the entity. Runs exactly once, before first persistence.
    pub fn apply_derived_amounts(&mut self) {
        let DerivedAmounts {
            fee_amount,
            tax_amount,
            total_amount,
        } = money::derive_amounts(self.payment_amount);

        self.fee_amount = fee_amount;
        self.tax_amount = tax_amount;
        self.total_amount = total_amount;
    }

    /// Convert the entity into its storage record.
    ///
    /// Encodes payment, fee, tax, and total in that order, propagating the
    /// first encoding failure without producing a partial record. The
    /// remaining fields are copied verbatim.
    pub fn to_record(&self) -> Result<InvoiceRecord> {
        let payment_amount = money::encode_amount(self.payment_amount)?;
        let fee_amount = money::encode_amount(self.fee_amount)?;
        let tax_amount = money::encode_amount(self.tax_amount)?;
        let total_amount = money::encode_amount(self.total_amount)?;

        Ok(InvoiceRecord {
            id: self.id,
            company_id: self.company_id,
            client_id: self.client_id,
            issue_date: self
                .issue_date
                .ok_or_else(|| AppError::validation("issue_date is required"))?,
            due_date: self
                .due_date
                .ok_or_else(|| AppError::validation("due_date is required"))?,
            payment_amount,
            fee_amount,
            tax_amount,
            total_amount,
            status: self.status.clone(),
        })
    }
}

/// Row shape of the `invoices` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InvoiceRecord {
    pub id: i64,
    pub company_id: i64,
    pub client_id: i64,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub payment_amount: Decimal,
    pub fee_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub status: String,
}

impl InvoiceRecord {
    /// Convert a stored record back into the domain entity.
    pub fn into_entity(self) -> Result<Invoice> {
        Ok(Invoice {
            id: self.id,
            company_id: self.company_id,
            client_id: self.client_id,
            issue_date: Some(self.issue_date),
            due_date: Some(self.due_date),
            payment_amount: money::decode_amount(self.payment_amount)?,
            fee_amount: money::decode_amount(self.fee_amount)?,
            tax_amount: money::decode_amount(self.tax_amount)?,
            total_amount: money::decode_amount(self.total_amount)?,
            status: self.status,
        })
    }
}
