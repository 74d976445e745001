// Storage seam for invoices.
//
// `InvoiceStore` is the one substitutable boundary in the pipeline: the
// production implementation runs against MySQL, tests substitute an
// in-memory double. A transaction handle obtained from `begin` is valid
// only until it is committed or rolled back; both consume the handle, so
// a resolved transaction cannot be reused.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::error::{AppError, Result};
use crate::modules::invoices::models::InvoiceRecord;

/// Storage collaborator for invoice rows
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> Result<Box<dyn InvoiceTransaction>>;

    /// All invoices whose due date satisfies `from <= due_date <= to`,
    /// ordered by ascending id. Read-only, no transaction involved.
    async fn find_by_due_date_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<InvoiceRecord>>;
}

/// An open atomic unit of work against the invoice store
#[async_trait]
pub trait InvoiceTransaction: Send {
    /// Stage an invoice insert; visible to readers only after commit
    async fn insert_invoice(&mut self, record: &InvoiceRecord) -> Result<()>;

    /// Make all staged statements durable
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Discard all staged statements
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// MySQL-backed invoice store
pub struct MySqlInvoiceStore {
    pool: MySqlPool,
}

impl MySqlInvoiceStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for MySqlInvoiceStore {
    async fn begin(&self) -> Result<Box<dyn InvoiceTransaction>> {
        let tx = self.pool.begin().await.map_err(|e| {
            AppError::transaction(format!("failed to begin transaction: {}", e))
        })?;

        Ok(Box::new(MySqlInvoiceTransaction { tx }))
    }

    async fn find_by_due_date_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<InvoiceRecord>> {
        let records = sqlx::query_as::<_, InvoiceRecord>(
            r#"
            SELECT id, company_id, client_id, issue_date, due_date,
                   payment_amount, fee_amount, tax_amount, total_amount, status
            FROM invoices
            WHERE due_date >= ? AND due_date <= ?
            ORDER BY id ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

struct MySqlInvoiceTransaction {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl InvoiceTransaction for MySqlInvoiceTransaction {
    async fn insert_invoice(&mut self, record: &InvoiceRecord) -> Result<()> {
        // id is assigned by the database
        sqlx::query(
            r#"
            INSERT INTO invoices (
                company_id, client_id, issue_date, due_date,
                payment_amount, fee_amount, tax_amount, total_amount, status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.company_id)
        .bind(record.client_id)
        .bind(record.issue_date)
        .bind(record.due_date)
        .bind(record.payment_amount)
        .bind(record.fee_amount)
        .bind(record.tax_amount)
        .bind(record.total_amount)
        .bind(&record.status)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| AppError::transaction(format!("failed to commit transaction: {}", e)))
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx
            .rollback()
            .await
            .map_err(|e| AppError::transaction(format!("failed to roll back transaction: {}", e)))
    }
}
