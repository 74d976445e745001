use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::core::error::Result;
use crate::modules::invoices::models::{Invoice, InvoiceRecord};
use crate::modules::invoices::repositories::invoice_repository::InvoiceStore;
use crate::modules::invoices::repositories::transaction::run_in_transaction;

/// Orchestrates the invoice write and read paths
pub struct InvoiceService {
    store: Arc<dyn InvoiceStore>,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self { store }
    }

    /// Save an invoice after deriving its fee, tax, and total amounts.
    ///
    /// Even though it is a single insert, the write runs under the
    /// transaction coordinator so a failure leaves no partial row behind.
    pub async fn create_invoice(&self, mut invoice: Invoice) -> Result<()> {
        invoice.apply_derived_amounts();

        run_in_transaction(self.store.as_ref(), move |tx| {
            Box::pin(async move {
                let record = invoice.to_record().map_err(|e| {
                    error!(error = %e, "failed to convert entity to model");
                    e
                })?;

                tx.insert_invoice(&record).await.map_err(|e| {
                    error!(error = %e, "failed to insert invoice");
                    e
                })
            })
        })
        .await
    }

    /// Retrieve saved invoices whose due date falls within the inclusive
    /// range `[from, to]`, ordered by ascending id.
    pub async fn get_invoices_by_date_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Invoice>> {
        info!("listing invoices");

        let records = self
            .store
            .find_by_due_date_range(from, to)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to get invoices");
                e
            })?;

        records
            .into_iter()
            .map(InvoiceRecord::into_entity)
            .collect()
    }
}
