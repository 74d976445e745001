// Transaction coordinator.
//
// Executes a unit-of-work closure with exactly-once commit-or-rollback
// semantics. The open transaction is handed to the closure as an explicit
// handle rather than smuggled through ambient state, and it is only valid
// for the duration of that closure. Nested coordinator calls are not
// supported; all statements that must commit together belong in one
// closure.

use futures_util::future::BoxFuture;
use tracing::{debug, error};

use crate::core::error::Result;
use crate::modules::invoices::repositories::invoice_repository::{
    InvoiceStore, InvoiceTransaction,
};

/// Run `work` inside a transaction on `store`.
///
/// Begins a transaction, invokes `work` with the open handle, then commits
/// if `work` succeeded or rolls back if it failed. Commit and rollback both
/// consume the handle, so exactly one of the two occurs per invocation.
///
/// A commit failure is returned to the caller even though `work` succeeded.
/// A rollback failure is logged but never masks the error that triggered
/// the rollback.
pub async fn run_in_transaction<F>(store: &dyn InvoiceStore, work: F) -> Result<()>
where
    F: for<'t> FnOnce(&'t mut dyn InvoiceTransaction) -> BoxFuture<'t, Result<()>> + Send,
{
    let mut tx = store.begin().await?;
    debug!("transaction started");

    let outcome = work(tx.as_mut()).await;

    match outcome {
        Ok(()) => {
            tx.commit().await?;
            debug!("transaction committed");
            Ok(())
        }
        Err(work_err) => {
            if let Err(rollback_err) = tx.rollback().await {
                error!(error = %rollback_err, "transaction rollback failed");
            } else {
                debug!("transaction rolled back");
            }
            Err(work_err)
        }
    }
}
