pub mod invoice_repository;
pub mod transaction;

pub use invoice_repository::{InvoiceStore, InvoiceTransaction, MySqlInvoiceStore};
pub use transaction::run_in_transaction;
