// Invoices module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Invoice, InvoiceRecord};
pub use repositories::{InvoiceStore, InvoiceTransaction, MySqlInvoiceStore};
pub use services::InvoiceService;
