//! Invoice recording service library.
//!
//! Records invoices for companies and their clients, derives fee/tax/total
//! amounts from the payment amount, persists each invoice atomically, and
//! retrieves invoices by due-date range.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
