mod invoice;

pub use invoice::{Invoice, InvoiceRecord, DEFAULT_STATUS};
