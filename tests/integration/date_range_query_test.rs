// Read path: inclusive due-date range, deterministic ascending-id order,
// and idempotent repeated queries.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::fixtures::{date, invoice_due_on};
use helpers::memory_store::MemoryInvoiceStore;
use invopay::modules::invoices::services::invoice_service::InvoiceService;

async fn seeded_service() -> (InvoiceService, MemoryInvoiceStore) {
    let store = MemoryInvoiceStore::new();
    let service = InvoiceService::new(Arc::new(store.clone()));

    for due in [date(2024, 1, 1), date(2024, 1, 15), date(2024, 2, 1)] {
        service
            .create_invoice(invoice_due_on(due, 10000.0))
            .await
            .unwrap();
    }

    (service, store)
}

#[tokio::test]
async fn test_range_is_inclusive_on_both_ends() {
    let (service, _store) = seeded_service().await;

    let invoices = service
        .get_invoices_by_date_range(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();

    let due_dates: Vec<_> = invoices.iter().map(|i| i.due_date.unwrap()).collect();
    assert_eq!(due_dates, vec![date(2024, 1, 1), date(2024, 1, 15)]);
}

#[tokio::test]
async fn test_upper_boundary_date_is_included() {
    let (service, _store) = seeded_service().await;

    let invoices = service
        .get_invoices_by_date_range(date(2024, 1, 1), date(2024, 2, 1))
        .await
        .unwrap();

    assert_eq!(invoices.len(), 3);
}

#[tokio::test]
async fn test_results_are_ordered_by_ascending_id() {
    let (service, _store) = seeded_service().await;

    let invoices = service
        .get_invoices_by_date_range(date(2024, 1, 1), date(2024, 12, 31))
        .await
        .unwrap();

    let ids: Vec<_> = invoices.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_no_matches_yields_empty_list_not_error() {
    let (service, _store) = seeded_service().await;

    let invoices = service
        .get_invoices_by_date_range(date(2025, 1, 1), date(2025, 12, 31))
        .await
        .unwrap();

    assert!(invoices.is_empty());
}

#[tokio::test]
async fn test_repeated_query_returns_identical_results() {
    let (service, _store) = seeded_service().await;

    let first = service
        .get_invoices_by_date_range(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    let second = service
        .get_invoices_by_date_range(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_read_back_reproduces_derived_amounts() {
    let (service, _store) = seeded_service().await;

    let invoices = service
        .get_invoices_by_date_range(date(2024, 1, 1), date(2024, 1, 1))
        .await
        .unwrap();

    assert_eq!(invoices.len(), 1);
    let invoice = &invoices[0];
    assert_eq!(invoice.payment_amount, 10000.0);
    assert_eq!(invoice.fee_amount, 400.0);
    assert!((invoice.tax_amount - 440.0).abs() < 1e-9);
    assert!((invoice.total_amount - 10840.0).abs() < 1e-9);
    assert_eq!(invoice.status, "unprocessed");
}
