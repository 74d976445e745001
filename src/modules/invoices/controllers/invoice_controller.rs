use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::modules::invoices::models::Invoice;
use crate::modules::invoices::services::invoice_service::InvoiceService;

/// Query parameters for the due-date range lookup
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub from: String,
    pub to: String,
}

/// Mount the invoice routes under the versioned API base path
pub fn configure(cfg: &mut web::ServiceConfig) {
    // A malformed body gets the same {"error": ...} shape as every other
    // rejection instead of the extractor's plain-text default
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::validation(format!("invalid invoice payload: {}", err)).into()
    }))
    .service(
        web::scope("/api/v1/invoices")
            .route("", web::post().to(create_invoice))
            .route("", web::get().to(get_invoices_by_date_range)),
    );
}

/// Create a new invoice
/// POST /api/v1/invoices
pub async fn create_invoice(
    service: web::Data<InvoiceService>,
    payload: web::Json<Invoice>,
) -> Result<HttpResponse> {
    let invoice = payload.into_inner();

    // Reject structurally invalid invoices before any persistence attempt
    invoice.validate()?;

    service.create_invoice(invoice).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "success" })))
}

/// List invoices whose due date falls within an inclusive range
/// GET /api/v1/invoices?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn get_invoices_by_date_range(
    service: web::Data<InvoiceService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse> {
    let from = parse_date(&query.from, "from")?;
    let to = parse_date(&query.to, "to")?;

    let invoices = service.get_invoices_by_date_range(from, to).await?;

    Ok(HttpResponse::Ok().json(invoices))
}

fn parse_date(raw: &str, field: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!("invalid {} date format, expected YYYY-MM-DD", field))
    })?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
