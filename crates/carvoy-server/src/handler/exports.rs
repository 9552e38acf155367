//! Export download handlers (admin only).
//!
//! Renders ledger and fleet listings as CSV or XLSX attachment downloads.
//! These routes return binary bodies and are registered outside the OpenAPI
//! document.

use aide::axum::ApiRouter;
use axum::extract::State;
use axum::routing::get;
use axum_extra::response::Attachment;
use carvoy_postgres::PgClient;
use carvoy_postgres::query::{
    BalanceTransactionRepository, Pagination, VehicleRepository,
};
use carvoy_postgres::types::{TransactionFilter, VehicleFilter, VehicleSort};

use crate::extract::{AuthState, Query};
use crate::handler::Result;
use crate::handler::request::TransactionParams;
use crate::service::{ExportFormat, ServiceState, TableDocument};

/// Tracing target for export operations.
const TRACING_TARGET: &str = "carvoy_server::handler::exports";

/// Upper bound on exported rows per download.
const EXPORT_ROW_LIMIT: i64 = 10_000;

/// Builds the ledger export document.
async fn transactions_document(
    pg_client: &PgClient,
    params: &TransactionParams,
) -> Result<TableDocument> {
    let filter = TransactionFilter {
        account_id: params.account_id,
        from: params.from,
        until: params.until,
    };

    let mut conn = pg_client.get_connection().await?;
    let transactions = conn
        .list_balance_transactions(filter, Pagination::new(EXPORT_ROW_LIMIT, 0))
        .await?;

    let headers = ["Date", "Account", "Kind", "Amount", "Balance After", "Invoice", "Note"]
        .map(String::from)
        .to_vec();

    let rows = transactions
        .into_iter()
        .map(|tx| {
            vec![
                jiff::Timestamp::from(tx.created_at).to_string(),
                tx.account_id.to_string(),
                tx.kind.to_string(),
                tx.amount.to_string(),
                tx.balance_after.to_string(),
                tx.invoice_id.map(|id| id.to_string()).unwrap_or_default(),
                tx.note.unwrap_or_default(),
            ]
        })
        .collect();

    Ok(TableDocument::new("transactions", headers, rows))
}

/// Builds the fleet export document.
async fn vehicles_document(pg_client: &PgClient) -> Result<TableDocument> {
    let mut conn = pg_client.get_connection().await?;
    let vehicles = conn
        .list_vehicles(
            VehicleFilter::default(),
            VehicleSort::default(),
            Pagination::new(EXPORT_ROW_LIMIT, 0),
        )
        .await?;

    let headers = [
        "VIN",
        "Year",
        "Status",
        "Dealer",
        "Lot",
        "Purchase Price",
        "Purchased On",
        "Container",
        "ETA",
    ]
    .map(String::from)
    .to_vec();

    let rows = vehicles
        .into_iter()
        .map(|vehicle| {
            vec![
                vehicle.vin,
                vehicle.model_year.to_string(),
                vehicle.current_status.to_string(),
                vehicle.dealer_id.to_string(),
                vehicle.lot_number.unwrap_or_default(),
                vehicle
                    .purchase_price
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
                vehicle
                    .purchased_on
                    .map(|d| jiff::civil::Date::from(d).to_string())
                    .unwrap_or_default(),
                vehicle.container_number.unwrap_or_default(),
                vehicle
                    .estimated_arrival_on
                    .map(|d| jiff::civil::Date::from(d).to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();

    Ok(TableDocument::new("vehicles", headers, rows))
}

/// Renders a document as an attachment download.
fn attachment(document: &TableDocument, format: ExportFormat) -> Result<Attachment<Vec<u8>>> {
    let bytes = document.render(format)?;

    tracing::info!(
        target: TRACING_TARGET,
        document = %document.title,
        format = format.extension(),
        rows = document.rows.len(),
        bytes = bytes.len(),
        "export rendered"
    );

    Ok(Attachment::new(bytes)
        .filename(document.file_name(format))
        .content_type(format.content_type()))
}

macro_rules! export_handler {
    ($name:ident, transactions, $format:expr) => {
        async fn $name(
            State(pg_client): State<PgClient>,
            AuthState(auth_state): AuthState,
            Query(params): Query<TransactionParams>,
        ) -> Result<Attachment<Vec<u8>>> {
            auth_state.authorize_admin()?;
            let document = transactions_document(&pg_client, &params).await?;
            attachment(&document, $format)
        }
    };
    ($name:ident, vehicles, $format:expr) => {
        async fn $name(
            State(pg_client): State<PgClient>,
            AuthState(auth_state): AuthState,
        ) -> Result<Attachment<Vec<u8>>> {
            auth_state.authorize_admin()?;
            let document = vehicles_document(&pg_client).await?;
            attachment(&document, $format)
        }
    };
}

export_handler!(export_transactions_csv, transactions, ExportFormat::Csv);
export_handler!(export_transactions_xlsx, transactions, ExportFormat::Xlsx);
export_handler!(export_vehicles_csv, vehicles, ExportFormat::Csv);
export_handler!(export_vehicles_xlsx, vehicles, ExportFormat::Xlsx);

/// Returns routes for export downloads.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .route("/exports/transactions.csv", get(export_transactions_csv))
        .route("/exports/transactions.xlsx", get(export_transactions_xlsx))
        .route("/exports/vehicles.csv", get(export_vehicles_csv))
        .route("/exports/vehicles.xlsx", get(export_vehicles_xlsx))
}
