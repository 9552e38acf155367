//! Invoice repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Invoice, InvoiceItem, NewInvoice, NewInvoiceItem, UpdateInvoice};
use crate::types::{InvoiceFilter, InvoiceStatus, PaymentMethod};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for invoice database operations.
///
/// Settlement methods ([`issue_invoice`], [`cancel_invoice`],
/// [`mark_invoice_paid`]) are guarded updates: they only fire when the row is
/// in the required status and return `None` otherwise, so each settlement
/// side effect happens exactly once.
///
/// [`issue_invoice`]: InvoiceRepository::issue_invoice
/// [`cancel_invoice`]: InvoiceRepository::cancel_invoice
/// [`mark_invoice_paid`]: InvoiceRepository::mark_invoice_paid
pub trait InvoiceRepository {
    /// Creates a new draft invoice.
    fn create_invoice(
        &mut self,
        new_invoice: NewInvoice,
    ) -> impl Future<Output = PgResult<Invoice>> + Send;

    /// Inserts line items for an invoice.
    fn add_invoice_items(
        &mut self,
        items: Vec<NewInvoiceItem>,
    ) -> impl Future<Output = PgResult<Vec<InvoiceItem>>> + Send;

    /// Finds an invoice by its unique identifier.
    fn find_invoice_by_id(
        &mut self,
        invoice_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Invoice>>> + Send;

    /// Lists the line items of an invoice.
    fn list_invoice_items(
        &mut self,
        invoice_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<InvoiceItem>>> + Send;

    /// Lists invoices matching the filter, newest first.
    fn list_invoices(
        &mut self,
        filter: InvoiceFilter,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Invoice>>> + Send;

    /// Updates a draft invoice.
    fn update_invoice(
        &mut self,
        invoice_id: Uuid,
        updates: UpdateInvoice,
    ) -> impl Future<Output = PgResult<Invoice>> + Send;

    /// Issues a draft invoice to the dealer, stamping `issued_at`.
    ///
    /// Returns `None` when the invoice is not a draft.
    fn issue_invoice(
        &mut self,
        invoice_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Invoice>>> + Send;

    /// Cancels a draft or issued invoice.
    ///
    /// Returns `None` when the invoice is already settled.
    fn cancel_invoice(
        &mut self,
        invoice_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Invoice>>> + Send;

    /// Marks an issued invoice as paid, stamping the payment method and time.
    ///
    /// Returns `None` when the invoice is not in the issued status, so the
    /// settlement side effects (balance debit, ledger entry) cannot
    /// double-apply.
    fn mark_invoice_paid(
        &mut self,
        invoice_id: Uuid,
        method: PaymentMethod,
    ) -> impl Future<Output = PgResult<Option<Invoice>>> + Send;

    /// Sums the totals of unpaid (issued) invoices, optionally per dealer.
    fn sum_outstanding_invoices(
        &mut self,
        dealer_id: Option<Uuid>,
    ) -> impl Future<Output = PgResult<bigdecimal::BigDecimal>> + Send;

    /// Returns the next sequential invoice number, e.g. `INV-2026-00042`.
    fn next_invoice_number(&mut self) -> impl Future<Output = PgResult<String>> + Send;
}

impl InvoiceRepository for PgConnection {
    async fn create_invoice(&mut self, new_invoice: NewInvoice) -> PgResult<Invoice> {
        use schema::invoices;

        diesel::insert_into(invoices::table)
            .values(&new_invoice)
            .returning(Invoice::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn add_invoice_items(
        &mut self,
        items: Vec<NewInvoiceItem>,
    ) -> PgResult<Vec<InvoiceItem>> {
        use schema::invoice_items;

        diesel::insert_into(invoice_items::table)
            .values(&items)
            .returning(InvoiceItem::as_returning())
            .get_results(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_invoice_by_id(&mut self, invoice_id: Uuid) -> PgResult<Option<Invoice>> {
        use schema::invoices::{self, dsl};

        invoices::table
            .filter(dsl::id.eq(invoice_id))
            .select(Invoice::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_invoice_items(&mut self, invoice_id: Uuid) -> PgResult<Vec<InvoiceItem>> {
        use schema::invoice_items::{self, dsl};

        invoice_items::table
            .filter(dsl::invoice_id.eq(invoice_id))
            .order(dsl::created_at.asc())
            .select(InvoiceItem::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_invoices(
        &mut self,
        filter: InvoiceFilter,
        pagination: Pagination,
    ) -> PgResult<Vec<Invoice>> {
        use schema::invoices::{self, dsl};

        let mut query = invoices::table.into_boxed();

        if let Some(dealer_id) = filter.dealer_id {
            query = query.filter(dsl::dealer_id.eq(dealer_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::current_status.eq(status));
        }

        query
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Invoice::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_invoice(
        &mut self,
        invoice_id: Uuid,
        updates: UpdateInvoice,
    ) -> PgResult<Invoice> {
        use schema::invoices::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(invoices::table.filter(dsl::id.eq(invoice_id)))
            .set((&updates, dsl::updated_at.eq(now)))
            .returning(Invoice::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn issue_invoice(&mut self, invoice_id: Uuid) -> PgResult<Option<Invoice>> {
        use schema::invoices::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(
            invoices::table
                .filter(dsl::id.eq(invoice_id))
                .filter(dsl::current_status.eq(InvoiceStatus::Draft)),
        )
        .set((
            dsl::current_status.eq(InvoiceStatus::Issued),
            dsl::issued_at.eq(Some(now)),
            dsl::updated_at.eq(now),
        ))
        .returning(Invoice::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }

    async fn cancel_invoice(&mut self, invoice_id: Uuid) -> PgResult<Option<Invoice>> {
        use schema::invoices::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(
            invoices::table
                .filter(dsl::id.eq(invoice_id))
                .filter(dsl::current_status.eq_any([InvoiceStatus::Draft, InvoiceStatus::Issued])),
        )
        .set((
            dsl::current_status.eq(InvoiceStatus::Cancelled),
            dsl::updated_at.eq(now),
        ))
        .returning(Invoice::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }

    async fn mark_invoice_paid(
        &mut self,
        invoice_id: Uuid,
        method: PaymentMethod,
    ) -> PgResult<Option<Invoice>> {
        use schema::invoices::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(
            invoices::table
                .filter(dsl::id.eq(invoice_id))
                .filter(dsl::current_status.eq(InvoiceStatus::Issued)),
        )
        .set((
            dsl::current_status.eq(InvoiceStatus::Paid),
            dsl::paid_with.eq(Some(method)),
            dsl::paid_at.eq(Some(now)),
            dsl::updated_at.eq(now),
        ))
        .returning(Invoice::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }

    async fn sum_outstanding_invoices(
        &mut self,
        dealer_id: Option<Uuid>,
    ) -> PgResult<bigdecimal::BigDecimal> {
        use schema::invoices::{self, dsl};

        let mut query = invoices::table
            .filter(dsl::current_status.eq(InvoiceStatus::Issued))
            .into_boxed();

        if let Some(dealer_id) = dealer_id {
            query = query.filter(dsl::dealer_id.eq(dealer_id));
        }

        let sum: Option<bigdecimal::BigDecimal> = query
            .select(diesel::dsl::sum(dsl::total_amount))
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(sum.unwrap_or_else(|| bigdecimal::BigDecimal::from(0)))
    }

    async fn next_invoice_number(&mut self) -> PgResult<String> {
        use schema::invoices;

        let count: i64 = invoices::table
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        let year = Timestamp::now().to_zoned(jiff::tz::TimeZone::UTC).year();
        Ok(format!("INV-{}-{:05}", year, count + 1))
    }
}
