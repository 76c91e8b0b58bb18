use {
    crate::{
        error::SummaryError,
        fetcher::TransactionSource,
        normalizer::{normalize_at, TransactionSummary},
    },
    chrono::{Local, Utc},
};

/// Fetch one transaction and normalize it for display
///
/// The clock is read twice after the fetch completes: once for the age in
/// epoch seconds, once for the local wall clock the timestamp is rendered on.
pub async fn get_transaction_summary<S>(
    source: &S,
    transaction_id: &str,
) -> Result<TransactionSummary, SummaryError>
where
    S: TransactionSource + ?Sized,
{
    // Surrounding whitespace is dropped on purpose, so whitespace-only input is rejected too.
    let transaction_id = transaction_id.trim();
    if transaction_id.is_empty() {
        return Err(SummaryError::InvalidInput(
            "transaction id is empty".to_string(),
        ));
    }

    log::info!("🔎 Looking up transaction {}", transaction_id);

    let raw = source.fetch(transaction_id).await?;

    let now_epoch_seconds = Utc::now().timestamp();
    let wall_clock = Local::now();
    let summary = normalize_at(raw, now_epoch_seconds, wall_clock);

    log::debug!(
        "Transaction {}: fee={} SOL, {} native transfers, {} token transfers",
        transaction_id,
        summary.fee_decimal,
        summary.native_transfers.len(),
        summary.token_transfers.len()
    );

    Ok(summary)
}
