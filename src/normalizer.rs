//! Raw transaction record → display-ready summary
//!
//! Stateless. Native transfers pass through with lamports scaled to SOL.
//! Token transfers are kept only when they are a genuine movement between two
//! different owners:
//! - mint is not wrapped SOL (fee/wrap noise)
//! - sender and receiver owners differ
//! - amount is strictly positive

use {
    crate::raw::{RawNativeTransfer, RawTokenTransfer, RawTransaction},
    chrono::{DateTime, Local, TimeDelta, TimeZone, Utc},
    serde::Serialize,
};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Wrapped SOL mint
pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// `DD-MM-YYYY HH:mm:ss`
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeTransfer {
    pub from_address: String,
    pub to_address: String,
    /// SOL
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenTransfer {
    pub mint: String,
    pub amount: f64,
    pub from_address: String,
    pub to_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    /// Fee in SOL
    pub fee_decimal: f64,
    pub fee_payer: String,
    /// Empty when the block time cannot be placed on the display clock
    pub formatted_timestamp: String,
    pub native_transfers: Vec<NativeTransfer>,
    pub token_transfers: Vec<TokenTransfer>,
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Normalize against the local clock at `now_epoch_seconds`
///
/// Deterministic: the display clock is derived from the same instant used to
/// compute the transaction's age.
pub fn normalize(raw: RawTransaction, now_epoch_seconds: i64) -> TransactionSummary {
    let wall_clock = match DateTime::from_timestamp(now_epoch_seconds, 0) {
        Some(now) => now.with_timezone(&Local),
        None => {
            log::warn!("Clock value {} out of range, using epoch", now_epoch_seconds);
            DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local)
        }
    };

    normalize_at(raw, now_epoch_seconds, wall_clock)
}

/// Normalize with separate age and display clock readings
///
/// The timestamp is rendered as `wall_clock - (now_epoch_seconds - raw.timestamp)`.
/// When both readings describe the same instant this equals the block time on
/// `wall_clock`'s timezone; skew between them shifts the result by the same amount.
pub fn normalize_at<Tz>(
    raw: RawTransaction,
    now_epoch_seconds: i64,
    wall_clock: DateTime<Tz>,
) -> TransactionSummary
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let formatted_timestamp = format_block_time(raw.timestamp, now_epoch_seconds, &wall_clock)
        .unwrap_or_else(|| {
            log::warn!(
                "Block time {} cannot be placed relative to now={}",
                raw.timestamp,
                now_epoch_seconds
            );
            String::new()
        });

    let native_transfers = raw
        .native_transfers
        .iter()
        .map(NativeTransfer::from)
        .collect();

    let token_transfers = filter_token_transfers(&raw.token_transfers)
        .into_iter()
        .map(TokenTransfer::from)
        .collect();

    TransactionSummary {
        fee_decimal: lamports_to_sol(raw.fee),
        fee_payer: raw.fee_payer,
        formatted_timestamp,
        native_transfers,
        token_transfers,
    }
}

fn format_block_time<Tz>(
    block_time: i64,
    now_epoch_seconds: i64,
    wall_clock: &DateTime<Tz>,
) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let age_secs = now_epoch_seconds.checked_sub(block_time)?;
    let age = TimeDelta::try_seconds(age_secs)?;
    let at = wall_clock.clone().checked_sub_signed(age)?;
    Some(at.format(TIMESTAMP_FORMAT).to_string())
}

/// Whether a token transfer is a genuine movement worth displaying
pub fn is_display_transfer(transfer: &RawTokenTransfer) -> bool {
    let is_gas_transfer = transfer.mint == WRAPPED_SOL_MINT;
    let is_self_transfer = transfer.from_user_account == transfer.to_user_account;

    !is_gas_transfer && !is_self_transfer && transfer.token_amount > 0.0
}

/// Keep displayable token transfers, preserving their order
pub fn filter_token_transfers(transfers: &[RawTokenTransfer]) -> Vec<&RawTokenTransfer> {
    transfers.iter().filter(|t| is_display_transfer(t)).collect()
}

impl From<&RawNativeTransfer> for NativeTransfer {
    fn from(transfer: &RawNativeTransfer) -> Self {
        Self {
            from_address: transfer.from_user_account.clone(),
            to_address: transfer.to_user_account.clone(),
            amount: lamports_to_sol(transfer.amount),
        }
    }
}

impl From<&RawTokenTransfer> for TokenTransfer {
    fn from(transfer: &RawTokenTransfer) -> Self {
        Self {
            mint: transfer.mint.clone(),
            amount: transfer.token_amount,
            from_address: transfer.from_user_account.clone(),
            to_address: transfer.to_user_account.clone(),
        }
    }
}
