//! Wire model of an enhanced transaction record from the indexing service
//!
//! Only the fields the summary needs are declared. Anything else in the
//! payload is ignored; a missing declared field fails decoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Block time, seconds since epoch
    pub timestamp: i64,
    /// Fee in lamports
    pub fee: u64,
    pub fee_payer: String,
    pub native_transfers: Vec<RawNativeTransfer>,
    pub token_transfers: Vec<RawTokenTransfer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNativeTransfer {
    pub from_user_account: String,
    pub to_user_account: String,
    /// Lamports
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenTransfer {
    pub mint: String,
    /// Already scaled by the mint's decimals
    pub token_amount: f64,
    pub from_user_account: String,
    pub to_user_account: String,
    pub from_token_account: String,
    pub to_token_account: String,
}
