//! Plain-text rendering of a [`TransactionSummary`]

use {
    crate::normalizer::TransactionSummary,
    std::fmt::{self, Display, Formatter},
};

const EDGE_CHARS: usize = 5;

/// `abcde...vwxyz` form of an address
///
/// Strings of 13 chars or fewer are returned whole instead of being sliced
/// into overlapping halves.
pub fn shorten_address(address: &str) -> String {
    let count = address.chars().count();
    if count <= EDGE_CHARS * 2 + 3 {
        return address.to_string();
    }

    let head: String = address.chars().take(EDGE_CHARS).collect();
    let tail: String = address.chars().skip(count - EDGE_CHARS).collect();
    format!("{}...{}", head, tail)
}

/// Display adapter laying a summary out the way the details page does
pub struct SummaryReport<'a> {
    summary: &'a TransactionSummary,
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a TransactionSummary) -> Self {
        Self { summary }
    }
}

impl Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        let mut when = s.formatted_timestamp.splitn(2, ' ');
        let date = when.next().unwrap_or_default();
        let time = when.next().unwrap_or_default();

        writeln!(f, "Transaction Details")?;
        writeln!(f, "Gas: {} SOL", s.fee_decimal)?;
        writeln!(f, "Gas Payer: {}", shorten_address(&s.fee_payer))?;
        writeln!(f, "Transaction Date: {}", date)?;
        writeln!(f, "Transaction Time: {}", time)?;

        if !s.native_transfers.is_empty() {
            writeln!(f)?;
            writeln!(f, "Solana Balance Changes")?;
            for (index, transfer) in s.native_transfers.iter().enumerate() {
                writeln!(f, "{}. Sender: {}", index + 1, shorten_address(&transfer.from_address))?;
                writeln!(f, "   Receiver: {}", shorten_address(&transfer.to_address))?;
                writeln!(f, "   Amount: {}", transfer.amount)?;
            }
        }

        if !s.token_transfers.is_empty() {
            writeln!(f)?;
            writeln!(f, "Token Balance Changes")?;
            for (index, transfer) in s.token_transfers.iter().enumerate() {
                writeln!(f, "{}. Token Mint: {}", index + 1, shorten_address(&transfer.mint))?;
                writeln!(f, "   Sender: {}", shorten_address(&transfer.from_address))?;
                writeln!(f, "   Receiver: {}", shorten_address(&transfer.to_address))?;
                writeln!(f, "   Amount: {}", transfer.amount)?;
            }
        }

        Ok(())
    }
}
