use crate::ledger::Ticket;

use anyhow::{Context, Result};
use std::path::Path;

const HEADER: [&str; 6] = ["ID", "Name", "Age", "TrainNo", "Coach", "Seat"];

/// Rewrites the whole ticket file: the fixed header line, then one row per
/// ticket in ledger order. The header is written even when the ledger is
/// empty.
pub fn save_tickets(path: &Path, tickets: &[Ticket]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating ticket file {}", path.display()))?;

    writer.write_record(HEADER)?;
    for ticket in tickets {
        writer.serialize(ticket)?;
    }
    writer
        .flush()
        .with_context(|| format!("writing ticket file {}", path.display()))?;
    Ok(())
}

/// Reads the ticket file back, skipping the header. A missing file means no
/// tickets yet, not an error. A malformed row (wrong field count, non-numeric
/// numeric field) is skipped with a warning; every valid row survives.
pub fn load_tickets(path: &Path) -> Result<Vec<Ticket>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening ticket file {}", path.display()))?;

    let mut tickets = Vec::new();
    for (idx, record) in reader.deserialize::<Ticket>().enumerate() {
        match record {
            Ok(ticket) => tickets.push(ticket),
            // Line 1 is the header, so data row idx sits on line idx + 2.
            Err(e) => log::warn!("skipping malformed ticket row on line {}: {e}", idx + 2),
        }
    }
    Ok(tickets)
}
