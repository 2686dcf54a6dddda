use crate::ledger::Ticket;
use crate::persistence::save_tickets;
use crate::state::AppState;

use std::path::Path;
use thiserror::Error;

/// The two absent-outcomes of the workflows are distinct variants so a
/// caller can never mistake a full berth band for a missing ticket.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("no seat available as per your berth preference")]
    NoSeatAvailable,
    #[error("ticket {0} not found")]
    TicketNotFound(u32),
    #[error("train {0} not found")]
    UnknownTrain(u32),
}

/// Books one ticket: resolves the train, takes the first free seat in the
/// age's berth band, issues the ticket, then rewrites the ticket file.
/// When the band is full no ledger mutation happens and no id is consumed.
pub fn book(
    state: &mut AppState,
    ticket_file: &Path,
    name: &str,
    age: u32,
    train_no: u32,
) -> Result<Ticket, ReservationError> {
    let train = state
        .find_train_mut(train_no)
        .ok_or(ReservationError::UnknownTrain(train_no))?;
    let (coach, seat) = train
        .assign_seat(age)
        .ok_or(ReservationError::NoSeatAvailable)?;

    let ticket = state.ledger.issue(name, age, train_no, coach, seat).clone();
    persist(state, ticket_file);
    Ok(ticket)
}

/// Cancels the ticket with this id: frees its seat (skipped when the train
/// is no longer in the catalog), removes it from the ledger, rewrites the
/// ticket file.
pub fn cancel(
    state: &mut AppState,
    ticket_file: &Path,
    id: u32,
) -> Result<Ticket, ReservationError> {
    let ticket = state
        .ledger
        .cancel(id)
        .ok_or(ReservationError::TicketNotFound(id))?;

    if let Some(train) = state.find_train_mut(ticket.train_no) {
        train.cancel_seat(ticket.coach, ticket.seat);
    } else {
        log::warn!(
            "cancelled ticket {} referenced unknown train {}; no seat to free",
            ticket.id,
            ticket.train_no
        );
    }

    persist(state, ticket_file);
    Ok(ticket)
}

// A failed save leaves memory and disk inconsistent until the next
// successful save; in-memory state is not rolled back.
fn persist(state: &AppState, ticket_file: &Path) {
    if let Err(e) = save_tickets(ticket_file, state.ledger.tickets()) {
        eprintln!("Error saving tickets: {e:#}");
    }
}
