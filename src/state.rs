use crate::ledger::{Ledger, Ticket};
use crate::train::Train;

pub struct AppState {
    pub trains: Vec<Train>,
    pub ledger: Ledger,
}

impl AppState {
    /// Builds the state with the fixed train catalog and an empty ledger.
    pub fn new() -> Self {
        let trains = vec![
            Train::new(101, "Shatabdi", "Delhi", "Bhopal"),
            Train::new(102, "Rajdhani", "Mumbai", "Delhi"),
            Train::new(103, "Duronto", "Chennai", "Kolkata"),
        ];
        Self {
            trains,
            ledger: Ledger::new(),
        }
    }

    pub fn find_train(&self, train_no: u32) -> Option<&Train> {
        self.trains.iter().find(|t| t.train_no == train_no)
    }

    pub fn find_train_mut(&mut self, train_no: u32) -> Option<&mut Train> {
        self.trains.iter_mut().find(|t| t.train_no == train_no)
    }

    /// Re-inserts persisted tickets and marks their seats occupied. A ticket
    /// whose train is no longer in the catalog is kept in the ledger with no
    /// seat marked; same for coordinates outside the grid.
    pub fn restore_tickets(&mut self, tickets: Vec<Ticket>) {
        for ticket in tickets {
            match self.find_train_mut(ticket.train_no) {
                Some(train) => {
                    if !train.mark_seat(ticket.coach, ticket.seat) {
                        log::warn!(
                            "ticket {} references seat ({}, {}) outside the grid; seat not marked",
                            ticket.id,
                            ticket.coach,
                            ticket.seat
                        );
                    }
                }
                None => {
                    log::warn!(
                        "ticket {} references unknown train {}; seat not marked",
                        ticket.id,
                        ticket.train_no
                    );
                }
            }
            self.ledger.restore(ticket);
        }
        if !self.ledger.is_empty() {
            log::info!("restored {} tickets from disk", self.ledger.len());
        }
    }
}
