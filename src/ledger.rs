use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIRST_TICKET_ID: u32 = 1000;

// Field renames pin the CSV header to ID,Name,Age,TrainNo,Coach,Seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: CompactString,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "TrainNo")]
    pub train_no: u32,
    #[serde(rename = "Coach")]
    pub coach: u32,
    #[serde(rename = "Seat")]
    pub seat: u32,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket ID: {} | Name: {} | Age: {} | Train: {} | Coach: {} | Seat: {}",
            self.id, self.name, self.age, self.train_no, self.coach, self.seat
        )
    }
}

/// All currently-issued tickets, in booking order, plus the monotonic id
/// counter. Ids never repeat within a process lifetime, including after a
/// reload of persisted tickets.
pub struct Ledger {
    tickets: Vec<Ticket>,
    next_id: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: FIRST_TICKET_ID,
        }
    }

    /// Allocates the next id and appends the ticket.
    pub fn issue(&mut self, name: &str, age: u32, train_no: u32, coach: u32, seat: u32) -> &Ticket {
        let ticket = Ticket {
            id: self.next_id,
            name: CompactString::from(name),
            age,
            train_no,
            coach,
            seat,
        };
        self.next_id += 1;
        self.tickets.push(ticket);
        self.tickets.last().expect("ticket was just pushed")
    }

    /// Removes and returns the first ticket with this id.
    pub fn cancel(&mut self, id: u32) -> Option<Ticket> {
        let idx = self.tickets.iter().position(|t| t.id == id)?;
        Some(self.tickets.remove(idx))
    }

    /// Re-inserts a persisted ticket, bumping the counter past its id so
    /// freshly issued ids never collide with loaded ones.
    pub fn restore(&mut self, ticket: Ticket) {
        if ticket.id >= self.next_id {
            self.next_id = ticket.id + 1;
        }
        self.tickets.push(ticket);
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_1000_and_increase() {
        let mut ledger = Ledger::new();
        let first = ledger.issue("Alice Smith", 52, 101, 1, 1).id;
        let second = ledger.issue("Bob Jones", 30, 101, 1, 51).id;
        assert_eq!(first, 1000);
        assert_eq!(second, 1001);
    }

    #[test]
    fn test_cancel_removes_and_returns() {
        let mut ledger = Ledger::new();
        let id = ledger.issue("Alice Smith", 52, 101, 1, 1).id;
        ledger.issue("Bob Jones", 30, 102, 1, 51);

        let cancelled = ledger.cancel(id).expect("ticket should exist");
        assert_eq!(cancelled.name, "Alice Smith");
        assert_eq!(ledger.len(), 1);
        assert!(ledger.tickets().iter().all(|t| t.id != id));
    }

    #[test]
    fn test_cancel_unknown_id_is_none() {
        let mut ledger = Ledger::new();
        ledger.issue("Alice Smith", 52, 101, 1, 1);
        assert!(ledger.cancel(9999).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_restore_bumps_counter_past_loaded_ids() {
        let mut ledger = Ledger::new();
        ledger.restore(Ticket {
            id: 1050,
            name: CompactString::from("Alice Smith"),
            age: 52,
            train_no: 101,
            coach: 1,
            seat: 1,
        });
        assert_eq!(ledger.issue("Bob Jones", 30, 101, 1, 51).id, 1051);
    }

    #[test]
    fn test_restore_never_lowers_counter() {
        let mut ledger = Ledger::new();
        ledger.issue("Alice Smith", 52, 101, 1, 1); // consumes 1000
        ledger.restore(Ticket {
            id: 500,
            name: CompactString::from("Old Record"),
            age: 40,
            train_no: 102,
            coach: 1,
            seat: 51,
        });
        assert_eq!(ledger.issue("Bob Jones", 30, 101, 1, 51).id, 1001);
    }

    #[test]
    fn test_insertion_order_is_booking_order() {
        let mut ledger = Ledger::new();
        ledger.issue("Alice Smith", 52, 101, 1, 1);
        ledger.issue("Bob Jones", 30, 102, 1, 51);
        let ids: Vec<u32> = ledger.tickets().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1000, 1001]);
    }
}
