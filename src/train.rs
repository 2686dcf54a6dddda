use compact_str::CompactString;
use std::fmt;

pub const COACHES: usize = 7;
pub const SEATS_PER_COACH: usize = 100;

// Seats 1-50 of every coach are the lower-berth band held for passengers
// over 45; younger passengers scan seats 51-100. Neither band falls back
// to the other when full.
const SENIOR_AGE_CUTOFF: u32 = 45;
const BAND_SPLIT: usize = 50;

pub struct Train {
    pub train_no: u32,
    pub name: CompactString,
    pub source: CompactString,
    pub destination: CompactString,
    // Occupancy grid. Dimensions are fixed at construction.
    booked: [[bool; SEATS_PER_COACH]; COACHES],
}

impl Train {
    pub fn new(train_no: u32, name: &str, source: &str, destination: &str) -> Self {
        Self {
            train_no,
            name: CompactString::from(name),
            source: CompactString::from(source),
            destination: CompactString::from(destination),
            booked: [[false; SEATS_PER_COACH]; COACHES],
        }
    }

    /// Finds the first free seat in the berth band for this age, scanning
    /// coaches in ascending order and seats in ascending order within the
    /// band. Marks the seat occupied and returns 1-based (coach, seat).
    /// `None` means the whole band is full across every coach; that is a
    /// normal outcome, not an error.
    pub fn assign_seat(&mut self, age: u32) -> Option<(u32, u32)> {
        let (start, end) = if age > SENIOR_AGE_CUTOFF {
            (0, BAND_SPLIT)
        } else {
            (BAND_SPLIT, SEATS_PER_COACH)
        };

        for coach in 0..COACHES {
            for seat in start..end {
                if !self.booked[coach][seat] {
                    self.booked[coach][seat] = true;
                    return Some((coach as u32 + 1, seat as u32 + 1));
                }
            }
        }
        None
    }

    /// Frees the seat at 1-based coordinates. The caller guarantees the
    /// coordinates came from a previously issued ticket.
    pub fn cancel_seat(&mut self, coach: u32, seat: u32) {
        if let Some(flag) = self.seat_mut(coach, seat) {
            *flag = false;
        }
    }

    /// Marks a seat occupied from a restored ticket. Returns false when the
    /// coordinates fall outside the grid, in which case nothing is marked.
    pub fn mark_seat(&mut self, coach: u32, seat: u32) -> bool {
        match self.seat_mut(coach, seat) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    fn seat_mut(&mut self, coach: u32, seat: u32) -> Option<&mut bool> {
        let coach_idx = (coach as usize).checked_sub(1)?;
        let seat_idx = (seat as usize).checked_sub(1)?;
        self.booked.get_mut(coach_idx)?.get_mut(seat_idx)
    }

    /// Total free seats across the grid. Display only.
    pub fn available_count(&self) -> usize {
        let occupied: usize = self
            .booked
            .iter()
            .map(|coach| coach.iter().filter(|&&b| b).count())
            .sum();
        COACHES * SEATS_PER_COACH - occupied
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} -> {} | Available: {}",
            self.train_no,
            self.name,
            self.source,
            self.destination,
            self.available_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train() -> Train {
        Train::new(101, "Shatabdi", "Delhi", "Bhopal")
    }

    #[test]
    fn test_senior_band_starts_at_seat_one() {
        let mut t = train();
        assert_eq!(t.assign_seat(50), Some((1, 1)));
        assert_eq!(t.assign_seat(46), Some((1, 2)));
    }

    #[test]
    fn test_junior_band_starts_at_seat_fifty_one() {
        let mut t = train();
        assert_eq!(t.assign_seat(30), Some((1, 51)));
        // 45 is the cutoff itself, still the upper band.
        assert_eq!(t.assign_seat(45), Some((1, 52)));
    }

    #[test]
    fn test_senior_band_never_crosses_into_upper_seats() {
        let mut t = train();
        for _ in 0..COACHES * BAND_SPLIT {
            let (_, seat) = t.assign_seat(60).expect("band should not be full yet");
            assert!(seat <= BAND_SPLIT as u32, "senior got seat {seat}");
        }
        // Band exhausted across all coaches: no fallback to the upper band.
        assert_eq!(t.assign_seat(60), None);
        assert_eq!(t.assign_seat(30), Some((1, 51)));
    }

    #[test]
    fn test_junior_band_never_crosses_into_lower_seats() {
        let mut t = train();
        for _ in 0..COACHES * (SEATS_PER_COACH - BAND_SPLIT) {
            let (_, seat) = t.assign_seat(20).expect("band should not be full yet");
            assert!(seat > BAND_SPLIT as u32, "junior got seat {seat}");
        }
        assert_eq!(t.assign_seat(20), None);
        assert_eq!(t.assign_seat(70), Some((1, 1)));
    }

    #[test]
    fn test_fills_coach_before_moving_to_next() {
        let mut t = train();
        for _ in 0..BAND_SPLIT {
            let (coach, _) = t.assign_seat(50).unwrap();
            assert_eq!(coach, 1);
        }
        assert_eq!(t.assign_seat(50), Some((2, 1)));
    }

    #[test]
    fn test_cancel_frees_exactly_that_seat() {
        let mut t = train();
        let first = t.assign_seat(50).unwrap();
        let second = t.assign_seat(50).unwrap();
        assert_eq!(first, (1, 1));
        assert_eq!(second, (1, 2));

        t.cancel_seat(1, 1);
        // The freed seat comes first in scan order and is reused.
        assert_eq!(t.assign_seat(50), Some((1, 1)));
        assert_eq!(t.assign_seat(50), Some((1, 3)));
    }

    #[test]
    fn test_available_count_tracks_mutations() {
        let mut t = train();
        assert_eq!(t.available_count(), COACHES * SEATS_PER_COACH);
        t.assign_seat(50);
        t.assign_seat(20);
        assert_eq!(t.available_count(), COACHES * SEATS_PER_COACH - 2);
        t.cancel_seat(1, 1);
        assert_eq!(t.available_count(), COACHES * SEATS_PER_COACH - 1);
    }

    #[test]
    fn test_mark_seat_rejects_out_of_range() {
        let mut t = train();
        assert!(t.mark_seat(7, 100));
        assert!(!t.mark_seat(8, 1));
        assert!(!t.mark_seat(1, 101));
        assert!(!t.mark_seat(0, 1));
    }
}
