//! Room capacity rule.

use crate::core::{MeetingError, MeetingRoom};

/// Check that `guests` fit in `room`. A room filled exactly to capacity is
/// accepted.
pub fn check_capacity(room: MeetingRoom, guests: u32) -> Result<(), MeetingError> {
    if guests > room.capacity() {
        return Err(MeetingError::CapacityExceeded { room, guests });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WireCode;

    #[test]
    fn capacity_boundary_is_inclusive() {
        for room in MeetingRoom::ALL {
            assert_eq!(check_capacity(*room, room.capacity()), Ok(()));
            assert!(check_capacity(*room, room.capacity() + 1).is_err());
        }
    }

    #[test]
    fn over_capacity_messages() {
        let cases = [
            (MeetingRoom::Room101, 21, "max capacity for room 101 is 20 (21 guests required)"),
            (MeetingRoom::Room42, 51, "max capacity for room 42 is 50 (51 guests required)"),
            (
                MeetingRoom::Amphitheater,
                201,
                "max capacity for the amphitheater is 200 (201 guests required)",
            ),
        ];

        for (room, guests, message) in cases {
            let error = check_capacity(room, guests).unwrap_err();
            assert_eq!(error.to_string(), message);
        }
    }
}
