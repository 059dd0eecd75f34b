use chrono::NaiveDate;
use crate::client::controller::error::ValidationError;
use crate::client::model::reservation::{AvailabilityQuery, ReservationRequest, MAX_PEOPLE, MIN_PEOPLE, TIME_SLOTS};

fn check_slot(time: &str, people: u8) -> Result<(), ValidationError> {
    if !TIME_SLOTS.iter().any(|slot| *slot == time) {
        return Err(ValidationError::UnknownTimeSlot(time.to_string()));
    }
    if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&people) {
        return Err(ValidationError::PeopleOutOfRange(people));
    }
    Ok(())
}

pub fn availability_query(date: NaiveDate, time: &str, people: u8) -> Result<AvailabilityQuery, ValidationError> {
    check_slot(time, people)?;
    Ok(AvailabilityQuery {
        date,
        time: time.to_string(),
        people,
    })
}

pub fn reservation(branch_id: &str, date: NaiveDate, time: &str, member_id: &str, people: u8) -> Result<ReservationRequest, ValidationError> {
    if branch_id.trim().is_empty() {
        return Err(ValidationError::MissingBranch);
    }
    if member_id.trim().is_empty() {
        return Err(ValidationError::MissingMember);
    }
    check_slot(time, people)?;
    Ok(ReservationRequest {
        branch_id: branch_id.to_string(),
        date,
        time: time.to_string(),
        member_id: member_id.to_string(),
        people,
    })
}
