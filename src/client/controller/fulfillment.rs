use chrono::NaiveDateTime;
use crate::client::controller::error::ValidationError;
use crate::client::model::order::{FinalOrder, Fulfillment, Order};
use crate::client::util::time::format_pickup_time;

/// Attach fulfillment metadata to a composed order.
/// Availability is the backend's call, nothing is checked here beyond the form.
pub fn finalize(order: Order, fulfillment: Fulfillment, member_id: &str, pickup_time: NaiveDateTime) -> Result<FinalOrder, ValidationError> {
    if member_id.trim().is_empty() {
        return Err(ValidationError::MissingMember);
    }
    let delivery_type = fulfillment.delivery_type();
    let (address, branch_id) = match fulfillment {
        Fulfillment::Delivery { address } => {
            if address.trim().is_empty() {
                return Err(ValidationError::MissingAddress);
            }
            (Some(address), None)
        }
        Fulfillment::DineIn { branch_id } | Fulfillment::Takeaway { branch_id } => {
            if branch_id.trim().is_empty() {
                return Err(ValidationError::MissingBranch);
            }
            (None, Some(branch_id))
        }
    };
    Ok(FinalOrder {
        order,
        delivery_type,
        address,
        branch_id,
        member_id: member_id.to_string(),
        pickup_time: format_pickup_time(pickup_time),
    })
}
