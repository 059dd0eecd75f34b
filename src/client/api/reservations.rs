use log::info;
use super::{ApiClient, MAKE_RESERVATION};
use crate::client::controller::error::ClientResult;
use crate::client::model::reservation::ReservationRequest;

impl ApiClient {
    pub async fn make_reservation(&self, request: &ReservationRequest) -> ClientResult<()> {
        self.post_ack(MAKE_RESERVATION, request).await?;
        info!(
            "reservation confirmed, branch={} date={} time={} people={}",
            request.branch_id, request.date, request.time, request.people
        );
        Ok(())
    }
}
