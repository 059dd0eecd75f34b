use log::info;
use super::{ApiClient, POST_ORDER, SUBMIT_ORDER};
use crate::client::controller::error::ClientResult;
use crate::client::model::order::{FinalOrder, Order};

impl ApiClient {
    /// Send a bare order from the drink sheet
    pub async fn submit_order(&self, order: &Order) -> ClientResult<()> {
        self.post_ack(SUBMIT_ORDER, order).await?;
        info!("order submitted, {} item(s)", order.items.len());
        Ok(())
    }

    /// Send an order together with how and when it is picked up.
    /// One attempt; a second call is a second order.
    pub async fn post_order(&self, order: &FinalOrder) -> ClientResult<()> {
        self.post_ack(POST_ORDER, order).await?;
        info!("order posted for member={} at {}", order.member_id, order.pickup_time);
        Ok(())
    }
}
