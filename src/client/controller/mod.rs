pub mod account;
pub mod composer;
pub mod error;
pub mod fulfillment;
pub mod reservation;
