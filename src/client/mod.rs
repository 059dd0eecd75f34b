//! drink shop client: catalogs, order composition, reservations and member session

pub mod api;
pub mod controller;
pub mod model;
pub mod state;
pub mod store;
pub mod util;

pub use api::ApiClient;
pub use controller::error::{ClientError, ValidationError};
pub use model::config::ClientConfig;
