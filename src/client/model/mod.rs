pub mod branch;
pub mod config;
pub mod drink;
pub mod member;
pub mod order;
pub mod reservation;
