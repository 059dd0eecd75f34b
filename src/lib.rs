//! client library for the barney drink shop backend

pub mod client;
