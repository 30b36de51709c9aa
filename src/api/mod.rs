//! Thin API-client glue over the SafeTrip REST service

pub mod alerts;
pub mod auth;
pub mod client;
pub mod endpoints;

pub use client::ApiError;
