//! Upstream card API access

mod client;

pub use client::{random_card_name, CardSource, HttpCardSource, DEFAULT_UPSTREAM_URL};
