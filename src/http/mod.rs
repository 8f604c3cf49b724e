//! HTTP layer — `CrmHttp`: generic operation dispatch over a `reqwest` transport.

pub mod client;
pub mod query;

pub use client::CrmHttp;
