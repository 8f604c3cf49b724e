//! Resource modules, one per remote resource.
//!
//! Each module holds the sub-client for its resource and, where the remote API
//! has a fixed shape worth typing, the parameter types it accepts.
//! Parameters otherwise stay free-form: any `Serialize` value is sent as-is.

#[cfg(feature = "http")]
pub mod account;
#[cfg(feature = "http")]
pub mod contact;
#[cfg(feature = "http")]
pub mod lead;
#[cfg(feature = "http")]
pub mod note;
#[cfg(feature = "http")]
pub mod pipeline;
#[cfg(feature = "http")]
pub mod task;
pub mod webhook;
