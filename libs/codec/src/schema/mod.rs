//! Per-message wire tables
//!
//! One module per payload family, mirroring the layout of the `types`
//! crate. Each module implements [`WireMessage`](crate::message::WireMessage)
//! for its family's types: `decode_field` is the field-number table,
//! `encode_fields` the canonical ascending emission order. The shared
//! decode loop, unknown-field skipping, and nested framing live in
//! [`message`](crate::message); nothing here touches bytes directly.

pub mod account;
pub mod deal;
pub mod depth;
pub mod envelope;
pub mod kline;
pub mod order;
pub mod ticker;
