//! Field-level enums for integer discriminants
//!
//! The wire carries these as plain int32 fields. Payload structs keep the
//! raw value and expose typed accessors that map it through
//! `TryFromPrimitive`, so unknown discriminants surface as errors instead
//! of panics.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Aggressor side of a trade
#[repr(i32)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum TradeSide {
    Buy = 1,
    Sell = 2,
}

/// Order execution type
#[repr(i32)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum OrderType {
    LimitOrder = 1,
    PostOnly = 2,
    ImmediateOrCancel = 3,
    FillOrKill = 4,
    MarketOrder = 5,
    StopLimit = 100,
}

/// Order lifecycle status
#[repr(i32)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum OrderStatus {
    New = 1,
    Filled = 2,
    PartiallyFilled = 3,
    Canceled = 4,
    PartiallyCanceled = 5,
}
