//! Control core of a battery-powered wireless scene remote.
//!
//! The crate interprets decoded attribute reports of the remote into
//! semantic events for the hosting automation platform. It is meant to be
//! driven by a host that passes one decoded report at a time and ticks the
//! per-device store from its 1 kHz control loop:
//!
//! ```text
//!            [ Network stack ]
//!                    |
//!                    | (AttributeReport)
//!                    V
//!      [ Store {SceneDetector} ] <-- tick() -- [ ControlLoop ]
//!             |             |
//!             |             | (BatteryState)
//!             | (GestureEvent)
//!             V             V
//!   [ TriggerDispatch ] [ CapabilityStore ]
//! ```
//!
//! Collaborators behind the outbound seams are fire-and-forget. Their
//! failures are logged and swallowed, never awaited nor propagated back
//! into the interpreters.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod battery;
pub mod button;
pub mod catalog;
mod log;
pub mod output;
pub mod report;
pub mod store;
