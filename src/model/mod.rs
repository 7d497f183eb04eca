//! Model primitives for unidirectional data flow.
//!
//! This module provides the base traits every application supplies to a
//! [`Store`](crate::store::Store).
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of application data
//! - **Action**: a description of an intended state transition
//! - **Reducer**: pure function computing the next state from the current
//!   one, or rejecting the action with a domain error

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
