//! # Shared State Wrappers
//!
//! Session state that more than one party touches in the same turn.
//!
//! ## Why Wrappers At All?
//! The page is single-threaded and synchronous, but two pieces of state
//! are reached from more than one place:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  CartState     the product view mutates it; the session reads       │
//! │                snapshots out of it after every notification         │
//! │                                                                     │
//! │  ReviewsState  the bus subscription closure appends to it while     │
//! │                the product view also renders from it                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both use the same `Arc<Mutex<T>>` + `with_*` closure pattern so a
//! caller can never hold a live reference across a mutation.

mod cart;
mod reviews;

pub use cart::CartState;
pub use reviews::ReviewsState;
