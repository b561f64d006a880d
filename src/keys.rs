//! Process-wide key dispatch
//!
//! Components that need to see every key press (regardless of focus) register
//! a handler with the `KeyDispatcher` and keep the returned `KeySubscription`
//! alive for as long as they want to receive keys. Dropping the subscription
//! unregisters the handler.

mod key_dispatcher;

pub use key_dispatcher::{KeyDispatcher, KeySubscription, Propagation};
