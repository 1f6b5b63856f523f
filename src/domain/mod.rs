pub mod client;
pub mod reference;

pub use client::{ClientAggregate, OwnedAddress};
pub use reference::reresolve;
