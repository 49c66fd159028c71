//! Ledger implementations.
//!
//! [`MemoryLedger`] keeps all token and native state in hash maps and is
//! what the reference pool, vault and tests run against.

mod memory;

pub use memory::MemoryLedger;
