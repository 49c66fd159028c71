//! Declarative configuration.
//!
//! Config structs are serde (de)serialisable and expose `validate()`.
//! Constructors validate eagerly; deserialized values are validated when
//! they are handed to [`FromConfig`](crate::traits::FromConfig) or
//! [`ZapOrchestrator::new`](crate::zap::ZapOrchestrator::new).

mod pool;
mod vault;
mod zap;

pub use pool::PoolConfig;
pub use vault::VaultConfig;
pub use zap::{ZapConfig, DEFAULT_MIN_RESERVE};
