//! Value types for the zap domain.
//!
//! Addresses, amounts and fees are newtypes with validated constructors.
//! Requests, plans and results are plain data that live for one zap call.

mod address;
mod amount;
mod fee_rate;
mod pool_view;
mod rounding;
mod swap_plan;
mod token_pair;
mod zap_request;
mod zap_result;
mod zap_state;

pub use address::Address;
pub use amount::Amount;
pub use fee_rate::FeeRate;
pub use pool_view::PoolView;
pub use rounding::Rounding;
pub use swap_plan::SwapPlan;
pub use token_pair::TokenPair;
pub use zap_request::{ZapInput, ZapRequest};
pub use zap_result::ZapResult;
pub use zap_state::ZapState;
