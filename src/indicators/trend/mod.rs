pub mod adx;
pub mod ema;
pub mod sma;

pub use adx::{calculate_adx, calculate_adx_default};
pub use ema::calculate_ema;
pub use sma::calculate_sma;
