pub mod ad;
pub mod obv;

pub use ad::calculate_ad;
pub use obv::calculate_obv;
