pub mod account;
pub mod ad;

pub use account::AccountAuth;
pub use ad::AdRow;
