//! Domain records held by the stores.

pub mod order;
pub mod user;
pub mod voucher;

pub use order::Order;
pub use user::User;
pub use voucher::Voucher;
