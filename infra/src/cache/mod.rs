//! Cache module for volatile in-memory state
//!
//! Nothing here survives a restart: OTP codes live only in process memory.

pub mod expiring_store;
pub mod otp_store;


pub use expiring_store::ExpiringStore;
pub use otp_store::OtpStore;
