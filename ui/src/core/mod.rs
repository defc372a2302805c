pub mod platform;
pub mod timing;
