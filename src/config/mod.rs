//! Configuration and path management

pub mod kiosk;
pub mod paths;

pub use kiosk::KioskConfig;
pub use paths::KioskPaths;
