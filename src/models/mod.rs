pub mod car;
pub mod config;
pub mod device;
pub mod events;
pub mod http;
pub mod operations;

pub use car::*;
pub use config::*;
pub use device::*;
pub use events::*;
pub use http::*;
pub use operations::*;
