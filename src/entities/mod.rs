pub mod base_car;
pub mod components;
pub mod rest_adapter;
pub mod sedan_cars;

pub use base_car::*;
pub use components::*;
pub use rest_adapter::*;
pub use sedan_cars::*;
