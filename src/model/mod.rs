pub mod api;
pub mod hero;
pub mod hero_power;
pub mod power;
