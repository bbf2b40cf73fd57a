//! SeaORM entity definitions for the herodex database schema.

pub mod prelude;

pub mod hero;
pub mod hero_power;
pub mod power;
