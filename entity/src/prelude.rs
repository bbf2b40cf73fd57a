pub use super::hero::Entity as Hero;
pub use super::hero_power::Entity as HeroPower;
pub use super::power::Entity as Power;
