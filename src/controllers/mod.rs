pub mod health;
pub mod item;
