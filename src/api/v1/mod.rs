pub mod health;
pub mod notifications;
pub mod rights;
pub mod rooms;
