// Domain layer - Pure models and transforms
pub mod axis;
pub mod error;
pub mod franchise;
pub mod game_log;
pub mod person;
pub mod series;
pub mod stat;
