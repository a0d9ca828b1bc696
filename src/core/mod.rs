pub mod backup;
pub mod calculator;
pub mod derive;
pub mod export;
pub mod gpa;
pub mod log;
pub mod state;

pub use state::AppState;
