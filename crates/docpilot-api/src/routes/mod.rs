pub mod copilot;
pub mod dashboard;
pub mod drafting;
pub mod health;
pub mod render;
