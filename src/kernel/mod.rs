pub mod controller;
pub mod event;
pub mod intent;
pub mod latency;
pub mod log;
pub mod reply;
pub mod state;
pub mod telemetry;
pub mod turn;
