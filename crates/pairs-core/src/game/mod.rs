pub mod scheduler;
pub mod session;
pub mod snapshot;
