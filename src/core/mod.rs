pub mod gradient;
pub mod history;
pub mod history_day;
pub mod projects;
pub mod scheduler;
pub mod timer;
pub mod tracker;
