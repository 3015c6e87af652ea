pub mod daily_log;
pub mod history_data;
pub mod project;
pub mod update_interval;
