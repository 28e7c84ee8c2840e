pub mod areas;
pub mod config_cmd;
pub mod gateway;
pub mod generate;
pub mod onboard;
pub mod skills;
pub mod status;
