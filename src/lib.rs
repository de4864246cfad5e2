// Library for tests to access modules

pub mod collector;
pub mod config;
pub mod models;
pub mod report;
pub mod units;
pub mod windows;
pub mod zabbix_repo;
