// Library for tests to access modules

pub mod catalog;
pub mod check;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod snmp_repo;
pub mod sweep;
