pub mod app;
pub mod config;
pub mod consts;
pub mod cors;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod upstream;
pub mod usage;

#[cfg(test)]
pub(crate) mod test_utils;
