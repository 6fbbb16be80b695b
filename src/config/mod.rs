//! Declarative pool construction parameters.

mod pool_config;

pub use pool_config::PoolConfig;
