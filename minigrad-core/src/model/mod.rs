pub mod network;

pub use network::{Network, NetworkConfig, NetworkOutput};
