pub mod relay;
pub mod sim_client;
