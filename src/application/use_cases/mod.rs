pub mod provider_param;
pub mod session;
pub mod state_store;
pub mod timing;
