pub mod account_record;
pub mod billing_provider;
pub mod subscription_status;
