pub mod document;
pub mod loading;
pub mod membership_summary;
pub mod navigator;
pub mod topbar;
