pub mod membership_summary;
pub mod topbar;
