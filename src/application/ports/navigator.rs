/// Full-page navigation for the current tab.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}
