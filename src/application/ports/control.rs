/// An interactive element that can be switched off and on.
///
/// Implementations must tolerate calls after the element left the page.
pub trait Control: Send + Sync {
    fn set_disabled(&self, disabled: bool);
}
