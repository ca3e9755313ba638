use std::io;

/// Inline verdict for one candidate value. `Some(message)` blocks submission
/// and is shown next to the prompt; `None` accepts.
pub type Validation = Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRequest<'a> {
    pub title: &'a str,
    pub prompt: &'a str,
    pub placeholder: &'a str,
}

/// Host UI surface. Implementations own the prompt loop: the validator runs
/// on every submission attempt and only an accepted value is returned.
/// `Ok(None)` means the user dismissed the prompt.
pub trait HostUi {
    fn request_text(
        &mut self,
        request: &TextRequest<'_>,
        validator: &mut dyn FnMut(&str) -> Validation,
    ) -> io::Result<Option<String>>;

    /// Shows a message with optional actions and returns the chosen one.
    fn notify(&mut self, message: &str, actions: &[&str]) -> io::Result<Option<String>>;
}
