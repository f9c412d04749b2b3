//! User-interaction seam: confirmation before destructive actions and
//! immediate alerts for failed mutations.

pub trait UserPrompt {
    /// Ask a yes/no question. `false` means the user cancelled.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

