//! Terminal confirmations and alerts.

use console::Term;
use dialoguer::Confirm;
use feed_core::UserPrompt;
use tracing::warn;

/// Asks on stderr so views on stdout stay clean. With `assume_yes` every
/// confirmation is granted without asking.
pub struct TerminalPrompt {
    term: Term,
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            term: Term::stderr(),
            assume_yes,
        }
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let answer = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_on_opt(&self.term);
        accepted(answer)
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.term.write_line(message) {
            warn!(error = %err, "failed to write alert");
        }
    }
}

/// Escape, Ctrl-C and a missing terminal all count as a cancel.
fn accepted(answer: dialoguer::Result<Option<bool>>) -> bool {
    match answer {
        Ok(Some(yes)) => yes,
        Ok(None) => false,
        Err(err) => {
            warn!(error = %err, "confirmation prompt failed");
            false
        }
    }
}
