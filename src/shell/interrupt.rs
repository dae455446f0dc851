//! Interrupt Handler Module
//!
//! Process-wide SIGINT handling. The handler holds no pointer to the
//! session: an injectable prompt-composition hook is armed before each
//! raw-mode read and disarmed around external command dispatch. On
//! interrupt the handler emits a newline, recomputes the prompt fresh via
//! the hook and flushes; it never touches the suspended read's buffer or
//! cursor, which live on the interrupted call stack. With the hook
//! disarmed the interrupt is left to the running subprocess.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Prompt-composition callback captured by the handler
pub type PromptHook = Arc<dyn Fn() -> String + Send + Sync>;

static PROMPT_HOOK: Mutex<Option<PromptHook>> = Mutex::new(None);

/// Install the process-wide handler. Call once at shell startup.
pub fn install() -> io::Result<()> {
    ctrlc::set_handler(fire).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Register the prompt hook for the upcoming raw-mode read
pub fn arm(hook: PromptHook) {
    if let Ok(mut slot) = PROMPT_HOOK.lock() {
        *slot = Some(hook);
    }
}

/// Clear the prompt hook; interrupts are ignored until re-armed
pub fn disarm() {
    if let Ok(mut slot) = PROMPT_HOOK.lock() {
        *slot = None;
    }
}

/// Run the interrupt behavior: newline, fresh prompt, flush. Also invoked
/// directly by the line editor when raw mode delivers Ctrl+C as a key
/// event instead of a signal.
pub fn fire() {
    let hook = match PROMPT_HOOK.lock() {
        Ok(slot) => slot.clone(),
        Err(_) => None,
    };
    if let Some(hook) = hook {
        let mut out = io::stdout();
        let _ = write!(out, "\r\n{}", hook());
        let _ = out.flush();
    }
}
