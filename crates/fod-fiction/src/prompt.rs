//! Validated input loop with special-command interception.
//!
//! [`prompt`] keeps asking until the player types one of the accepted
//! options. Input matching a [`SpecialHandler`] runs its callback (saving,
//! loading) and asks again, so the same loop serves plain narrative choices
//! and in-story persistence.

use crate::console::Console;
use crate::error::FictionResult;

/// How a special handler recognises its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// The whole normalized input equals the pattern.
    Exact(String),
    /// The normalized input starts with the pattern.
    Prefix(String),
}

impl Matcher {
    /// The lowercase pattern.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Exact(p) | Self::Prefix(p) => p,
        }
    }
}

/// Callback run by a special handler.
///
/// Receives the caller's context and the normalized input, and returns a
/// message to show (empty for none).
pub type Callback<C> = Box<dyn FnMut(&mut C, &str) -> FictionResult<String>>;

/// A callback bound to an input pattern.
pub struct SpecialHandler<C> {
    matcher: Matcher,
    callback: Callback<C>,
}

impl<C> SpecialHandler<C> {
    /// Handler for input exactly equal to `pattern` (case-insensitive).
    pub fn exact<F>(pattern: &str, callback: F) -> Self
    where
        F: FnMut(&mut C, &str) -> FictionResult<String> + 'static,
    {
        Self {
            matcher: Matcher::Exact(pattern.trim().to_lowercase()),
            callback: Box::new(callback),
        }
    }

    /// Handler for input starting with `pattern` (case-insensitive).
    pub fn prefix<F>(pattern: &str, callback: F) -> Self
    where
        F: FnMut(&mut C, &str) -> FictionResult<String> + 'static,
    {
        Self {
            matcher: Matcher::Prefix(pattern.to_lowercase()),
            callback: Box::new(callback),
        }
    }

    /// How this handler matches input.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl<C> std::fmt::Debug for SpecialHandler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialHandler")
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// Find the handler for `input`: exact matches first, then the first prefix
/// match in registration order.
fn find_handler<C>(handlers: &[SpecialHandler<C>], input: &str) -> Option<usize> {
    handlers
        .iter()
        .position(|h| matches!(&h.matcher, Matcher::Exact(p) if p == input))
        .or_else(|| {
            handlers
                .iter()
                .position(|h| matches!(&h.matcher, Matcher::Prefix(p) if input.starts_with(p.as_str())))
        })
}

/// Ask until the player enters one of `options`, and return it lowercased.
///
/// Input is trimmed and lowercased before matching. Special handlers run on
/// `ctx` and never end the loop; a failing handler is reported and the
/// question is asked again. End of input and interrupts are returned to the
/// caller.
pub fn prompt<C>(
    console: &mut dyn Console,
    text: &str,
    options: &[&str],
    handlers: &mut [SpecialHandler<C>],
    ctx: &mut C,
) -> FictionResult<String> {
    let accepted: Vec<String> = options.iter().map(|o| o.to_lowercase()).collect();

    loop {
        let choice = console.read_line(text)?.trim().to_lowercase();
        if accepted.contains(&choice) {
            return Ok(choice);
        }

        match find_handler(handlers, &choice) {
            Some(i) => {
                let handler = &mut handlers[i];
                log::debug!("special handler {:?} matched '{choice}'", handler.matcher);
                match (handler.callback)(ctx, &choice) {
                    Ok(message) if !message.is_empty() => console.say(&message),
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("special handler for '{choice}' failed: {e}");
                        console.warn(&format!("Handler for '{choice}' raised an error: {e}"));
                    }
                }
            }
            None => console.warn(&format!("Please choose one of: {}", options.join(", "))),
        }
    }
}

/// Ask until the player enters one of `options`, with no special handlers.
pub fn choose(console: &mut dyn Console, text: &str, options: &[&str]) -> FictionResult<String> {
    prompt::<()>(console, text, options, &mut [], &mut ())
}
