//! # Terminal Prompt Loop
//!
//! The text-mode presentation layer: a numbered menu prompt, selection
//! echoing, and receipt + ticket on exit.
//!
//! ## Interaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  1) Americano 3000won  2) Latte 3500won  3) Exit : 1            │
//! │  Americano ordered. Price : 3000won                             │
//! │  1) Americano 3000won  2) Latte 3500won  3) Exit : abc          │
//! │  cannot enter characters. Please enter a valid number.          │
//! │  1) Americano 3000won  2) Latte 3500won  3) Exit : 3            │
//! │  Finish order~                                                  │
//! │  <receipt>                                                      │
//! │  Queue Number: 7                                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The exit entry is one past the last item index. Invalid input never
//! crashes the loop: non-numeric text and out-of-range numbers both print a
//! notice and re-prompt. Exiting with an empty order prints the refusal
//! notice instead of issuing a ticket.
//!
//! The loop is generic over its reader and writer so tests can drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use kiosk_core::Menu;

use crate::error::AppError;
use crate::session::OrderSession;

/// Builds the one-line numbered prompt, exit entry last.
pub fn menu_prompt(menu: &Menu) -> String {
    let mut prompt = String::new();
    for (i, item) in menu.iter().enumerate() {
        prompt.push_str(&format!("{}) {} {}won  ", i + 1, item.name, item.price.amount()));
    }
    prompt.push_str(&format!("{}) Exit : ", menu.len() + 1));
    prompt
}

/// Runs the prompt/response loop until the user exits (or input ends).
///
/// On exit: prints the running receipt and, when anything was ordered,
/// completes the order and prints the queue number. An empty order is
/// refused with a notice and consumes no ticket.
pub async fn run_loop<R, W>(
    mut input: R,
    out: &mut W,
    session: &mut OrderSession,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let prompt = menu_prompt(session.menu());
    let menu_len = session.menu().len();
    let exit_choice = menu_len as i64 + 1;

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Input closed without an explicit exit; stop without a ticket.
            writeln!(out)?;
            debug!("Input stream ended");
            return Ok(());
        }

        let choice: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "cannot enter characters. Please enter a valid number.")?;
                continue;
            }
        };

        if choice >= 1 && choice <= menu_len as i64 {
            let item = session.process_order(choice as usize - 1)?;
            writeln!(out, "{} ordered. Price : {}won", item.name, item.price.amount())?;
        } else if choice == exit_choice {
            writeln!(out, "Finish order~")?;
            if session.total().is_positive() {
                let completed = session.complete().await?;
                write!(out, "{}", completed.receipt)?;
                writeln!(out, "Queue Number: {}", completed.ticket_number)?;
            } else {
                write!(out, "{}", session.receipt_text())?;
                writeln!(out, "Please add items before completing the order.")?;
            }
            return Ok(());
        } else {
            writeln!(out, "{} menu is not valid. please choose from above menu.", choice)?;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
