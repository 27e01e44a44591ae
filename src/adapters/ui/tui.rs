//! Implements InputPort. Inquire-based chat prompt.
//!
//! One question per prompt; every turn is answered independently. Failures
//! are logged and shown to the user as a single apology line.

use crate::adapters::ui::progress::typing_indicator;
use crate::domain::{ChatResponse, DomainError};
use crate::ports::{ChatPort, InputPort};
use async_trait::async_trait;
use chrono::Local;
use inquire::Text;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use std::sync::Arc;
use tracing::error;

/// Shown in place of an answer when a turn fails.
pub const APOLOGY: &str = "Sorry, something went wrong. Please try again in a few moments.";

/// Quick-start questions offered on the welcome screen.
pub const SUGGESTIONS: [&str; 4] = ["Main Projects", "About", "Contact", "Get Avatar Profile"];

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Apply the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightRed))
        .with_answered_prompt_prefix(Styled::new("›").with_fg(Color::DarkGrey));
    inquire::set_global_render_config(config);
}

/// Welcome text: who the bot is about and what to try.
pub fn welcome_message(subject: Option<&str>) -> String {
    let subject = subject.unwrap_or("me");
    let mut text = format!(
        "Ask me anything about {subject}: projects, background, or how to get in touch.\n\nTry:\n"
    );
    for suggestion in SUGGESTIONS {
        text.push_str(&format!("  • {suggestion}\n"));
    }
    text.push_str("\nType 'exit' to leave.");
    text
}

/// Format one bot turn for the terminal.
pub fn render_response(response: &ChatResponse, timestamp: &str) -> String {
    let mut out = format!("[{timestamp}] bot:\n{}", response.text.trim_end());
    if let Some(image) = &response.image_url {
        out.push_str(&format!("\n  🖼  {image}"));
    }
    out
}

fn is_exit(input: &str) -> bool {
    EXIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w))
}

/// Terminal chat adapter.
pub struct TerminalChat {
    chat: Arc<dyn ChatPort>,
    subject: Option<String>,
}

impl TerminalChat {
    pub fn new(chat: Arc<dyn ChatPort>, subject: Option<String>) -> Self {
        Self { chat, subject }
    }

    /// Answer one question and return the text to print.
    async fn turn(&self, question: &str) -> String {
        let spinner = typing_indicator();
        let result = self.chat.answer(question).await;
        spinner.finish_and_clear();

        let now = Local::now().format("%H:%M").to_string();
        match result {
            Ok(response) => render_response(&response, &now),
            Err(e) => {
                error!(error = %e, "failed to answer question");
                render_response(&ChatResponse::markdown(APOLOGY), &now)
            }
        }
    }
}

#[async_trait]
impl InputPort for TerminalChat {
    async fn run(&self) -> Result<(), DomainError> {
        println!("{}\n", welcome_message(self.subject.as_deref()));

        loop {
            let input = match Text::new("You:").prompt() {
                Ok(input) => input,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            let question = input.trim();
            if question.is_empty() {
                continue;
            }
            if is_exit(question) {
                break;
            }

            println!("{}\n", self.turn(question).await);
        }

        println!("Bye!");
        Ok(())
    }
}
