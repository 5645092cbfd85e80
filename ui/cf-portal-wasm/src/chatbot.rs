//! Chat widget state machine and message flow.
//!
//! The widget's visual state is an explicit `{open, minimized}` record held
//! in a module-local `thread_local!`. Transitions are pure; a single
//! `render` step projects the state onto the four display targets (panel,
//! trigger button, body, input row). The transcript itself is data, not
//! presentation: replies are appended even while the panel is hidden, and
//! show up when it is reopened.

use crate::api;
use crate::dom::{self, Elements};
use cf_api_types::ChatMessageRequest;
use std::cell::RefCell;

pub const CHATBOT_PATH: &str = "/chatbot";

// ── Widget state ──

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub minimized: bool,
}

impl ChatState {
    pub fn opened(self) -> ChatState {
        ChatState { open: true, ..self }
    }

    pub fn closed(self) -> ChatState {
        ChatState {
            open: false,
            ..self
        }
    }

    pub fn minimize_toggled(self) -> ChatState {
        ChatState {
            minimized: !self.minimized,
            ..self
        }
    }
}

/// What each display target should show for a given state. Body and input
/// row are driven by the one `minimized` flag and can never diverge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub panel: bool,
    pub trigger: bool,
    pub body: bool,
    pub input_row: bool,
}

pub fn visibility(state: ChatState) -> Visibility {
    Visibility {
        panel: state.open,
        trigger: !state.open,
        body: !state.minimized,
        input_row: !state.minimized,
    }
}

thread_local! {
    static CHAT_STATE: RefCell<ChatState> = RefCell::new(ChatState::default());
}

pub fn current() -> ChatState {
    CHAT_STATE.with(|s| *s.borrow())
}

fn set_state(state: ChatState) {
    CHAT_STATE.with(|s| *s.borrow_mut() = state);
}

/// Store the new state and render it.
pub fn apply(els: &Elements, next: ChatState) {
    set_state(next);
    render(els, next);
}

/// Project the state onto the display layer. The only place the widget
/// touches element visibility.
pub fn render(els: &Elements, state: ChatState) {
    let v = visibility(state);
    dom::set_hidden(&els.chatbot_container, !v.panel);
    dom::set_hidden(&els.open_chatbot_btn, !v.trigger);
    dom::set_hidden(&els.chatbot_body, !v.body);
    dom::set_hidden(&els.chatbot_input_row, !v.input_row);
}

// ── Transitions wired to controls ──

pub fn open(els: &Elements) {
    apply(els, current().opened());
}

pub fn close(els: &Elements) {
    apply(els, current().closed());
}

pub fn toggle_minimize(els: &Elements) {
    apply(els, current().minimize_toggled());
}

// ── Transcript ──

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    fn prefix(self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Speaker::User => "chat-message-user",
            Speaker::Bot => "chat-message-bot",
        }
    }
}

/// Rendered form of one transcript line.
pub fn transcript_line(speaker: Speaker, text: &str) -> String {
    format!("{}: {}", speaker.prefix(), text)
}

fn append_line(els: &Elements, speaker: Speaker, text: &str) {
    let line = dom::create_element("div");
    line.set_attribute("class", speaker.css_class()).unwrap();
    dom::set_text(&line, &transcript_line(speaker, text));
    els.chatbot_body.append_child(&line).unwrap();
}

fn append_error(els: &Elements, message: &str) {
    let line = dom::create_element("div");
    line.set_attribute("class", "chat-error").unwrap();
    dom::set_text(&line, message);
    els.chatbot_body.append_child(&line).unwrap();
}

// ── Send flow ──

/// The message to send, or `None` when the input is blank. Trimming is
/// only the emptiness test; the text goes out exactly as typed.
pub fn outgoing_message(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

/// String form of the assistant's reply: a JSON string renders as-is, any
/// other JSON value renders as its compact serialization.
pub fn reply_text(value: &serde_json::Value) -> String {
    match value.as_str() {
        Some(s) => s.to_owned(),
        None => value.to_string(),
    }
}

/// POST /chatbot
///
/// Blank input is a complete no-op. Otherwise: append the user line, clear
/// the input (before the reply, not tied to success), send, and append the
/// reply or a visible error line.
pub async fn on_send_message(els: &Elements) {
    let raw = dom::get_input_value(&els.user_message_input);
    let Some(message) = outgoing_message(&raw) else {
        return;
    };

    append_line(els, Speaker::User, message);

    let request = ChatMessageRequest {
        message: message.to_owned(),
    };
    els.user_message_input.set_value("");

    match api::post_json(CHATBOT_PATH, &request).await {
        Ok(value) => append_line(els, Speaker::Bot, &reply_text(&value)),
        Err(e) => {
            gloo_console::error!(format!("{CHATBOT_PATH} request failed: {e}"));
            append_error(els, &format!("The assistant could not be reached: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_shows_panel_and_hides_trigger() {
        let state = ChatState::default().opened();
        let v = visibility(state);
        assert!(v.panel);
        assert!(!v.trigger);
    }

    #[test]
    fn closing_reverses_panel_and_trigger() {
        let state = ChatState::default().opened().closed();
        let v = visibility(state);
        assert!(!v.panel);
        assert!(v.trigger);
    }

    #[test]
    fn minimize_toggles_body_and_input_together() {
        let open = ChatState::default().opened();
        let minimized = open.minimize_toggled();
        let restored = minimized.minimize_toggled();

        assert!(!visibility(minimized).body);
        assert!(!visibility(minimized).input_row);
        assert!(visibility(restored).body);
        assert!(visibility(restored).input_row);
    }

    #[test]
    fn body_and_input_row_never_diverge() {
        for open in [false, true] {
            for minimized in [false, true] {
                let v = visibility(ChatState { open, minimized });
                assert_eq!(v.body, v.input_row);
            }
        }
    }

    #[test]
    fn panel_and_trigger_are_mutually_exclusive() {
        for open in [false, true] {
            for minimized in [false, true] {
                let v = visibility(ChatState { open, minimized });
                assert_ne!(v.panel, v.trigger);
            }
        }
    }

    #[test]
    fn closing_preserves_the_minimized_flag() {
        let state = ChatState::default().opened().minimize_toggled().closed();
        assert!(state.minimized);
        assert!(visibility(state.opened()).panel);
        assert!(!visibility(state.opened()).body);
    }

    #[test]
    fn initial_state_is_closed_and_expanded() {
        let v = visibility(ChatState::default());
        assert!(!v.panel);
        assert!(v.trigger);
        assert!(v.body);
        assert!(v.input_row);
    }

    #[test]
    fn blank_messages_are_a_no_op() {
        assert_eq!(outgoing_message(""), None);
        assert_eq!(outgoing_message("   "), None);
        assert_eq!(outgoing_message("\t\n"), None);
    }

    #[test]
    fn outgoing_text_is_sent_raw() {
        assert_eq!(outgoing_message("Hello"), Some("Hello"));
        assert_eq!(outgoing_message("  Hello  "), Some("  Hello  "));
    }

    #[test]
    fn transcript_lines_carry_speaker_prefixes() {
        assert_eq!(transcript_line(Speaker::User, "Hello"), "You: Hello");
        assert_eq!(transcript_line(Speaker::Bot, "Hi there"), "Bot: Hi there");
    }

    #[test]
    fn string_replies_render_unquoted() {
        let value = serde_json::json!("Hi there");
        assert_eq!(reply_text(&value), "Hi there");
    }

    #[test]
    fn structured_replies_render_compactly() {
        let value = serde_json::json!({ "answer": 42 });
        assert_eq!(reply_text(&value), r#"{"answer":42}"#);
        assert_eq!(reply_text(&serde_json::json!(7)), "7");
    }
}
