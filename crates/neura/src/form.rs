//! Keyboard editing of the contact form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use neura_core::{Budget, ContactForm, Field, FieldIssue, FieldPolicy};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};
use tracing::{info, warn};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the input boxes, in cells.
const INPUT_WIDTH: usize = 40;

/// Contact form plus the cursor state needed to edit it.
#[derive(Debug, Clone)]
pub struct FormState {
    form: ContactForm,
    focus: Field,
    editing: bool,
    issues: Vec<FieldIssue>,
    /// Set after a successful submit, cleared by the next edit.
    sent: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            focus: Field::Name,
            editing: false,
            issues: Vec::new(),
            sent: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    /// Leave edit mode, keeping whatever was typed.
    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Handle a key press while editing.
    pub fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => self.stop_editing(),
            (_, KeyCode::Enter) => {
                if let Some(payload) = self.submit() {
                    info!(%payload, "contact form submitted");
                }
            }
            (_, KeyCode::Tab | KeyCode::Down) => self.focus = self.focus.next(),
            (_, KeyCode::BackTab | KeyCode::Up) => self.focus = self.focus.prev(),
            (_, KeyCode::Left) if self.focus == Field::Budget => self.cycle_budget(false),
            (_, KeyCode::Right | KeyCode::Char(' ')) if self.focus == Field::Budget => {
                self.cycle_budget(true)
            }
            (_, KeyCode::Backspace) => {
                if let Some(text) = self.form.text_mut(self.focus) {
                    text.pop();
                    self.sent = false;
                }
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => self.type_char(ch),
            _ => {}
        }
    }

    fn type_char(&mut self, ch: char) {
        if let Some(text) = self.form.text_mut(self.focus) {
            text.push(ch);
            self.sent = false;
        }
    }

    fn cycle_budget(&mut self, forward: bool) {
        self.form.budget = Budget::cycle(self.form.budget, forward);
        self.sent = false;
    }

    /// Validate and, on success, return the JSON payload and clear the form.
    ///
    /// Failing fields are kept in [`FormState::issues`] and focus moves to the
    /// first of them.
    pub fn submit(&mut self) -> Option<String> {
        if let Err(issues) = self.form.validate() {
            if let Some(field) = issues.first().map(issue_field) {
                self.focus = field;
            }
            self.issues = issues;
            return None;
        }
        let payload = match serde_json::to_string(&self.form) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "could not encode contact form");
                return None;
            }
        };
        self.form.reset();
        self.issues.clear();
        self.focus = Field::Name;
        self.editing = false;
        self.sent = true;
        Some(payload)
    }

    /// Render the form as page lines.
    pub fn lines(&self, color: Color) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for field in Field::ALL {
            let marker = if field.policy() == FieldPolicy::Required {
                " *"
            } else {
                ""
            };
            lines.push(Line::from(vec![
                Span::raw(field.label()).bold(),
                Span::raw(marker).fg(color),
            ]));
            lines.push(self.input_line(field, color));
            if let Some(issue) = self.issues.iter().find(|i| issue_field(i) == field) {
                lines.push(Line::from(issue.to_string()).red());
            }
            lines.push(Line::default());
        }
        let button = Span::styled(
            "[ Send Message ]",
            Style::new().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
        );
        lines.push(Line::from(button));
        if self.sent {
            lines.push(Line::default());
            lines.push(Line::from("Thanks! We'll get back to you soon.").fg(color));
        }
        lines
    }

    fn input_line(&self, field: Field, color: Color) -> Line<'static> {
        let focused = self.focus == field;
        let value = match field {
            Field::Budget => self.form.budget.map(Budget::label),
            _ => self.form.text(field).filter(|v| !v.is_empty()),
        };
        let (text, mut style) = match value {
            Some(value) => (value.to_string(), Style::new().fg(Color::White)),
            None => (field.placeholder().to_string(), Style::new().fg(Color::DarkGray)),
        };
        let mut text = clip_tail(&text, INPUT_WIDTH - 1);
        if focused && self.editing && field != Field::Budget {
            text.push('▏');
        }
        if field == Field::Budget && focused {
            text = format!("‹ {text} ›");
        }
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        let border = if focused {
            Style::new().fg(color)
        } else {
            Style::new().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(pad_right(&text, INPUT_WIDTH), style),
            Span::styled(" │", border),
        ])
    }
}

fn issue_field(issue: &FieldIssue) -> Field {
    match issue {
        FieldIssue::Missing(field) => *field,
        FieldIssue::InvalidEmail => Field::Email,
    }
}

/// Keep the tail of `text` that fits in `width` cells so the cursor end
/// stays visible.
fn clip_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let cells = ch.width().unwrap_or(0);
        if used + cells > width {
            break;
        }
        used += cells;
        start = index;
    }
    text[start..].to_string()
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut FormState, code: KeyCode) {
        state.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(state: &mut FormState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_typing_fills_the_focused_field() {
        let mut state = FormState::new();
        state.begin_editing();
        type_str(&mut state, "Ada");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "ada@example.com");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.form().name, "Ada");
        assert_eq!(state.form().email, "ada@example.co");
        assert_eq!(state.focus(), Field::Email);
    }

    #[test]
    fn test_budget_cycles_instead_of_typing() {
        let mut state = FormState::new();
        state.begin_editing();
        for _ in 0..3 {
            press(&mut state, KeyCode::Tab);
        }
        assert_eq!(state.focus(), Field::Budget);
        press(&mut state, KeyCode::Char('x'));
        press(&mut state, KeyCode::Right);
        assert_eq!(state.form().budget, Some(Budget::UnderOneK));
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.form().budget, Some(Budget::TenKPlus));
    }

    #[test]
    fn test_invalid_submit_keeps_values_and_focuses_first_issue() {
        let mut state = FormState::new();
        state.begin_editing();
        type_str(&mut state, "Ada");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "not-an-email");
        press(&mut state, KeyCode::Up);
        assert!(state.submit().is_none());
        assert_eq!(state.focus(), Field::Email);
        assert_eq!(
            state.issues(),
            &[FieldIssue::InvalidEmail, FieldIssue::Missing(Field::Message)]
        );
        assert_eq!(state.form().name, "Ada");
        assert!(state.is_editing());
    }

    #[test]
    fn test_valid_submit_returns_payload_and_clears() {
        let mut state = FormState::new();
        state.begin_editing();
        type_str(&mut state, "Ada");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "ada@example.com");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "A new site");

        let payload = state.submit().expect("valid form");
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["company"], "");
        assert_eq!(json["budget"], "1k-5k");
        assert_eq!(json["message"], "A new site");

        assert_eq!(state.form(), &ContactForm::default());
        assert!(state.issues().is_empty());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_escape_leaves_edit_mode() {
        let mut state = FormState::new();
        state.begin_editing();
        type_str(&mut state, "Ada");
        press(&mut state, KeyCode::Esc);
        assert!(!state.is_editing());
        assert_eq!(state.form().name, "Ada");
    }

    #[test]
    fn test_lines_show_issues_under_their_field() {
        let mut state = FormState::new();
        state.submit();
        let text: Vec<String> = state
            .lines(Color::Magenta)
            .iter()
            .map(|line| line.to_string())
            .collect();
        let name = text.iter().position(|l| l.starts_with("Your Name")).unwrap();
        assert_eq!(text[name + 2], "Your Name is required");
        assert!(text.iter().any(|l| l.contains("john@example.com")));
    }

    #[test]
    fn test_clip_tail_keeps_the_end() {
        assert_eq!(clip_tail("abcdef", 3), "def");
        assert_eq!(clip_tail("ab", 3), "ab");
        assert_eq!(clip_tail("日本語", 5), "本語");
        assert_eq!(clip_tail("日本語", 1), "");
    }

    #[test]
    fn test_wide_input_keeps_the_box_width() {
        let width = |state: &FormState| state.input_line(Field::Name, Color::Magenta).width();
        let mut ascii = FormState::new();
        ascii.begin_editing();
        type_str(&mut ascii, "Acme");

        let mut wide = FormState::new();
        wide.begin_editing();
        type_str(&mut wide, "日本語の会社名");
        assert_eq!(width(&wide), width(&ascii));

        // Long enough to be clipped.
        type_str(&mut wide, &"語".repeat(30));
        assert_eq!(width(&wide), width(&ascii));
        assert_eq!(width(&ascii), INPUT_WIDTH + 4);
    }
}
