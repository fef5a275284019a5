//! Focus and text entry
//!
//! Typed text goes to the picker while it is open, otherwise to the focused
//! input. The topK input only accepts digits.

use crate::model::Focus;
use crate::{logic, App};

impl App {
    pub(crate) fn focus_next(&mut self) {
        self.model.ui.focus = logic::ui::next_focus(self.model.ui.focus);
    }

    pub(crate) fn insert_text(&mut self, text: &str) {
        if self.model.selection.picker_open {
            self.model
                .selection
                .picker_value
                .extend(text.chars().filter(|c| !c.is_control()));
            return;
        }

        match self.model.ui.focus {
            Focus::Question => {
                let question = &mut self.model.session.question;
                for c in text.chars() {
                    match c {
                        '\n' | '\r' | '\t' => question.push(' '),
                        c if c.is_control() => {}
                        c => question.push(c),
                    }
                }
            }
            Focus::TopK => {
                self.model
                    .session
                    .top_k_input
                    .extend(text.chars().filter(|c| c.is_ascii_digit()));
            }
            Focus::DropZone | Focus::Answer => {}
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.model.selection.picker_open {
            self.model.selection.picker_value.pop();
            return;
        }

        match self.model.ui.focus {
            Focus::Question => {
                self.model.session.question.pop();
            }
            Focus::TopK => {
                self.model.session.top_k_input.pop();
            }
            Focus::DropZone | Focus::Answer => {}
        }
    }

    /// Esc closes whichever transient panel is on top
    pub(crate) fn dismiss(&mut self) {
        if self.model.session.suggestions_visible {
            self.model.session.suggestions_visible = false;
        } else if self.model.selection.drop_active {
            self.model.selection.drop_active = false;
        } else {
            self.model.ui.dismiss_toast();
        }
    }
}
