// src/ports/text.rs
use crate::domain::{Note, Theme};
use crate::util::text::first_line;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Renders notes, categories, and tags for the terminal. The theme only
/// changes which accent color is used; content is identical either way.
#[derive(Debug)]
pub struct TextPresenter {
    theme: Theme,
}

impl TextPresenter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn accent(&self) -> &'static str {
        match self.theme {
            Theme::Light => "\x1b[34m",
            Theme::Dark => "\x1b[96m",
        }
    }

    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes found.\n".to_string();
        }

        let mut out = String::new();
        for note in notes {
            let id = note
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            let title = if note.title.is_empty() {
                "Untitled"
            } else {
                &note.title
            };
            out.push_str(&format!("{}{:>6}{}  {}", self.accent(), id, RESET, title));
            if let Some(category) = &note.category {
                out.push_str(&format!("  [{category}]"));
            }
            if !note.tags.is_empty() {
                out.push_str(&format!("  ({})", note.tags.join(", ")));
            }
            let preview = first_line(&note.content);
            if !preview.is_empty() {
                out.push_str(&format!("  {DIM}{preview}{RESET}"));
            }
            out.push('\n');
        }
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        let title = if note.title.is_empty() {
            "Untitled"
        } else {
            &note.title
        };
        let mut out = format!("{}{}{}\n", self.accent(), title, RESET);
        if let Some(category) = &note.category {
            out.push_str(&format!("Category: {category}\n"));
        }
        if !note.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", note.tags.join(", ")));
        }
        out.push('\n');
        out.push_str(&note.content);
        if !note.content.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    pub fn render_labels(&self, heading: &str, labels: &[String]) -> String {
        let mut out = format!("{}{}{}\n", self.accent(), heading, RESET);
        if labels.is_empty() {
            out.push_str("  (none)\n");
            return out;
        }
        for label in labels {
            out.push_str(&format!("  {label}\n"));
        }
        out
    }
}
