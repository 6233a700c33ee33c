use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// One line of a rendered view, tagged with how it should be styled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewLine {
    Heading(String),
    Text(String),
    Income(String),
    Expense(String),
    Muted(String),
}

impl ViewLine {
    pub fn text(&self) -> &str {
        match self {
            ViewLine::Heading(text)
            | ViewLine::Text(text)
            | ViewLine::Income(text)
            | ViewLine::Expense(text)
            | ViewLine::Muted(text) => text,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub dark_mode: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            dark_mode: false,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section => ("", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    if !prefs.color_enabled {
        return formatted;
    }

    match (kind, prefs.dark_mode) {
        (MessageKind::Success, true) => formatted.bright_green().to_string(),
        (MessageKind::Success, false) => formatted.green().to_string(),
        (MessageKind::Warning, true) => formatted.bright_yellow().to_string(),
        (MessageKind::Warning, false) => formatted.yellow().to_string(),
        (MessageKind::Error, true) => formatted.bright_red().to_string(),
        (MessageKind::Error, false) => formatted.red().to_string(),
        (MessageKind::Section, _) => formatted.bold().to_string(),
        (MessageKind::Info, _) => formatted,
    }
}

fn style_line(line: &ViewLine, prefs: &OutputPreferences) -> String {
    if !prefs.color_enabled {
        return line.text().to_string();
    }
    match (line, prefs.dark_mode) {
        (ViewLine::Heading(text), _) => text.bold().to_string(),
        (ViewLine::Text(text), _) => text.clone(),
        (ViewLine::Income(text), true) => text.bright_green().to_string(),
        (ViewLine::Income(text), false) => text.green().to_string(),
        (ViewLine::Expense(text), true) => text.bright_red().to_string(),
        (ViewLine::Expense(text), false) => text.red().to_string(),
        (ViewLine::Muted(text), true) => text.bright_black().to_string(),
        (ViewLine::Muted(text), false) => text.dimmed().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn print_lines(lines: &[ViewLine]) {
    let prefs = preferences();
    for line in lines {
        println!("{}", style_line(line, &prefs));
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        color_enabled: false,
        dark_mode: false,
    };

    #[test]
    fn plain_messages_carry_label_and_icon() {
        assert_eq!(apply_style(MessageKind::Error, "boom", &PLAIN), "ERROR: [x] boom");
        assert_eq!(apply_style(MessageKind::Section, " Help ", &PLAIN), "=== Help ===");
    }

    #[test]
    fn plain_view_lines_are_unstyled() {
        let line = ViewLine::Expense("-₹50".into());
        assert_eq!(style_line(&line, &PLAIN), "-₹50");
    }
}
