use chrono::{DateTime, Utc};
use colored::Colorize;
use pixdex::api::{CmdMessage, MessageLevel};
use pixdex::index::{DisplayIndex, DisplayRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::styles::THEME;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const KIND_WIDTH: usize = 20;
const FAV_MARKER: &str = "★";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_records(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("No images found.");
        return;
    }

    let has_favorites = records
        .iter()
        .any(|dr| matches!(dr.index, DisplayIndex::Favorite(_)));
    if has_favorites {
        println!();
    }

    let mut last_was_favorite = false;
    for dr in records {
        let is_favorite_entry = matches!(dr.index, DisplayIndex::Favorite(_));

        if last_was_favorite && !is_favorite_entry {
            println!();
        }
        last_was_favorite = is_favorite_entry;

        let idx_str = format!("{}. ", dr.index);

        let left_prefix = if is_favorite_entry {
            format!("  {} ", FAV_MARKER)
        } else {
            "    ".to_string()
        };

        let right_suffix = if dr.record.is_favorite && !is_favorite_entry {
            format!("{} ", FAV_MARKER)
        } else {
            "  ".to_string()
        };

        // When a filename leads, the prompt trails as a preview.
        let name = dr.record.display_name();
        let label = match &dr.record.filename {
            Some(_) if !dr.record.prompt.is_empty() => {
                let preview: String = dr
                    .record
                    .prompt
                    .chars()
                    .take(50)
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                format!("{} {}", name, preview)
            }
            _ => name.to_string(),
        };

        let kind_tag = format!("[{}]", dr.record.kind);
        let time_ago = format_time_ago(dr.record.created_at);

        let fixed_width = left_prefix.width()
            + idx_str.width()
            + right_suffix.width()
            + KIND_WIDTH
            + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        let idx_styled = if is_favorite_entry {
            THEME.index_favorite.apply_to(idx_str)
        } else {
            THEME.index_regular.apply_to(idx_str)
        };

        println!(
            "{}{}{}{}{}{}{}",
            left_prefix,
            idx_styled,
            label_display,
            " ".repeat(padding),
            right_suffix,
            THEME
                .kind
                .apply_to(format!("{:<width$}", kind_tag, width = KIND_WIDTH)),
            THEME.time.apply_to(time_ago),
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
