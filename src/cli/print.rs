use crate::badges::badge_for;
use crate::collection::CollectionStats;
use crate::commands::{CmdMessage, MessageLevel};
use crate::model::{CardStatus, EnrichedCard};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const SHEET_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 9;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per card: sheet number, name with set and era, status, and a
/// trade marker for cards with surplus copies.
pub(super) fn print_cards(cards: &[EnrichedCard]) {
    for card in cards {
        let sheet = format!("{:>width$}. ", card.record.sheet_no, width = SHEET_WIDTH);

        let status = card.status();
        let status_str = format!("{:<width$}", status.to_string(), width = STATUS_WIDTH);
        let status_colored = match status {
            CardStatus::Owned => status_str.green(),
            CardStatus::Ordered => status_str.yellow(),
            CardStatus::No => status_str.dimmed(),
        };

        let trade = if card.has_surplus() {
            format!("  {} for trade", card.surplus())
        } else {
            String::new()
        };

        let label = match &card.record.era {
            Some(era) => format!("{} ({}, {})", card.record.name, card.record.set, era),
            None => format!("{} ({})", card.record.name, card.record.set),
        };
        let fixed = sheet.width() + STATUS_WIDTH + trade.width() + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}  {}{}",
            sheet.dimmed(),
            label_display,
            " ".repeat(padding),
            status_colored,
            trade.cyan(),
        );
    }
}

/// Per-variation lines for `show`, with badge labels where a key matches.
pub(super) fn print_variations(card: &EnrichedCard) {
    for (key, state) in card.template_states() {
        let label = match badge_for(key) {
            Some(badge) => format!("{} [{}]", key, badge.label),
            None => key.clone(),
        };

        let mut detail = format!("{} owned", state.count);
        if state.is_pending() {
            detail.push_str(", ordered");
        }
        if !state.languages.is_empty() {
            detail.push_str(&format!(" [{}]", state.languages.join(", ")));
        }
        if state.surplus() > 0 {
            detail.push_str(&format!(", {} for trade", state.surplus()));
        }

        let line = format!("  {:<24} {}", label, detail);
        if state.count > 0 {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }
}

pub(super) fn print_stats(stats: &CollectionStats) {
    println!("{}", format!("  {} cards", stats.total).bold());
    println!("  {} {}", "owned:".green(), stats.owned);
    println!("  {} {}", "ordered:".yellow(), stats.ordered);
    println!("  {} {}", "needed:".dimmed(), stats.needed);
    println!("  {} {}%", "complete:".bold(), stats.completion);
    if stats.tradeable > 0 {
        println!("  {} {}", "tradeable:".cyan(), stats.tradeable);
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
