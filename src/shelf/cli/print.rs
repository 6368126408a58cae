use chrono::{Local, NaiveDate};
use colored::Colorize;
use once_cell::sync::Lazy;
use serde::Serialize;
use shelf::api::{CmdMessage, LibraryStats, MessageLevel};
use shelf::error::Result;
use shelf::index::DisplayBook;
use shelf::model::{Genre, Rating, Status};
use std::time::Duration;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_TEXT_COLUMN: usize = 10;
const DATE_WIDTH: usize = 10;
const GAP: &str = "  ";
const RATING_HEADER: &str = "Rating";

static GENRE_WIDTH: Lazy<usize> = Lazy::new(|| {
    Genre::ALL
        .iter()
        .map(|g| g.label().width())
        .max()
        .unwrap_or(0)
});

static STATUS_WIDTH: Lazy<usize> = Lazy::new(|| {
    Status::ALL
        .iter()
        .map(|s| s.label().width())
        .max()
        .unwrap_or(0)
});

pub(super) fn print_messages(messages: &[CmdMessage], to_stderr: bool) {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn line_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_LINE_WIDTH)
}

pub(super) fn print_books(books: &[DisplayBook]) {
    if books.is_empty() {
        return;
    }

    let idx_width = books
        .iter()
        .map(|dp| format!("{}.", dp.index).width())
        .max()
        .unwrap_or(2);
    let rating_width = RATING_HEADER.width().max(usize::from(Rating::MAX));
    let fixed = idx_width
        + *GENRE_WIDTH
        + *STATUS_WIDTH
        + rating_width
        + DATE_WIDTH
        + GAP.len() * 6;
    let available = line_width()
        .saturating_sub(fixed)
        .max(MIN_TEXT_COLUMN * 2);
    let title_width = (available * 3 / 5).max(MIN_TEXT_COLUMN);
    let author_width = available.saturating_sub(title_width).max(MIN_TEXT_COLUMN);

    let header = format!(
        "{}{}{}{}{}{}{}{}{}{}{}{}{}",
        fit("#", idx_width),
        GAP,
        fit("Title", title_width),
        GAP,
        fit("Author", author_width),
        GAP,
        fit("Genre", *GENRE_WIDTH),
        GAP,
        fit("Status", *STATUS_WIDTH),
        GAP,
        fit(RATING_HEADER, rating_width),
        GAP,
        "Added"
    );
    println!("{}", header.dimmed());

    for dp in books {
        let book = &dp.book;
        let status = fit(book.status.label(), *STATUS_WIDTH);
        let status = match book.status {
            Status::Completed => status.green(),
            Status::Reading => status.cyan(),
            Status::OnHold => status.yellow(),
            Status::Unread => status.normal(),
        };
        println!(
            "{}{}{}{}{}{}{}{}{}{}{}{}{}",
            fit(&format!("{}.", dp.index), idx_width).yellow(),
            GAP,
            fit(&book.title, title_width).bold(),
            GAP,
            fit(&book.author, author_width),
            GAP,
            fit(book.genre.label(), *GENRE_WIDTH),
            GAP,
            status,
            GAP,
            fit(&stars(book.rating), rating_width).yellow(),
            GAP,
            book.date_added.to_string().dimmed()
        );
    }
}

pub(super) fn print_full_books(books: &[DisplayBook]) {
    for (i, dp) in books.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let book = &dp.book;
        println!("{} {}", dp.index.to_string().yellow(), book.title.bold());
        println!("--------------------------------");
        println!("{:<9} {}", "Author:".dimmed(), book.author);
        println!("{:<9} {}", "Genre:".dimmed(), book.genre);
        println!("{:<9} {}", "Status:".dimmed(), book.status);
        println!(
            "{:<9} {} ({}/{})",
            "Rating:".dimmed(),
            stars(book.rating).yellow(),
            book.rating,
            Rating::MAX
        );
        println!(
            "{:<9} {} ({})",
            "Added:".dimmed(),
            book.date_added,
            added_ago(book.date_added)
        );
        if !book.notes.is_empty() {
            println!();
            println!("{}", book.notes);
        }
    }
}

pub(super) fn print_stats(stats: &LibraryStats) {
    println!(
        "{} {}   {} {}   {} {}   {} {}",
        "Total Books:".dimmed(),
        stats.total.to_string().bold(),
        "Books Read:".dimmed(),
        stats.completed.to_string().bold(),
        "Currently Reading:".dimmed(),
        stats.reading.to_string().bold(),
        "Average Rating:".dimmed(),
        stats.average_display().bold()
    );
}

fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn added_ago(date: NaiveDate) -> String {
    let days = Local::now()
        .date_naive()
        .signed_duration_since(date)
        .num_days();
    if days <= 0 {
        return "today".to_string();
    }
    let mut formatter = Formatter::new();
    formatter.num_items(1);
    formatter.convert(Duration::from_secs(days as u64 * 24 * 60 * 60))
}

/// Truncates or pads `s` to exactly `width` display columns.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
