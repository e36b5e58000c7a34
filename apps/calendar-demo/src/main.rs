use std::io::{self, BufRead, Write};

use chrono::Local;
use paging_core::PagingCursor;

use crate::calendar::{day_source, page_resolver, CalendarItem};

mod calendar;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Paging-RS Calendar Example ===");
    println!("An infinite day-by-day pager: neighbors are generated on");
    println!("demand, so memory stays constant however far you travel.");
    println!();
    println!("Commands: n = next day, p = previous day, t = today, q = quit");
    println!();

    let today = CalendarItem::new(Local::now().date_naive());
    let mut cursor = PagingCursor::new(day_source(), page_resolver(), today);

    let stdin = io::stdin();
    render(&cursor);
    prompt()?;
    for line in stdin.lock().lines() {
        match line?.trim() {
            "n" => {
                if let Err(error) = cursor.advance() {
                    println!("cannot go forward: {error}");
                }
            }
            "p" => {
                if let Err(error) = cursor.retreat() {
                    println!("cannot go back: {error}");
                }
            }
            "t" => cursor.select(CalendarItem::new(Local::now().date_naive())),
            "q" => break,
            "" => {}
            other => println!("unknown command: {other:?}"),
        }
        render(&cursor);
        prompt()?;
    }
    Ok(())
}

/// Prints the menu strip for the 3-slot window plus the current page.
fn render<S, R>(cursor: &PagingCursor<CalendarItem, S, R>)
where
    S: paging_core::InfiniteDataSource<CalendarItem>,
    R: paging_core::ContentResolver<CalendarItem, Handle = calendar::CalendarPage>,
{
    let window = cursor.current_window();
    let mut strip = String::new();
    for item in window.items() {
        let label = format!("{} {}", item.weekday_text(), item.date_text());
        if item == window.current() {
            strip.push_str(&format!("[{label}] "));
        } else {
            strip.push_str(&format!(" {label}  "));
        }
    }
    println!();
    println!("  {strip}");
    println!("  {}", cursor.current_content().title());
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
