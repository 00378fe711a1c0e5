//! Contact Book - Main entry point
//!
//! Opens the configured contact store, prints the listing page by page and
//! the contacts with a birthday coming up, then writes the store back.

use anyhow::Result;
use contact_book::{AddressBook, BookError, Config, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so the listing on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using contact store at {}", config.book_path.display());

    let store = JsonFileStore::new(&config.book_path);
    let result = AddressBook::session(store, |book| -> Result<(), BookError> {
        for (number, page) in book.iterator(config.page_size).enumerate() {
            println!("--- page {} ---", number + 1);
            for line in page {
                println!("{}", line.trim_end());
            }
        }

        let upcoming = book.contacts_upcoming_birthdays(config.birthday_window);
        println!(
            "--- birthdays in the next {} days ---",
            config.birthday_window
        );
        for record in &upcoming {
            let days = record.days_to_birthday().unwrap_or_default();
            println!("{} in {} day(s)", record.name(), days);
        }
        Ok(())
    });

    if let Err(e) = result {
        error!("Contact book session failed: {}", e);
        return Err(e.into());
    }

    info!("Contact book closed");
    Ok(())
}
