//! Address Book - demo entry point
//!
//! Loads the address book from the configured file, seeds a few sample
//! contacts on first run, lists everyone in batches and saves the result.

use address_book::{AddressBook, BookRepository, Config, FileStore, Record};
use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so listings on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using address book at {} (page size {})",
        config.store_path.display(),
        config.page_size
    );

    let repository = BookRepository::new(FileStore::new(&config.store_path));
    let mut book = AddressBook::new();
    repository
        .load(&mut book)
        .with_context(|| format!("Failed to load {}", config.store_path.display()))?;

    if book.is_empty() {
        info!("Address book is empty, adding sample contacts");
        seed_sample_contacts(&mut book)?;
    }

    let today = Local::now().date_naive();
    for batch in book.paginate(config.page_size)? {
        for record in batch {
            println!("{}", record);
            if let Some(days) = record.days_to_birthday(today) {
                println!("Days to Birthday: {} days", days);
            }
        }
        println!("{}", "-".repeat(40));
    }

    repository
        .save(&book)
        .with_context(|| format!("Failed to save {}", config.store_path.display()))?;

    Ok(())
}

fn seed_sample_contacts(book: &mut AddressBook) -> Result<()> {
    let mut john = Record::new("John", Some("1990-05-20"))?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane", Some("1985-12-15"))?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    let mut alice = Record::new("Alice", Some("1995-08-25"))?;
    alice.add_phone("1112223333")?;
    book.add_record(alice);

    Ok(())
}
