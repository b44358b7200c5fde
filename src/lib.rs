pub mod app;
pub mod book;
pub mod cli;
pub mod command_processor;
pub mod completion;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod session;

use env_logger::Env;

/// Sets up `env_logger` on stderr.
///
/// An explicit `level` wins; otherwise `RUST_LOG` is used, falling back to `default_level`.
pub fn init_logger(level: Option<&str>, default_level: &str) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_level));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use book::AddressBook;
pub use config::Config;
pub use error::{AddressBookError, ValidationError};
pub use record::Record;
pub use session::Session;
