use std::io::Write as _;

use log::{Level, LevelFilter, Record};
use pretty_env_logger::env_logger::{self, fmt::Color};

fn level_color(record: &Record) -> Color {
    match record.level() {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug | Level::Trace => Color::Cyan,
    }
}

/// Crate logs at `info` unless `RUST_LOG` says otherwise. Records from other
/// crates keep their target so reqwest and hyper noise stays attributable.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    if std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(LevelFilter::Warn);
        builder.filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Info);
    }

    builder.format(|buf: &mut env_logger::fmt::Formatter, record| {
        let mut style = buf.style();
        style.set_color(level_color(record)).set_bold(true);
        let level = style.value(format!("{:<5}", record.level()));

        if record.target().starts_with(env!("CARGO_CRATE_NAME")) {
            writeln!(buf, "{} {} {}", buf.timestamp_millis(), level, record.args())
        } else {
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_millis(),
                level,
                record.target(),
                record.args()
            )
        }
    });

    builder.init();
}
