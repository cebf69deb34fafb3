/*
 * Copyright 2025 Oxide Computer Company
 */

use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use serde::Deserialize;
use slog::{o, Drain, Logger};

pub fn read_toml<P: AsRef<Path>, T>(n: P) -> Result<T>
where
    for<'de> T: Deserialize<'de>,
{
    let s = std::fs::read_to_string(n.as_ref())?;
    Ok(toml::from_str(&s)?)
}

pub fn make_log(name: &'static str) -> Logger {
    let filter_level = match std::env::var("PORTFOLIO_DEBUG")
        .map(|v| v.to_ascii_lowercase())
        .as_deref()
    {
        Ok("yes") | Ok("1") | Ok("true") => slog::Level::Debug,
        _ => slog::Level::Info,
    };

    if std::io::stdout().is_terminal() {
        /*
         * Use a terminal-formatted logger for interactive processes.
         */
        let dec = slog_term::TermDecorator::new().stdout().build();
        let dr = Mutex::new(
            slog_term::FullFormat::new(dec).use_original_order().build(),
        )
        .filter_level(filter_level)
        .fuse();
        Logger::root(dr, o!("name" => name))
    } else {
        /*
         * Otherwise, emit bunyan-formatted records:
         */
        let dr = Mutex::new(
            slog_bunyan::with_name(name, std::io::stdout())
                .set_flush(true)
                .build(),
        )
        .filter_level(filter_level)
        .fuse();
        Logger::root(dr, o!())
    }
}
