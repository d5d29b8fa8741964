//! loads wgl extensions of the system gl library and prints which of them are supported.
//!
//! there is no window here, so the extensions string is queried without a device context.

use anyhow::Context as _;
use wgl::{Command, Extension, INVALID_HDC, Wgl};

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        println!(
            "{level:<5} {file}:{line} > {text}",
            level = record.level(),
            file = record.file().unwrap_or_else(|| record.target()),
            line = record
                .line()
                .map_or_else(|| "??".to_string(), |line| line.to_string()),
            text = record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    fn init() -> anyhow::Result<()> {
        log::set_logger(&Logger).context("could not set logger")?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    Logger::init()?;

    let mut wgl = Wgl::new();
    wgl.load(INVALID_HDC).context("could not load wgl")?;

    for ext in Extension::ALL {
        let loaded = ext
            .commands()
            .iter()
            .filter(|command| wgl.is_loaded(**command))
            .count();
        println!(
            "{supported} {ext} ({loaded}/{total} entry points)",
            supported = if wgl.has(*ext) { "+" } else { "-" },
            total = ext.commands().len(),
        );
    }

    if wgl.is_loaded(Command::GetSwapIntervalEXT) {
        // NOTE: without a current context the driver is free to return anything.
        let interval = unsafe { wgl.GetSwapIntervalEXT() };
        println!("swap interval: {interval}");
    }

    wgl.unload();
    Ok(())
}
