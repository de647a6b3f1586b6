use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_line(&format!(
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the crate logger and sets the max level.
///
/// Safe to call repeatedly; later calls only change the level. If another
/// logger was installed first, it is left in place.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(target_arch = "wasm32")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        pub fn log(line: &str);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(line: &str) {
    console::log(line);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_updates_level() {
        init_logging(LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);

        init_logging(LevelFilter::Off);
        assert_eq!(log::max_level(), LevelFilter::Off);
    }
}
