use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend writing to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

pub(crate) fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[martor {level} {target}] {message}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let msg = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub(crate) fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

/// Level from `window.ENV.LOG_LEVEL` (or `log_level`), defaulting to `warn`.
pub fn level_from_env() -> LevelFilter {
    let default = LevelFilter::Warn;
    let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
        return default;
    };
    if env.is_undefined() || !env.is_object() {
        return default;
    }

    ["LOG_LEVEL", "log_level"]
        .iter()
        .filter_map(|k| js_sys::Reflect::get(&env, &(*k).into()).ok())
        .filter_map(|v| v.as_string())
        .find_map(|s| parse_level(&s))
        .unwrap_or(default)
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(Level::Warn, "martor_editor::preview", "render failed"),
            "[martor WARN martor_editor::preview] render failed"
        );
    }

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" INFO "), Some(LevelFilter::Info));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
