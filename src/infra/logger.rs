use env_logger::Builder;
use log::Level;
use std::io::Write;

pub const LOG_LEVEL_ENV: &str = "CMAKE_FILELIST_LOG_LEVEL";

fn level_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// `cmake-filelist: <LEVEL> <message>`, level colored. Runs are short, so no timestamp.
fn render_line(level: Level, message: &str) -> String {
    let color = match level {
        Level::Error => "31",
        Level::Warn => "33",
        Level::Info => "32",
        Level::Debug => "36",
        Level::Trace => "35",
    };
    format!("cmake-filelist: \x1B[{}m{:<5}\x1B[0m {}", color, level, message)
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_filter(verbosity));

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(buf, "{}", render_line(record.level(), &record.args().to_string()))
        })
        .try_init()
}
