/// Generates the default `config.toml` contents with explanatory comments.
///
/// Written by `dispmode init` so users have a starting point to edit.
pub fn generate_config() -> String {
    r##"# dispmode configuration
# Location: ~/.config/dispmode/config.toml

[modes]
# How a total color depth is split across red/green/blue when it doesn't
# divide by three. "green-bias" reads 16 bpp as 5/6/5, "even" as 5/5/5.
split = "green-bias"

[fullscreen]
# Seconds `dispmode set` keeps the new mode before restoring the desktop
# mode (1 to 600).
hold_seconds = 10

[logging]
# Enable file logging to ~/.config/dispmode/logs/dispmode.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
