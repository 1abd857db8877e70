use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the YAML configuration file with defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing summitq…");

    let path = Config::init_all(cli.config.as_deref())?;
    let cfg = Config::load_from(&path)?;

    println!("📄 Config file : {}", path.display());
    println!("🌐 API base    : {}", cfg.api_base);

    messages::success("summitq initialization completed!");
    Ok(())
}
