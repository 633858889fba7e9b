use anyhow::Result;
use dayboard_core::config::BoardConfig;
use dayboard_core::holidays::{SCHOOL_HOLIDAYS, WORK_HOLIDAYS};
use dayboard_core::sheet::SheetSource;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = BoardConfig::config_path()?;
    let config = BoardConfig::load()?;
    let source = SheetSource::from(&config);

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    if let Some(log_path) = crate::log_path() {
        println!("  Log:        {}", log_path.display());
    }

    println!();
    println!("{}", "Sheet".bold());
    println!("  URL:        {}", source.url());
    if !source.is_configured() {
        println!("  {}", "Sheet id is not configured".yellow());
    }
    println!("  Refresh:    every {} min", config.refresh_minutes);
    println!("  Timeout:    {} s", config.request_timeout_secs);

    println!();
    println!("{}", "Holidays".bold());
    println!("  School:     {}", SCHOOL_HOLIDAYS.dates().join(", "));
    println!("  Work:       {}", WORK_HOLIDAYS.dates().join(", "));

    Ok(())
}
