use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-kata")]
#[command(about = "Paired before/after demos of the five SOLID principles")]
pub struct CliConfig {
    #[arg(long, default_value = "report.txt")]
    pub report_path: String,

    #[arg(long, default_value = "log.txt")]
    pub log_path: String,

    #[arg(long, default_value = "John")]
    pub username: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn report_path(&self) -> &str {
        &self.report_path
    }

    fn log_path(&self) -> &str {
        &self.log_path
    }

    fn username(&self) -> &str {
        &self.username
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("report_path", &self.report_path)?;
        validate_path("log_path", &self.log_path)?;
        validate_non_empty_string("username", &self.username)?;
        Ok(())
    }
}
