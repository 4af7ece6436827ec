use crate::core::discount::CustomerTier;
use crate::utils::error::Result;
use crate::utils::report::OutputFormat;
use crate::utils::validation::{validate_non_negative, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-kit")]
#[command(about = "Dispatch capabilities over a catalog of polymorphic variants")]
pub struct CliConfig {
    /// Path to a TOML catalog; the built-in zoo is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Ask every animal for its sound
    Sounds,
    /// Ask every animal for its leg count
    Legs,
    /// Draw every shape
    Draw,
    /// List registered variant kinds
    Kinds,
    /// Compute the discount for a customer tier
    Discount {
        #[arg(long, value_enum)]
        tier: TierArg,
        #[arg(long)]
        price: f64,
    },
    /// Send a request through an injected connection
    Request {
        #[arg(long, value_enum, default_value_t = MethodArg::Get)]
        method: MethodArg,
        /// Absolute URL, or a path joined onto `[http] base_url`
        #[arg(long)]
        url: String,
        #[arg(long, value_enum)]
        transport: Option<TransportArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    Fav,
    Vip,
    SuperVip,
}

impl From<TierArg> for CustomerTier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::Fav => CustomerTier::Favourite,
            TierArg::Vip => CustomerTier::Vip,
            TierArg::SuperVip => CustomerTier::SuperVip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    Xml,
    Node,
    Mock,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Discount { price, .. } = &self.command {
            validate_non_negative("price", *price)?;
        }
        Ok(())
    }
}
