use clap::Parser;
use solid_kit::app::{App, TransportKind};
use solid_kit::config::cli::{Command, MethodArg, TransportArg};
use solid_kit::core::HttpMethod;
use solid_kit::utils::error::ErrorSeverity;
use solid_kit::utils::report::{self, OutputFormat};
use solid_kit::utils::logger::{self, LogFormat};
use solid_kit::utils::validation::Validate;
use solid_kit::{CatalogConfig, CliConfig, SolidError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, config.verbose)?;

    tracing::info!("Starting solid-kit");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config).await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run(config: &CliConfig) -> Result<String, SolidError> {
    let catalog = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path.display());
            CatalogConfig::try_from(path.as_path())?
        }
        None => CatalogConfig::default_zoo(),
    };
    tracing::info!(
        "Catalog '{}': {} animals, {} shapes",
        catalog.catalog.name,
        catalog.animals.len(),
        catalog.shapes.len()
    );

    let app = App::new(catalog);
    let rows = match &config.command {
        Command::Sounds => app.sounds()?,
        Command::Legs => app.legs()?,
        Command::Draw => app.draw()?,
        Command::Kinds => app.kinds(),
        Command::Discount { tier, price } => app.discount((*tier).into(), *price)?,
        Command::Request {
            method,
            url,
            transport,
        } => {
            let method = match method {
                MethodArg::Get => HttpMethod::Get,
                MethodArg::Post => HttpMethod::Post,
            };
            let transport = transport.map(|t| match t {
                TransportArg::Xml => TransportKind::Xml,
                TransportArg::Node => TransportKind::Node,
                TransportArg::Mock => TransportKind::Mock,
            });
            app.request(method, url, transport).await?
        }
    };

    report::render(&rows, OutputFormat::from(config.format))
}
