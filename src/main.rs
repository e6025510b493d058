use clap::Parser;
use vehicle_catalog::utils::logger;
use vehicle_catalog::{render, Catalog, CliConfig, Validate};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting vehicle-catalog CLI");
    tracing::debug!("CLI config: {:?}", config);

    let catalog = Catalog::builtin();

    // 驗證資料 (只有指定 --validate 時)
    if config.validate {
        if let Err(e) = catalog.validate() {
            tracing::error!("Catalog validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        tracing::info!("All {} vehicles are valid", catalog.len());
    }

    match render(&catalog, config.format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("Rendering catalog as {:?} failed: {}", config.format, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
