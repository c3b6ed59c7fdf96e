use clap::Parser;
use vpn_routing_lists::core::{BuildReport, ConfigProvider, SourceDocument};
use vpn_routing_lists::utils::{logger, validation::Validate};
use vpn_routing_lists::{BuildEngine, BuildError, CliConfig, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting build-lists");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let storage = LocalStorage::new(cli.root.clone());
    let engine = BuildEngine::new(storage, config);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        let doc = match engine.parse() {
            Ok(doc) => doc,
            Err(e) => exit_with(&e),
        };
        print_dry_run(&engine, &doc)?;
        return Ok(());
    }

    match engine.run() {
        Ok(report) => print_report(&report),
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &BuildError) -> ! {
    tracing::error!(
        "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}

fn print_report(report: &BuildReport) {
    println!("✅ All formats generated successfully!");
    println!(
        "📋 {} domains in {} services from {}",
        report.domains, report.services, report.source
    );
    for file in &report.files {
        println!("  📁 {:<12} {} ({} bytes)", file.format, file.path, file.bytes);
    }
}

fn print_dry_run<C: ConfigProvider>(
    engine: &BuildEngine<LocalStorage, C>,
    doc: &SourceDocument,
) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!("  Source: {}", engine.config().source_path());
    println!("  Domains: {}", doc.entry_count());
    println!("  Grouped: {} in {} services", doc.grouped_count(), doc.services.len());
    println!();

    println!("💾 Would write:");
    for format in engine.formats() {
        println!(
            "  {} -> {}",
            format.name(),
            engine.storage().resolve(format.output_path()).display()
        );
    }
    println!();

    println!("{}", engine.dry_run_summary(doc)?);

    Ok(())
}
