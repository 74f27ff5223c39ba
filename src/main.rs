use clap::Parser;
use folio_text::config::Command;
use folio_text::core::require_valid_email;
use folio_text::utils::error::FolioError;
use folio_text::utils::{logger, validation::Validate};
use folio_text::{
    capitalize_first_letter, excerpt, linkify_urls, sanitize_input, CliConfig, InputSource,
    TextConfig, TransformPipeline,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(cli.command, &config) {
        exit_with(&e);
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> folio_text::Result<TextConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TextConfig::from_file(path)?
        }
        None => TextConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(command: Command, config: &TextConfig) -> folio_text::Result<()> {
    match command {
        Command::Truncate {
            text,
            max_length,
            suffix,
        } => {
            let config = config.clone().with_truncate_overrides(max_length, suffix)?;
            let text = InputSource::from_arg(text).read_text()?;
            println!("{}", excerpt(&text, &config));
        }
        Command::Capitalize { text } => {
            let text = InputSource::from_arg(text).read_text()?;
            println!("{}", capitalize_first_letter(text.as_str()).unwrap_or_default());
        }
        Command::Linkify { text } => {
            let text = InputSource::from_arg(text).read_text()?;
            println!("{}", linkify_urls(&text));
        }
        Command::Sanitize { text } => {
            let text = InputSource::from_arg(text).read_text()?;
            println!("{}", sanitize_input(text.as_str()));
        }
        Command::ValidateEmail { email } => {
            let email = InputSource::from_arg(email).read_text()?;
            require_valid_email(&email)?;
            println!("✅ valid");
        }
        Command::Pipeline { steps, text } => {
            let pipeline = TransformPipeline::from_step_names(&steps, config)?;
            tracing::info!("🔧 Running steps: {}", pipeline.step_names().join(" → "));
            let text = InputSource::from_arg(text).read_text()?;
            println!("{}", pipeline.run(&text));
        }
        Command::Contact { file } => {
            let form = InputSource::from_path(file).read_contact_form()?;
            let submission = form.submit(config)?;
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
    }

    Ok(())
}

fn exit_with(e: &FolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.severity().exit_code())
}
