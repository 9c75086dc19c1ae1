use anyhow::Context;
use clap::Parser;
use pixconv::{
    ConversionSummary, ConvertConfig, ConvertError, FolderConverter, LogSink, ProgressSink,
};
use std::io::Write;
use std::process::ExitCode;

const EXIT_FAILURES: u8 = 1;
const EXIT_CONFIG: u8 = 2;
const EXIT_SETUP: u8 = 3;

fn main() -> ExitCode {
    let cli = pixconv::Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    match run(&cli) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_FAILURES),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let configuration = err
                .downcast_ref::<ConvertError>()
                .map(ConvertError::is_configuration)
                .unwrap_or(false);
            ExitCode::from(if configuration { EXIT_CONFIG } else { EXIT_SETUP })
        }
    }
}

fn run(cli: &pixconv::Cli) -> anyhow::Result<ConversionSummary> {
    let config = ConvertConfig::from_token(&cli.input_folder, &cli.output_folder, &cli.format)?
        .with_recursive(cli.recursive)
        .with_overwrite(cli.overwrite)
        .with_quiet(cli.quiet);
    config.validate()?;

    let converter = FolderConverter::new(config);

    let result = if cli.progress {
        let mut sink = ProgressSink::new();
        let result = converter.convert(&mut sink);
        sink.finish();
        result
    } else {
        converter.convert(&mut LogSink)
    };
    let summary =
        result.with_context(|| format!("converting {}", cli.input_folder.display()))?;

    print_summary(converter.config(), &summary);

    Ok(summary)
}

fn print_summary(config: &ConvertConfig, summary: &ConversionSummary) {
    let mode = if config.recursive { "recursive" } else { "non-recursive" };
    println!(
        "Done. Mode: {}, Format: {}, Output: {} (*{}). {}",
        mode,
        config.format,
        config.output_root.display(),
        config.format.extension(),
        summary
    );
}
