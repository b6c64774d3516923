use std::{
    path::Path,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::{fs, io::AsyncReadExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tubeseo_core::{
    ChatCompletionsClient, ExportRecord, FormInput, Overrides, PromptDispatcher, Sections,
    Settings, analyze_content, format_result_readable,
};

use crate::cli::{Cli, OutputFormat};

mod cli;
mod render;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn read_script(cli: &Cli) -> Result<String> {
    match (&cli.script, &cli.script_file) {
        (Some(script), _) => Ok(script.clone()),
        (None, Some(path)) if path == Path::new("-") => {
            let mut script = String::new();
            tokio::io::stdin().read_to_string(&mut script).await?;
            Ok(script)
        }
        (None, Some(path)) => Ok(fs::read_to_string(path).await?),
        (None, None) => Ok(String::new()),
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load(Overrides {
        secrets_path: cli.secrets.clone(),
        provider: cli.provider.map(Into::into),
        model: cli.model.clone(),
    })
    .await
    .unwrap_or_else(|e| fail(e));
    info!(
        provider = settings.provider().name(),
        model = %settings.model,
        secrets = ?settings.secrets_path,
        "Settings loaded"
    );

    // Validate API key early
    if let Err(e) = settings.credentials.secret() {
        fail(e);
    }

    let sections = cli
        .skip
        .iter()
        .fold(Sections::default(), |s, skip| s.without((*skip).into()));

    let form = FormInput {
        script: read_script(&cli).await?,
        video_type: cli.video_type.into(),
        audience: cli.audience.clone(),
        tone: cli.tone.into(),
        keywords: cli.keywords.clone(),
        style_preferences: cli.style.clone(),
        channel_info: cli.channel_info.clone(),
        competitor_keywords: cli.competitor_keywords.clone(),
        video_length: cli.video_length.into(),
        max_titles: cli.max_titles as usize,
        sections,
    };
    let (request, options) = form.collect().unwrap_or_else(|e| fail(e));

    let metrics = (!cli.no_analytics).then(|| analyze_content(&request.script));

    let client = ChatCompletionsClient::from_settings(&settings).unwrap_or_else(|e| fail(e));
    let provider_name = settings.provider().name();
    let dispatcher = PromptDispatcher::new(client, settings.credentials.clone());

    let interactive = cli.format == OutputFormat::Text;
    if interactive {
        render::print_header();
    }

    let started = Instant::now();
    let spinner = create_spinner(&format!(
        "Generating content with {} ({})...",
        provider_name,
        dispatcher.generator().model()
    ));
    let result = match dispatcher.dispatch(&request, &options).await {
        Ok(result) => {
            spinner.finish_and_clear();
            result
        }
        Err(e) => {
            spinner.finish_and_clear();
            fail(e);
        }
    };

    match cli.format {
        OutputFormat::Text => {
            println!(
                "{} Content generated ({}) {}\n",
                style("✓").green().bold(),
                provider_name,
                style(format!("[{}]", format_duration(started.elapsed()))).dim()
            );
            if let Some(metrics) = &metrics {
                render::print_metrics(metrics);
            }
            render::print_panels(&result);
        }
        OutputFormat::Json => {
            let record = ExportRecord::new(&request, &result, metrics.as_ref());
            println!("{}", record.to_json()?);
        }
        OutputFormat::Csv => {
            let record = ExportRecord::new(&request, &result, metrics.as_ref());
            print!("{}", record.to_csv());
        }
        OutputFormat::Txt => {
            let record = ExportRecord::new(&request, &result, metrics.as_ref());
            print!("{}", record.to_txt(&result));
        }
        OutputFormat::Markdown => {
            print!("{}", format_result_readable(&result, metrics.as_ref()));
        }
    }

    Ok(())
}
