use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;
use dossier::{
    CaseMetadata, GenerationRequest, GeneratorConfig, PipelineError, ReportGenerationController,
    RequestOutcome,
};
use std::fs;
use std::path::PathBuf;

/// Generate a forensic analysis report PDF from sectioned analysis text.
#[derive(Parser, Debug)]
#[command(name = "dossier", version, about)]
struct Cli {
    /// Analysis text; lines starting with `**` open a new section.
    #[arg(long)]
    text: PathBuf,

    #[arg(long)]
    case_id: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long, default_value_t = 0)]
    evidence_count: u32,

    /// Generation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Generation time (HH:MM:SS). Defaults to now.
    #[arg(long)]
    time: Option<NaiveTime>,

    /// JSON theme overriding colours, fonts, page geometry or chrome text.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Directory the report is written into.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.text)?;
    let config = match &cli.theme {
        Some(path) => GeneratorConfig::from_theme_file(path)?,
        None => GeneratorConfig::default(),
    };

    let now = Local::now().naive_local();
    let mut metadata = CaseMetadata::new(
        cli.case_id,
        cli.date.unwrap_or(now.date()),
        cli.time.unwrap_or(now.time()),
    )
    .with_evidence_count(cli.evidence_count);
    if let Some(title) = cli.title {
        metadata = metadata.with_title(title);
    }

    let controller = ReportGenerationController::from_config(config);
    match controller
        .request_generation(GenerationRequest::new(text, metadata))
        .await
    {
        RequestOutcome::Ready(artifact) => {
            fs::create_dir_all(&cli.out)?;
            let path = artifact.write_into_dir(&cli.out)?;
            println!("Wrote {} ({} pages)", path.display(), artifact.page_count);
            Ok(())
        }
        RequestOutcome::Skipped => {
            println!("Analysis text is empty; no report generated.");
            Ok(())
        }
        RequestOutcome::Failed(reason) => Err(PipelineError::Other(reason)),
        RequestOutcome::Superseded => Err(PipelineError::Other(
            "report generation was superseded".to_string(),
        )),
    }
}
