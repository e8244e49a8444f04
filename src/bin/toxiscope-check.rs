//! CLI utility to score a comment against the prediction service.

use std::io::Read;
use std::path::PathBuf;

use toxiscope::config;
use toxiscope::egui_app::controller::{EMPTY_INPUT_MESSAGE, failure_message};
use toxiscope::export;
use toxiscope::markup;
use toxiscope::presentation::ResultView;
use toxiscope::service::{AnalysisRequest, HttpPredictionService, PredictionService};

fn main() {
    toxiscope::logging::init_stderr();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    let mut settings = config::load_or_default().map_err(|err| err.to_string())?;
    if let Some(url) = &options.url {
        settings
            .set_service_url(url)
            .map_err(|err| format!("--url: {err}"))?;
    }

    let text = match options.text {
        Some(text) => text,
        None => read_stdin()?,
    };
    let request =
        AnalysisRequest::from_input(&text).ok_or_else(|| EMPTY_INPUT_MESSAGE.to_string())?;

    let service = HttpPredictionService::new(&settings.service);
    let response = service
        .predict(&request)
        .map_err(|err| failure_message(&err, service.base_url()))?;

    let view = ResultView::from_response(&response);
    if options.html {
        print!("{}", markup::results_html(&view));
    } else {
        println!("{} {}", view.profile.icon, view.profile.title);
        println!("{}", view.profile.description);
        println!("{}", view.score_text);
        for bar in &view.bars {
            println!("  {:<16} {:>6}", bar.display_name, bar.percentage);
        }
        if let Some(notice) = view.demo_notice {
            println!("{notice}");
        }
    }

    if let Some(dir) = &options.export_dir {
        let now = time::OffsetDateTime::now_utc();
        let path = export::write_export(dir, &response, now).map_err(|err| err.to_string())?;
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}

#[derive(Default)]
struct Options {
    url: Option<String>,
    html: bool,
    export_dir: Option<PathBuf>,
    text: Option<String>,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut words = Vec::new();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--url" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--url requires a value".to_string())?;
                options.url = Some(value.to_string());
            }
            "--export" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--export requires a value".to_string())?;
                options.export_dir = Some(PathBuf::from(value));
            }
            "--html" => {
                options.html = true;
            }
            "--" => {
                words.extend(args[idx + 1..].iter().cloned());
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown argument: {flag}\n\n{}", help_text()));
            }
            word => words.push(word.to_string()),
        }
        idx += 1;
    }
    if !words.is_empty() {
        options.text = Some(words.join(" "));
    }
    Ok(Some(options))
}

fn read_stdin() -> Result<String, String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    Ok(text)
}

fn help_text() -> String {
    [
        "toxiscope-check",
        "",
        "Scores a comment with the toxicity prediction service.",
        "",
        "Usage:",
        "  toxiscope-check [options] <text>...",
        "  echo <text> | toxiscope-check [options]",
        "",
        "Options:",
        "  --url <url>      Service base URL (defaults to config.toml).",
        "  --html           Print the result as an HTML fragment.",
        "  --export <dir>   Also write the raw response as JSON into <dir>.",
    ]
    .join("\n")
}
