//! Tiri CLI
//!
//! 농구 연습 슈팅 기록 폼 (대화형 / 이벤트 재생) + 코트 다이어그램 + PDF 리포트

mod command;
mod export;
mod repl;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bt_core::court::{load_background, position_markers, save_png};
use bt_core::report::diagram_pdf;
use bt_core::{AppConfig, CanvasPoint, Form, FormEvent};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tiri")]
#[command(version, about = "Basketball practice shot tracking", long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shot entry form on stdin
    Session {
        /// Session date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Apply JSON form events from a file (one per line)
    Replay {
        /// JSONL event file
        #[arg(long)]
        events: PathBuf,

        /// Initial session date, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Write the PDF report to this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Also write per-player court diagrams next to the report
        /// (PNG with font_path configured, one-page PDF otherwise)
        #[arg(long, default_value = "false")]
        keep_images: bool,
    },

    /// Render the court diagram with the seven labelled shooting positions
    Court {
        /// Output path: `.pdf` uses built-in fonts, `.png` needs font_path
        #[arg(long)]
        out: PathBuf,
    },

    /// Render the background court image with zone rectangles outlined
    Canvas {
        /// Output PNG path
        #[arg(long)]
        out: PathBuf,
    },

    /// List zones with canvas rectangles and court anchors
    Zones,

    /// Hit-test a canvas point
    Hit {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;

    match cli.command {
        Commands::Session { date } => {
            let mut form = Form::from_config(&config, date.unwrap_or_else(today))?;
            let renderer = config.renderer()?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run(&mut form, &renderer, &config.output_dir, stdin.lock(), &mut stdout)?;
        }

        Commands::Replay { events, date, report_dir, keep_images } => {
            let mut form = Form::from_config(&config, date.unwrap_or_else(today))?;
            replay(&mut form, &events)?;

            match form.view() {
                Ok(view) => print!("\n{}", view),
                Err(notice) => println!("\n{}", notice),
            }

            if let Some(dir) = report_dir {
                export::export_report(&form, &config.renderer()?, &dir, keep_images, &mut io::stdout())?;
            }
        }

        Commands::Court { out } => {
            let renderer = config.renderer()?;
            let annotations = position_markers(&config.zone_map()?);
            if is_pdf(&out) {
                let bytes = diagram_pdf("Campo", "Posizioni di tiro", annotations, &renderer)?;
                if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&out, &bytes)?;
                println!("✅ Campo salvato: {} ({} bytes)", out.display(), bytes.len());
            } else {
                let img = renderer
                    .render(&annotations)
                    .context("❌ Etichette del campo: imposta font_path oppure usa --out campo.pdf")?;
                save_png(&img, &out)?;
                println!("✅ Campo salvato: {} ({}x{})", out.display(), img.width(), img.height());
            }
        }

        Commands::Canvas { out } => {
            let Some(path) = &config.court_image else {
                bail!("❌ court_image non configurato (usa --config con court_image)");
            };
            let background = load_background(path)
                .with_context(|| format!("Immagine del campo non trovata: {}", path.display()))?;
            let img = config.renderer()?.render_canvas(&background, &config.zone_map()?);
            save_png(&img, &out)?;
            println!("✅ Canvas salvato: {} ({}x{})", out.display(), img.width(), img.height());
        }

        Commands::Zones => {
            repl::print_zones(&config.zone_map()?, &mut io::stdout())?;
        }

        Commands::Hit { x, y } => match config.zone_map()?.hit_test(CanvasPoint::new(x, y)) {
            Some(zone) => println!("🎯 {} ({})", zone, zone.index()),
            None => println!("⚠️ Clic al di fuori delle zone riconosciute."),
        },
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn is_pdf(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// JSONL 이벤트 재생. 빈 줄과 `#` 주석은 건너뛴다.
fn replay(form: &mut Form, path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Cannot open events file {}", path.display()))?;
    println!("🔁 Replaying {}", path.display());

    let mut applied = 0usize;
    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: FormEvent =
            serde_json::from_str(line).with_context(|| format!("Invalid event on line {}", n + 1))?;
        for notice in form.dispatch(event) {
            println!("{}", notice);
        }
        applied += 1;
    }
    log::info!("Applied {} events from {}", applied, path.display());
    Ok(())
}
