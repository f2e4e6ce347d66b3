#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use style_conf_editor::binding::{self, find_element};
use style_conf_editor::inspector::controls::{ControlGroup, ControlKind};
use style_conf_editor::palette::StaticPaletteGenerator;
use style_conf_editor::{
    decode_color, decode_font, persistence, EditingSession, EditorSettings, FullKey, InspectorWindow, Section, Size,
};

#[derive(Parser)]
#[command(name = "style-conf-editor", version, about = "Inspect and edit AviUtl2 style.conf theme files")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error); overrides LOG_LEVEL
    #[arg(long = "log-level", global = true)]
    log_level: Option<TraceLevel>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the normalized text of a file (or of the built-in defaults)
    Show { file: Option<PathBuf> },

    /// Print one value, raw and decoded
    Get { file: PathBuf, key: String },

    /// Change one value and write the result
    Set {
        file: PathBuf,
        key: String,
        value: String,
        /// Write here instead of overwriting FILE
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a raw color (or font, with --font) value
    Decode {
        value: String,
        #[arg(long)]
        font: bool,
    },

    /// List the preview regions that can be inspected
    Elements,

    /// Open inspectors for the given regions and print their controls
    Inspect {
        /// style.conf to load (built-in defaults if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Resize the preview to this width after opening the windows
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        viewport_width: Option<i32>,
        /// Resize the preview to this height after opening the windows
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        viewport_height: Option<i32>,
        #[arg(required = true)]
        elements: Vec<String>,
    },

    /// Merge a palette (JSON object of role → hex) into the Color section
    Palette {
        file: PathBuf,
        /// Palette JSON, e.g. '{"Background": "#101010"}'
        #[arg(long)]
        colors: String,
        /// Theme description sent along with the request
        #[arg(long)]
        prompt: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the built-in default style.conf
    Reset {
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env_level = std::env::var("LOG_LEVEL").ok();

    // Settings decide the final level, so they are loaded under a scoped
    // subscriber built from the flag and environment alone
    let early_level = resolve_level(cli.log_level, env_level.as_deref(), None);
    let settings = tracing::subscriber::with_default(build_subscriber(early_level), EditorSettings::load)?;

    let log_level = resolve_level(cli.log_level, env_level.as_deref(), settings.level());
    tracing::subscriber::set_global_default(build_subscriber(log_level))?;

    let mut session = EditingSession::with_inspectors(settings.inspector_manager());

    match cli.command {
        Command::Show { file } => {
            if let Some(file) = &file {
                persistence::import_file(&mut session, file)?;
            }
            let config = session.config().context("No style configuration loaded")?;
            println!("{}", style_conf_editor::serialize(config));
        }
        Command::Get { file, key } => {
            persistence::import_file(&mut session, &file)?;
            let full_key: FullKey = key.parse()?;
            let Some(value) = session.value(&key) else {
                bail!("{full_key} is not set in {}", file.display());
            };
            println!("{value}");
            match full_key.section() {
                Section::Color => println!("{}", decode_color(value)),
                Section::Font => print_font(value),
                Section::Layout | Section::Format => {}
            }
        }
        Command::Set {
            file,
            key,
            value,
            output,
        } => {
            persistence::import_file(&mut session, &file)?;
            session.set_value(&key, &value)?;
            let target = output.unwrap_or(file);
            persistence::export_file(&session, &target)?;
            remember_file(settings, &target);
        }
        Command::Decode { value, font } => {
            if font {
                print_font(&value);
            } else {
                println!("{}", decode_color(&value));
            }
        }
        Command::Elements => {
            for element in binding::catalog() {
                println!("{:<26} {} ({} keys)", element.key, element.name, element.keys.len());
            }
        }
        Command::Inspect {
            file,
            json,
            viewport_width,
            viewport_height,
            elements,
        } => {
            if let Some(file) = &file {
                persistence::import_file(&mut session, file)?;
            }
            for key in &elements {
                let element = find_element(key).with_context(|| format!("Unknown element '{key}'"))?;
                session.activate_element(element);
            }
            if viewport_width.is_some() || viewport_height.is_some() {
                let current = session.inspectors().viewport();
                let viewport = Size::new(
                    viewport_width.unwrap_or(current.width),
                    viewport_height.unwrap_or(current.height),
                );
                session.inspectors_mut().set_viewport(viewport);
            }
            print_inspectors(&session, json)?;
        }
        Command::Palette {
            file,
            colors,
            prompt,
            output,
        } => {
            persistence::import_file(&mut session, &file)?;
            if let Some(prompt) = prompt {
                session.palette_dialog_mut().set_prompt(prompt);
            }
            session.palette_dialog_mut().open();

            let generator = StaticPaletteGenerator::new(colors);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .context("Failed to start async runtime")?;
            let applied = runtime.block_on(session.generate_palette(&generator))?;
            info!(keys = ?applied, "Applied palette");

            let target = output.unwrap_or(file);
            persistence::export_file(&session, &target)?;
            remember_file(settings, &target);
        }
        Command::Reset { output } => {
            session.reset();
            persistence::export_file(&session, &output)?;
            remember_file(settings, &output);
        }
    }

    Ok(())
}

/// `--log-level`, then `LOG_LEVEL`, then the settings file, then info
fn resolve_level(cli: Option<TraceLevel>, env: Option<&str>, settings: Option<TraceLevel>) -> TraceLevel {
    cli.or_else(|| env.and_then(|level| level.parse().ok()))
        .or(settings)
        .unwrap_or(TraceLevel::INFO)
}

fn build_subscriber(level: TraceLevel) -> impl tracing::Subscriber + Send + Sync + 'static {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish()
}

fn print_font(value: &str) {
    let font = decode_font(value);
    match font.family_name() {
        Some(family) => println!("size={} family={family}", font.size),
        None => println!("size={} family=(inherited)", font.size),
    }
}

fn print_inspectors(session: &EditingSession, json: bool) -> Result<()> {
    let windows: Vec<(&InspectorWindow, Vec<ControlGroup>)> = session
        .inspectors()
        .windows()
        .iter()
        .map(|window| (window, session.inspector_controls(window.id).unwrap_or_default()))
        .collect();

    if json {
        let value: Vec<serde_json::Value> = windows
            .iter()
            .map(|(window, groups)| serde_json::json!({ "window": window, "controls": groups }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&value).context("Failed to serialize inspectors")?);
        return Ok(());
    }

    for (window, groups) in windows {
        println!(
            "{} {} at ({}, {})",
            window.id, window.element.name, window.position.x, window.position.y
        );
        for group in groups {
            println!("  [{}]", group.category);
            for control in group.controls {
                let detail = match &control.kind {
                    ControlKind::Color { swatches, .. } => swatches.join(" → "),
                    ControlKind::Number { value, max } => format!("{value} / {max}"),
                    ControlKind::Text => control.value.clone(),
                };
                println!("    {:<28} {}", control.label, detail);
            }
        }
    }
    Ok(())
}

fn remember_file(mut settings: EditorSettings, path: &Path) {
    settings.last_file = Some(path.to_path_buf());
    if let Err(e) = settings.save() {
        warn!(error = ?e, "Failed to save editor settings");
    }
}
