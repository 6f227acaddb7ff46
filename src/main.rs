use anyhow::{Context, Result};
use clap::Parser;
use random_art::{ArtGenerator, PatternType, PreferenceStore, Rgb, Theme};
use std::path::PathBuf;

/// Generate a random piece of art and save it as a PNG.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Cli {
    /// Pattern family: abstract, pixel, lines, fractals or mosaic.
    #[arg(short, long, default_value = "abstract")]
    pattern: PatternType,

    /// Accent color for fractals, as #rgb or #rrggbb.
    #[arg(short, long, default_value = "#000000")]
    color: Rgb,

    /// Directory the PNG is written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Regenerate this many extra times before exporting.
    #[arg(short = 'n', long, default_value_t = 0)]
    rerolls: u32,

    /// Preference file holding the theme.
    #[arg(long, default_value = "random-art-prefs.json")]
    prefs: PathBuf,

    /// Switch between the light and dark theme and remember the choice.
    #[arg(long)]
    toggle_theme: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut prefs = PreferenceStore::open(&cli.prefs);
    let theme = if cli.toggle_theme {
        Theme::toggle(&mut prefs)
            .with_context(|| format!("saving theme to {}", prefs.path().display()))?
    } else {
        Theme::load(&prefs)
    };
    log::info!("Using {} theme", theme);

    let mut app = ArtGenerator::new();
    app.select_pattern(cli.pattern);
    app.select_color(cli.color);

    log::info!("Generating {} art...", cli.pattern.label());
    app.on_generate_requested();
    for i in 0..cli.rerolls {
        log::debug!("Re-roll {}", i + 1);
        app.on_generate_requested();
    }

    log::info!("Saving image...");
    let export = app
        .on_export_requested()
        .context("encoding PNG")?
        .context("nothing has been generated")?;
    let path = export
        .save_to(&cli.out_dir)
        .with_context(|| format!("writing into {}", cli.out_dir.display()))?;
    println!("Image saved as {}", path.display());
    Ok(())
}
