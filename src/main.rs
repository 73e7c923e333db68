//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::PatternCategory,
    simulation::{classify, find_period, Behavior},
    utils::{ColorOutput, GridFormatter},
    Grid, KnownPattern,
};
use log::{info, warn, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a bounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print its frames
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Catalog pattern to centre on the grid (random fill when absent)
        #[arg(short, long)]
        pattern: Option<KnownPattern>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Random fill density (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Random fill seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds between frames (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Walk through every catalog pattern and verify its behaviour
    Demo {
        /// Seed for the random evolution section
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the pattern catalog
    Patterns {
        /// Print each pattern's cells
        #[arg(long)]
        show: bool,
    },

    /// Create the default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::Debug } else { Level::Info };
    simple_logger::init_with_level(level).context("Failed to initialise logger")?;

    match cli.command {
        Commands::Run {
            config,
            pattern,
            height,
            width,
            generations,
            density,
            seed,
            delay_ms,
            format,
        } => {
            let overrides = CliOverrides {
                height,
                width,
                generations,
                density,
                seed,
                delay_ms,
                format: format.map(OutputFormat::from),
            };
            run_command(&config, pattern, &overrides, &mut io::stdout().lock())
        }
        Commands::Demo { seed } => {
            let mut out = io::stdout().lock();
            let failures = run_demo(&mut out, seed)?;
            if failures.is_empty() {
                Ok(())
            } else {
                anyhow::bail!("{} demo check(s) failed: {}", failures.len(), failures.join(", "))
            }
        }
        Commands::Patterns { show } => patterns_command(show, &mut io::stdout().lock()),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

/// Load the config file, or fall back to defaults when it does not exist
fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!("config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command<W: Write>(
    config_path: &Path,
    pattern: Option<KnownPattern>,
    overrides: &CliOverrides,
    out: &mut W,
) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    ColorOutput::set_enabled(settings.display.color);

    let display = settings.display.clone();
    let delay = Duration::from_millis(display.delay_ms);
    let show_frames = display.format == OutputFormat::Text;

    info!(
        "running {}x{} grid for {} generations",
        settings.simulation.height, settings.simulation.width, settings.simulation.generations
    );

    let report = game_of_life::simulate_with(&settings, pattern, |sim| {
        if show_frames && sim.generation() % display.show_every as u64 == 0 {
            writeln!(out, "{}", GridFormatter::format_frame(sim.grid(), sim.generation()))?;
            out.flush()?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(())
    })?;

    match display.format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json().context("Failed to serialize report")?)?,
    }

    Ok(())
}

fn patterns_command<W: Write>(show: bool, out: &mut W) -> Result<()> {
    if !show {
        write!(out, "{}", GridFormatter::format_catalog())?;
        return Ok(());
    }

    for known in KnownPattern::ALL {
        let pattern = known.pattern();
        writeln!(
            out,
            "{} ({}, {}x{}, period {})",
            ColorOutput::heading(known.name()),
            known.category(),
            pattern.height(),
            pattern.width(),
            known.period()
        )?;
        writeln!(out, "{}", GridFormatter::format_pattern(&pattern))?;
    }
    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Reproducible random run
    let reproducible_path = config_dir.join("reproducible.yaml");
    if !reproducible_path.exists() || force {
        let mut reproducible = Settings::default();
        reproducible.simulation.seed = Some(2024);
        reproducible.simulation.generations = 50;
        reproducible.display.delay_ms = 0;
        reproducible.display.format = OutputFormat::Json;
        reproducible.to_file(&reproducible_path)?;
        println!("Created: {}", reproducible_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --pattern glider");

    Ok(())
}

// ================================ Demo ================================

/// Print every catalog pattern evolving and verify it behaves as catalogued.
/// Returns the names of the checks that failed.
fn run_demo<W: Write>(out: &mut W, seed: Option<u64>) -> Result<Vec<String>> {
    let mut failures = Vec::new();

    writeln!(out, "{}", ColorOutput::heading("CONWAY'S GAME OF LIFE - COMPREHENSIVE DEMO"))?;
    writeln!(out)?;

    demo_still_lifes(out, &mut failures)?;
    demo_oscillators(out, &mut failures)?;
    demo_spaceships(out, &mut failures)?;
    demo_glider_gun(out, &mut failures)?;
    demo_random(out, seed)?;

    if failures.is_empty() {
        writeln!(out, "{}", ColorOutput::success("All checks passed"))?;
    } else {
        writeln!(out, "{}", ColorOutput::error(&format!("{} check(s) failed", failures.len())))?;
    }
    Ok(failures)
}

fn section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{}", ColorOutput::heading(title))?;
    writeln!(out, "{}", "=".repeat(60))?;
    Ok(())
}

fn check<W: Write>(out: &mut W, failures: &mut Vec<String>, name: &str, ok: bool, detail: &str) -> Result<()> {
    if ok {
        writeln!(out, "{}", ColorOutput::success(&format!("✓ {} {}", name, detail)))?;
    } else {
        writeln!(out, "{}", ColorOutput::error(&format!("✗ {} expected {}", name, detail)))?;
        failures.push(name.to_string());
    }
    writeln!(out)?;
    Ok(())
}

fn seeded(known: KnownPattern, height: usize, width: usize, row: isize, col: isize) -> Result<Grid> {
    let mut grid = Grid::new(height, width)?;
    known.pattern().place_on_grid(&mut grid, row, col);
    Ok(grid)
}

fn print_generation<W: Write>(out: &mut W, grid: &Grid, generation: usize) -> Result<()> {
    writeln!(out, "Generation {}:", generation)?;
    write!(out, "{}", grid.render_text())?;
    Ok(())
}

fn demo_still_lifes<W: Write>(out: &mut W, failures: &mut Vec<String>) -> Result<()> {
    section(out, "STILL LIFES (never change)")?;

    for known in KnownPattern::in_category(PatternCategory::StillLife) {
        let mut grid = seeded(known, 20, 20, 8, 8)?;
        let behavior = classify(&grid, 1);

        writeln!(out, "→ {}", known)?;
        print_generation(out, &grid, 0)?;
        grid.next_generation();
        print_generation(out, &grid, 1)?;
        check(out, failures, known.name(), behavior == Behavior::StillLife, "is stable")?;
    }
    Ok(())
}

fn demo_oscillators<W: Write>(out: &mut W, failures: &mut Vec<String>) -> Result<()> {
    section(out, "OSCILLATORS (repeat in cycles)")?;

    let placements = [
        (KnownPattern::Blinker, 15, 15, 6, 6),
        (KnownPattern::Toad, 15, 15, 6, 6),
        (KnownPattern::Beacon, 15, 15, 6, 6),
        (KnownPattern::Pulsar, 20, 20, 3, 3),
        (KnownPattern::Pentadecathlon, 20, 20, 5, 7),
    ];

    for (known, height, width, row, col) in placements {
        let mut grid = seeded(known, height, width, row, col)?;
        let period = find_period(&grid, known.period());

        writeln!(out, "→ {} (period {})", known, known.period())?;
        // show a handful of evenly spaced phases of the cycle
        let stride = (known.period() / 3).max(1);
        for generation in 0..=known.period() {
            if generation % stride == 0 || generation == known.period() {
                print_generation(out, &grid, generation)?;
            }
            grid.next_generation();
        }
        check(
            out,
            failures,
            known.name(),
            period == Some(known.period()),
            &format!("repeats after {} generations", known.period()),
        )?;
    }
    Ok(())
}

fn demo_spaceships<W: Write>(out: &mut W, failures: &mut Vec<String>) -> Result<()> {
    section(out, "SPACESHIPS (move across the grid)")?;

    let placements = [
        (KnownPattern::Glider, 2, 2, (1, 1)),
        (KnownPattern::LightweightSpaceship, 8, 10, (0, -2)),
        (KnownPattern::MiddleweightSpaceship, 8, 10, (0, -2)),
        (KnownPattern::HeavyweightSpaceship, 8, 10, (0, -2)),
    ];

    for (known, row, col, (row_shift, col_shift)) in placements {
        let mut grid = seeded(known, 20, 20, row, col)?;
        let behavior = classify(&grid, known.period());

        writeln!(out, "→ {}", known)?;
        print_generation(out, &grid, 0)?;
        for _ in 0..known.period() {
            grid.next_generation();
        }
        print_generation(out, &grid, known.period())?;

        let expected = Behavior::Spaceship {
            period: known.period(),
            row_shift,
            col_shift,
        };
        check(out, failures, known.name(), behavior == expected, &format!("is a {}", expected))?;
    }
    Ok(())
}

fn demo_glider_gun<W: Write>(out: &mut W, failures: &mut Vec<String>) -> Result<()> {
    section(out, "GLIDER GUN (emits gliders forever)")?;

    let known = KnownPattern::GosperGliderGun;
    let initial = seeded(known, 50, 50, 20, 5)?;
    let mut grid = initial.clone();

    writeln!(out, "→ {} (period {})", known, known.period())?;
    print_generation(out, &grid, 0)?;
    for _ in 0..known.period() {
        grid.next_generation();
    }
    print_generation(out, &grid, known.period())?;

    let kept = initial.live_cells().into_iter().all(|(row, col)| {
        grid.get_cell(row, col).is_ok_and(|cell| cell.is_alive())
    });
    let glider = KnownPattern::Glider.pattern().live_cells().len();
    let emitted = grid.living_count() == initial.living_count() + glider;
    check(out, failures, known.name(), kept && emitted, "keeps its body and releases one glider")
}

fn demo_random<W: Write>(out: &mut W, seed: Option<u64>) -> Result<()> {
    section(out, "RANDOM EVOLUTION")?;

    let mut grid = Grid::new(15, 15)?;
    match seed {
        Some(seed) => grid.randomize_with(Grid::DEFAULT_DENSITY, &mut StdRng::seed_from_u64(seed))?,
        None => grid.randomize_default(),
    }

    writeln!(out, "Random starting configuration:")?;
    print_generation(out, &grid, 0)?;
    for generation in 1..=5 {
        grid.next_generation();
        print_generation(out, &grid, generation)?;
    }
    writeln!(out)?;
    Ok(())
}
