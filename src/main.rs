//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    config::{CliOverrides, Settings},
    console::{Console, ConsoleCommand},
    engine::{io, Grid, Pattern},
    session::Session,
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "life-sim")]
#[command(about = "Interactive Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Ticks per second, 10-24 (overrides config)
        #[arg(short, long)]
        tps: Option<u32>,

        /// Save file path (overrides config)
        #[arg(short, long)]
        save_file: Option<PathBuf>,

        /// Start from a previously saved grid instead of the menu
        #[arg(short, long)]
        load: Option<PathBuf>,
    },

    /// Evolve a grid headlessly and print the result
    Step {
        /// Grid file to start from: a JSON save file, or a plaintext
        /// '1'/'0' pattern when the extension is .txt
        #[arg(short, long, conflicts_with = "pattern")]
        input: Option<PathBuf>,

        /// Built-in pattern to start from (glider, blinker, toad, block, beacon)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Save the evolved grid here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every intermediate generation
        #[arg(long)]
        show_evolution: bool,

        /// Print grids with coordinate labels
        #[arg(long)]
        coords: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            tps,
            save_file,
            load,
        } => run_command(config, width, height, tps, save_file, load),
        Commands::Step {
            input,
            pattern,
            generations,
            output,
            show_evolution,
            coords,
        } => step_command(input, pattern, generations, output, show_evolution, coords),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    width: Option<usize>,
    height: Option<usize>,
    tps: Option<u32>,
    save_file: Option<PathBuf>,
    load: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        width,
        height,
        ticks_per_second: tps,
        save_file,
    });
    settings.validate().context("Configuration validation failed")?;

    let mut session = Session::new(settings.simulation.ticks_per_second);
    if let Some(path) = load {
        session.load(&path).context("Failed to load initial grid")?;
    }

    let mut console = Console::new()?;
    console.update_status(&session);

    let mut last_step = Instant::now();
    loop {
        while let Some(cmd) = console.poll_input(&mut session, &settings)? {
            if let ConsoleCommand::Exit = cmd {
                return Ok(());
            }
        }

        let interval = Duration::from_secs(1) / session.ticks_per_second();
        if last_step.elapsed() >= interval {
            if session.tick() {
                console.update_status(&session);
            }
            last_step = Instant::now();
        }

        console.render(&session)?;
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// Read a starting grid: '.txt' files are plaintext patterns (the format
/// `setup` writes), anything else is a JSON save file.
fn load_input_grid(path: &PathBuf) -> Result<Grid> {
    let grid = if path.extension().is_some_and(|ext| ext == "txt") {
        io::load_plaintext(path)?
    } else {
        Grid::load(path)?
    };
    Ok(grid)
}

fn step_command(
    input: Option<PathBuf>,
    pattern: Option<String>,
    generations: usize,
    output: Option<PathBuf>,
    show_evolution: bool,
    coords: bool,
) -> Result<()> {
    let mut grid = match (&input, &pattern) {
        (Some(path), _) => load_input_grid(path)
            .with_context(|| format!("Failed to load grid from {}", path.display()))?,
        (None, Some(name)) => {
            let pattern = Pattern::builtin(name).with_context(|| {
                format!(
                    "Unknown pattern '{}'; available: {}",
                    name,
                    Pattern::builtin_names().join(", ")
                )
            })?;
            // pad with a margin so the pattern has room to evolve
            let mut grid = Grid::new(pattern.width() + 4, pattern.height() + 4)?;
            pattern.stamp(&mut grid, 2, 2)?;
            grid
        }
        (None, None) => anyhow::bail!("Either --input or --pattern is required"),
    };

    let render = |grid: &Grid| {
        if coords {
            GridFormatter::format_with_coords(grid)
        } else {
            GridFormatter::format_compact(grid)
        }
    };

    println!("Initial state ({}):", GridFormatter::format_summary(&grid));
    println!("{}", render(&grid));

    if show_evolution {
        for generation in 1..=generations {
            grid.step();
            println!("Generation {generation}:");
            println!("{}", render(&grid));
        }
    } else {
        grid.step_generations(generations);
        println!("After {} generation(s) ({}):", generations, GridFormatter::format_summary(&grid));
        println!("{}", render(&grid));
    }

    if let Some(path) = output {
        grid.save(&path)
            .with_context(|| format!("Failed to save grid to {}", path.display()))?;
        println!(
            "{}",
            ColorOutput::success(&format!("Saved evolved grid to {}", path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    for pattern in Pattern::builtins() {
        let path = patterns_dir.join(format!("{}.txt", pattern.name));
        if path.exists() && !force {
            println!("Skipped: {} (already exists)", path.display());
            continue;
        }
        let content = io::to_plaintext(&pattern.to_grid()?);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Created: {}", path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());
    println!("3. Or headless: cargo run -- step --pattern glider --generations 4");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life-sim",
            "run",
            "--config",
            "test.yaml",
            "--width",
            "50",
            "--tps",
            "12",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["life-sim", "step", "--pattern", "glider", "--coords"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_step_rejects_both_sources() {
        let cli = Cli::try_parse_from([
            "life-sim",
            "step",
            "--input",
            "a.json",
            "--pattern",
            "glider",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
        assert!(temp_dir.path().join("patterns/blinker.txt").exists());
    }

    #[test]
    fn test_step_command_headless() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("evolved.json");

        step_command(None, Some("blinker".to_string()), 2, Some(output.clone()), false, false)
            .unwrap();

        // Blinker has period 2, so two generations reproduce the seed
        let evolved = Grid::load(&output).unwrap();
        assert_eq!(evolved.live_count(), 3);
    }

    #[test]
    fn test_step_command_reads_pattern_file() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("blinker.txt");
        std::fs::write(&input, "000\n111\n000\n").unwrap();
        let output = temp_dir.path().join("evolved.json");

        step_command(Some(input), None, 1, Some(output.clone()), false, false).unwrap();

        let evolved = Grid::load(&output).unwrap();
        assert_eq!(evolved.live_cells(), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_setup_files_feed_step() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let glider = temp_dir.path().join("patterns/glider.txt");
        let loaded = load_input_grid(&glider).unwrap();
        assert_eq!(loaded.live_count(), 5);
    }
}
