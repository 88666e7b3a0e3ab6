//! Command line front end for the bounded Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_grid::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::{ScriptStep, Session},
    game_of_life::{Grid, Pattern},
    utils::{ColorOutput, GenerationReport, GridFormatter},
};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_grid")]
#[command(about = "Bounded Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a grid and advance it a fixed number of generations
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

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Named seed pattern
        #[arg(short, long)]
        pattern: Option<Pattern>,

        /// Top-left corner for the pattern
        #[arg(long, num_args = 2, value_names = ["X", "Y"], default_values_t = [0, 0], allow_negative_numbers = true)]
        at: Vec<isize>,

        /// Extra live cell as X,Y (repeatable)
        #[arg(short, long, value_parser = parse_coord, allow_hyphen_values = true)]
        alive: Vec<(isize, isize)>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Replay driver events (space, escape, quit, frame, click X Y)
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Event script; reads stdin when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Disable the per-frame advance
        #[arg(long)]
        manual: bool,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the built-in seed patterns
    Patterns,
}

fn parse_coord(s: &str) -> Result<(isize, isize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<isize>()
            .map_err(|e| format!("invalid coordinate '{}': {}", v, e))
    };
    Ok((parse(x)?, parse(y)?))
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            pattern,
            at,
            alive,
            format,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                format,
                ..Default::default()
            };
            run_command(config, overrides, pattern, (at[0], at[1]), alive)
        }
        Commands::Play { config, script, manual } => play_command(config, script, manual),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Patterns => {
            patterns_command();
            Ok(())
        }
    };

    if let Err(err) = result {
        log::error!("{:#}", err);
        eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
        std::process::exit(1);
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    pattern: Option<Pattern>,
    at: (isize, isize),
    alive: Vec<(isize, isize)>,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    let mut grid = Grid::with_alive_cells(settings.grid.width, settings.grid.height, &alive);
    if let Some(pattern) = pattern {
        pattern.place(&mut grid, at.0, at.1);
        log::info!("placed {} at ({}, {})", pattern, at.0, at.1);
    }

    let start_time = Instant::now();
    match settings.output.format {
        OutputFormat::Text => {
            let header = format!(
                "Grid {}x{}, {} alive",
                grid.width(),
                grid.height(),
                grid.living_count()
            );
            println!("{}", ColorOutput::info(&header));
            println!("{}", GridFormatter::format_grid_compact(&grid));

            for _ in 0..settings.simulation.generations {
                let stats = grid.advance();
                println!("{}", GridFormatter::format_stats(&stats));
                println!("{}", GridFormatter::format_grid_compact(&grid));
            }
        }
        OutputFormat::Json => {
            println!("{}", GenerationReport::from_grid(&grid).to_json()?);
            for _ in 0..settings.simulation.generations {
                grid.advance();
                println!("{}", GenerationReport::from_grid(&grid).to_json()?);
            }
        }
    }

    log::info!(
        "advanced {} generations in {:.3}s",
        settings.simulation.generations,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn play_command(config_path: PathBuf, script: Option<PathBuf>, manual: bool) -> Result<()> {
    let overrides = CliOverrides {
        auto_play: manual.then_some(false),
        ..Default::default()
    };
    let settings = load_settings(&config_path, &overrides)?;
    let mut session = Session::new(settings)?;

    let reader: Box<dyn BufRead> = match &script {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    replay(&mut session, reader)?;

    println!("{}", GridFormatter::format_grid_with_coords(session.grid()));
    let summary = format!(
        "{} step(s), {} frame(s), generation {}, {} alive",
        session.iterations(),
        session.frames(),
        session.grid().generation(),
        session.grid().living_count()
    );
    println!("{}", ColorOutput::success(&summary));
    Ok(())
}

/// Apply each script line as soon as it is read. Lines after the session
/// stops are not read.
fn replay<R: BufRead>(session: &mut Session, reader: R) -> Result<()> {
    for (line_no, line) in reader.lines().enumerate() {
        if !session.is_running() {
            break;
        }
        let line = line.context("Failed to read script line")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step: ScriptStep = line
            .parse()
            .with_context(|| format!("Line {}", line_no + 1))?;
        session.apply(step);
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join("config").join("default.yaml");
    if config_path.exists() && !force {
        println!("Skipped: {} (already exists)", config_path.display());
        return Ok(());
    }

    Settings::default()
        .to_file(&config_path)
        .context("Failed to create default configuration")?;
    let created = format!("Created: {}", config_path.display());
    println!("{}", ColorOutput::success(&created));
    Ok(())
}

fn patterns_command() {
    for pattern in Pattern::ALL {
        let (w, h) = pattern.size();
        println!("{:8} {}x{}, {} cells", pattern.name(), w, h, pattern.cells().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_grid",
            "run",
            "--pattern", "glider",
            "--at", "3", "4",
            "--alive", "1,2",
            "--alive", "-1,0",
            "--generations", "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Run { pattern, at, alive, generations, .. } => {
                assert_eq!(pattern, Some(Pattern::Glider));
                assert_eq!(at, vec![3, 4]);
                assert_eq!(alive, vec![(1, 2), (-1, 0)]);
                assert_eq!(generations, Some(5));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_pattern() {
        assert!(Cli::try_parse_from(["life_grid", "run", "--pattern", "spaceship"]).is_err());
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("4, 7"), Ok((4, 7)));
        assert!(parse_coord("4").is_err());
        assert!(parse_coord("x,1").is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let path = temp_dir.path().join("config/default.yaml");
        assert!(path.exists());
        assert_eq!(Settings::from_file(&path).unwrap(), Settings::default());
    }

    fn manual_session() -> Session {
        let mut settings = Settings::default();
        settings.simulation.auto_play = false;
        Session::new(settings).unwrap()
    }

    #[test]
    fn test_play_command_with_script() {
        let temp_dir = tempdir().unwrap();
        let script = temp_dir.path().join("events.txt");
        std::fs::write(&script, "click 15 5\nspace\nescape\n").unwrap();

        let result = play_command(temp_dir.path().join("missing.yaml"), Some(script), true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_replay_steps_blinker() {
        let mut session = manual_session();
        let script = "# blinker\nclick 15 5\nclick 15 15\n\nclick 15 25\nspace\n";

        replay(&mut session, script.as_bytes()).unwrap();

        assert_eq!(session.iterations(), 1);
        assert!(session.is_running());
        assert_eq!(session.grid().living_cells(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_replay_ignores_lines_after_escape() {
        let mut session = manual_session();
        let script = "click 15 15\nescape\nnot an event\nspace\n";

        replay(&mut session, script.as_bytes()).unwrap();

        assert!(!session.is_running());
        assert_eq!(session.iterations(), 0);
        assert_eq!(session.grid().living_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_replay_applies_lines_before_a_bad_one() {
        let mut session = manual_session();
        let err = replay(&mut session, "click 15 15\nbogus\nspace\n".as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("Line 2"));
        assert_eq!(session.grid().living_cells(), vec![(1, 1)]);
        assert_eq!(session.iterations(), 0);
    }
}
