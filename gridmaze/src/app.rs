use std::io::Write;

use cgrid::{Maze, Random};
use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{
    render::{format_path, Renderer},
    settings::{ColorScheme, Settings},
    Error,
};

/// Everything a single run needs, settings with command line overrides applied.
#[derive(Debug, Clone)]
pub struct Options {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub solve: bool,
    pub all_paths: bool,
    pub plain: bool,
    pub color_scheme: ColorScheme,
}

impl Options {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.get_width(),
            height: settings.get_height(),
            seed: None,
            solve: true,
            all_paths: settings.get_show_all_paths(),
            plain: settings.get_plain(),
            color_scheme: settings.get_color_scheme(),
        }
    }
}

/// What a run produced, mostly for tests.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub seed: u64,
    pub maze: Maze,
    pub path_count: usize,
}

/// Generates one maze, solves it and writes it to `out`.
pub fn run(opts: &Options, out: &mut impl Write) -> Result<Outcome, Error> {
    let seed = opts.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!("Seed: {}", seed);

    let mut rng = Random::seed_from_u64(seed);
    let maze = Maze::generate(opts.height, opts.width, &mut rng)?;

    let paths = if opts.solve { maze.solve() } else { Vec::new() };
    let renderer = Renderer::new(opts.color_scheme.clone(), opts.plain);

    writeln!(out, "Seed: {}", seed)?;
    write!(out, "{}", renderer.render(&maze, paths.first()))?;

    if opts.solve {
        if paths.is_empty() {
            writeln!(out, "No solution found!")?;
        } else {
            writeln!(out, "Maze solved! {} path(s) found", paths.len())?;
        }

        if opts.all_paths {
            for (i, path) in paths.iter().enumerate() {
                writeln!(out, "{}: {}", i + 1, format_path(path))?;
            }
        }
    }

    Ok(Outcome {
        seed,
        path_count: paths.len(),
        maze,
    })
}
