use gridmaze::{
    app::{self, Options},
    logging,
    settings::Settings,
    Error,
};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about, name = "gridmaze")]
struct Args {
    #[clap(long, help = "Maze width in cells, odd values work best")]
    width: Option<usize>,
    #[clap(long, help = "Maze height in cells, odd values work best")]
    height: Option<usize>,
    #[clap(short, long, help = "Seed for the maze generator, random if not set")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "List every path found")]
    all_paths: bool,
    #[clap(long, action, help = "Only generate, don't look for a path")]
    no_solve: bool,
    #[clap(long, action, help = "Draw with plain ASCII characters")]
    plain: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for even more")]
    verbose: u8,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose))?;

    if args.reset_config {
        Settings::reset_config(&Settings::default_path()?)?;
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = Settings::default_path()?;
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&Settings::default_path()?)?);
        return Ok(());
    }

    better_panic::install();

    let mut settings = match Settings::default_path() {
        Ok(path) => Settings::load(&path)?,
        Err(err) => {
            log::warn!("{}, using default settings", err);
            Settings::default()
        }
    };

    if let Some(width) = args.width {
        settings = settings.set_width(width);
    }
    if let Some(height) = args.height {
        settings = settings.set_height(height);
    }
    if args.all_paths {
        settings = settings.set_show_all_paths(true);
    }
    if args.plain {
        settings = settings.set_plain(true);
    }

    let mut opts = Options::from_settings(&settings);
    opts.seed = args.seed;
    opts.solve = !args.no_solve;

    app::run(&opts, &mut std::io::stdout().lock())?;

    Ok(())
}
