use anyhow::Context;
use clap::Parser;
use huewheel::WheelConfig;
use relm4::prelude::*;
use std::path::PathBuf;
use tintwheel::config;
use tintwheel::gui::app::{self, AppModel};
use tintwheel::sys::{runtime, server};

#[derive(Parser, Debug)]
#[command(version, about = "Radial hue and shade colour picker", long_about = None)]
struct Args {
    /// Config file to use instead of the platform default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Unix socket accepting `reset`, `hue <n>` and `shade <n>` commands
    #[arg(short, long, default_value = server::DEFAULT_SOCKET_PATH)]
    socket: PathBuf,

    /// Write the default config file (if none exists) and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if args.write_default_config {
        config::write_default_config(&config_path)
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    let wheel_config = WheelConfig::try_from(config.wheel).context("invalid wheel geometry")?;
    let wheel = app::build_wheel(wheel_config)?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone(), args.socket);

    let app = RelmApp::new("org.tintwheel.tintwheel").with_args(Vec::new());

    app.run::<AppModel>((wheel, config_path, rx));
    Ok(())
}
