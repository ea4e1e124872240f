mod app;
mod config;
mod presentation;
mod views;
mod widgets;

use std::fs::File;
use std::io;

use clap::Parser;
use player::PlayerError;
use simplelog::{Config, WriteLogger};

use app::App;
use config::Args;

fn main() -> Result<(), PlayerError> {
    let args = Args::parse();
    init_logging(&args)?;
    log::info!("Starting player with {:?}", args);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut app = App::new(&args)?;
        let mut terminal = ratatui::init();
        let app_result = app.run(&mut terminal).await;
        ratatui::restore();

        if let Err(e) = &app_result {
            log::error!("Player stopped with error: {}", e);
        }
        app_result
    })
}

fn init_logging(args: &Args) -> io::Result<()> {
    let file = File::create(&args.log_file)?;
    WriteLogger::init(args.log_level.into(), Config::default(), file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}
