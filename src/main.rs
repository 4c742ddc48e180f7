use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info};
use reqwest::blocking::Client;

use xkcd_downloader::{
    client::XkcdClient, config::Config, database::Database, download::Downloader, sync::sync,
    Result,
};

/// Downloads every xkcd comic image that is not saved locally yet.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Where the local info is stored, like what has been pulled from the api
    /// [default: ~/.xkcd_downloader.db]
    #[arg(long = "db", value_name = "PATH")]
    db: Option<PathBuf>,

    /// Where the comic images are saved to [default: ~/Pictures/xkcd]
    #[arg(long, value_name = "PATH")]
    imgdir: Option<PathBuf>,

    /// Base url of the xkcd json api [default: https://xkcd.com]
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

fn run(args: Args) -> Result<()> {
    let home = dirs::home_dir();
    let cfg = Config::resolve(home.as_deref(), args.db, args.imgdir, args.api_url)?;
    cfg.prepare_image_dir()?;

    let db = Database::open(&cfg.database_path)?;
    info!(
        "DB: {} Local Directory: {}",
        db.path().display(),
        cfg.image_dir.display()
    );

    let http = Client::new();
    let client = XkcdClient::new(http.clone(), &cfg.api_url);
    let downloader = Downloader::new(http);

    let report = sync(&client, &db, &downloader, &cfg.image_dir)?;
    info!(
        "Checked {} comics: {} downloaded, {} already present, {} failed",
        report.visited, report.downloaded, report.already_present, report.download_failures
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
