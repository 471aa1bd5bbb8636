use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{
    filter::FilterFn,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod checks;
mod http;
mod service;

use common::config::read_config;
use service::SiteService;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/portfolio/config.toml")]
    config: PathBuf,

    #[arg(short, long, default_value_t = Level::INFO)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // hyper and h2 are far too chatty at debug
    let max_level = args.log_level;
    let crate_filter = FilterFn::new(move |metadata| {
        let target = metadata.target();
        *metadata.level() <= max_level && !target.starts_with("hyper") && !target.starts_with("h2")
    });

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(crate_filter))
        .init();

    info!("portfolio server starting up, processing config file");

    let config = read_config(args.config).await?;

    info!("performing filesystem sanity checks");

    checks::check_roots(&config);

    info!("starting http service");

    let http_svc = http::svc::HttpService::create(config.clone());

    http_svc.start().await?;

    info!("startup complete!");

    tokio::select! {
        result = http_svc.wait() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl-c, shutting down");
            Ok(())
        }
    }
}
