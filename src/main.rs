use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

mod config;
mod datasources;
mod date;
mod widget;

use config::Config;
use datasources::{DolarApiRateDataSource, RateDataSource};
use widget::{load_image, resource_path, Refresher, IMAGE_ASSET};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    info!("Starting with {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = Arc::new(config.http_client()?);
    let source: Arc<dyn RateDataSource> =
        Arc::new(DolarApiRateDataSource::new(client, config.api_url.clone()));

    let locale = date::resolve_locale(&config.locale);
    let today = date::format_today(locale);

    let image_path = resource_path(IMAGE_ASSET, config.resource_dir.as_deref());
    let image = match load_image(&image_path) {
        Ok(image) => Some(image),
        Err(e) => {
            error!("{:#}", e);
            None
        }
    };

    widget::run(Refresher::new(source, runtime.handle().clone()), today, image)
}
