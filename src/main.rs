use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tracing::info;
use tracing_subscriber::EnvFilter;

mod button;
mod config;
mod driver;
mod sensor;
mod telemetry;
mod util;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config::load("config.json")?;
    info!(
        "starting as {:?}, provisioned for network {:?}",
        config.device_id, config.ssid
    );

    let running = Arc::new(AtomicBool::new(true));

    ctrlc::set_handler({
        let running = running.clone();
        move || {
            info!("received ctrl+c, exiting");
            running.store(false, Ordering::SeqCst);
        }
    })?;

    let (sample_tx, sample_rx) = flume::bounded(256);

    let sensor_join = sensor::spawn_thread(running.clone(), sample_tx);
    let telemetry_join = telemetry::spawn_thread(&config, sample_rx);
    let button_join = button::spawn_thread(running);

    sensor_join.join().unwrap()?;
    telemetry_join.join().unwrap()?;
    button_join.join().unwrap()?;

    info!("exit");

    Ok(())
}
