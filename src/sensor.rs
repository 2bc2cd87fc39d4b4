use std::{
    sync::atomic::{AtomicBool, Ordering},
    sync::Arc,
    thread::JoinHandle,
    time::Duration,
};

use anyhow::Context;
use rppal::i2c::I2c;
use tracing::{info, trace};

use crate::driver::qst::qma7981::{FullScale, Qma7981, DEFAULT_ADDRESS, SF_M_S2};
use crate::util::Interval;

/// One converted acceleration sample in m/s².
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

const SAMPLE_PERIOD: Duration = Duration::from_millis(50);

struct Delay;

impl embedded_hal::blocking::delay::DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64))
    }
}

pub fn spawn_thread(
    running: Arc<AtomicBool>,
    sample_tx: flume::Sender<Sample>,
) -> JoinHandle<anyhow::Result<()>> {
    std::thread::spawn(move || {
        let i2c = I2c::new().context("failed to open i2c bus")?;
        let mut delay = Delay;
        let mut accel = Qma7981::new(i2c, DEFAULT_ADDRESS, FullScale::G2, SF_M_S2, &mut delay)
            .context("failed to bring up qma7981")?;

        info!(
            "qma7981 id: {:#04x}",
            accel.whoami().context("failed to read chip id")?
        );

        let mut interval = Interval::new(SAMPLE_PERIOD);

        while running.load(Ordering::SeqCst) {
            interval.tick();

            let (x, y, z) = accel
                .acceleration()
                .context("failed to sample acceleration")?;
            trace!("sample x={x:.5} y={y:.5} z={z:.5}");

            if sample_tx.send(Sample { x, y, z }).is_err() {
                // publisher went away, nothing left to feed
                break;
            }
        }

        Ok(())
    })
}
