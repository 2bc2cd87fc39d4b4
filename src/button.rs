use std::{
    sync::atomic::{AtomicBool, Ordering},
    sync::Arc,
    thread::JoinHandle,
    time::Duration,
};

use anyhow::Context;
use rppal::gpio::{Gpio, Trigger};
use tracing::info;

/// BCM pins of the PIR motion sensors.
const MOTION_PINS: [u8; 3] = [10, 20, 21];
/// BCM pin of the indicator LED.
const LED_PIN: u8 = 12;

const LED_HOLD: Duration = Duration::from_secs(2);
const POLL_TIMEOUT: Duration = Duration::from_millis(200);

/// Watches the PIR inputs and holds the LED high for a couple of seconds
/// whenever one of them fires.
///
/// The interrupt callbacks run on rppal's own threads; they hand the pin
/// number over a bounded channel so all the actual handling happens on
/// this thread.
pub fn spawn_thread(running: Arc<AtomicBool>) -> JoinHandle<anyhow::Result<()>> {
    std::thread::spawn(move || {
        let gpio = Gpio::new().context("failed to open gpio")?;
        let mut led = gpio
            .get(LED_PIN)
            .context("failed to claim led pin")?
            .into_output();

        let (motion_tx, motion_rx) = flume::bounded::<u8>(16);

        let mut pins = Vec::new();
        for bcm in MOTION_PINS {
            let mut pin = gpio
                .get(bcm)
                .with_context(|| format!("failed to claim motion pin {bcm}"))?
                .into_input();

            let tx = motion_tx.clone();
            pin.set_async_interrupt(Trigger::RisingEdge, move |_| {
                // drop the event if the queue is full, the next edge will
                // come around soon enough
                let _ = tx.try_send(bcm);
            })
            .with_context(|| format!("failed to arm interrupt on pin {bcm}"))?;

            pins.push(pin);
        }
        drop(motion_tx);

        while running.load(Ordering::SeqCst) {
            match motion_rx.recv_timeout(POLL_TIMEOUT) {
                Ok(bcm) => {
                    info!("motion detected on gpio {bcm}");
                    led.set_high();
                    std::thread::sleep(LED_HOLD);
                    led.set_low();
                    info!("motion stopped");
                }
                Err(flume::RecvTimeoutError::Timeout) => {}
                Err(flume::RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(())
    })
}
