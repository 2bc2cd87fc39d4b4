use std::{thread::JoinHandle, time::Duration};

use anyhow::Context;
use rumqttc::{Client, MqttOptions, QoS};
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::sensor::Sample;

pub const X_TOPIC: &str = "acc/x";
pub const Y_TOPIC: &str = "acc/y";
pub const Z_TOPIC: &str = "acc/z";

const KEEPALIVE: Duration = Duration::from_secs(60);

/// Each axis goes out as a plain decimal string on its own topic, in
/// X, Y, Z order.
fn payloads(sample: &Sample) -> [(&'static str, String); 3] {
    [
        (X_TOPIC, sample.x.to_string()),
        (Y_TOPIC, sample.y.to_string()),
        (Z_TOPIC, sample.z.to_string()),
    ]
}

pub fn spawn_thread(
    config: &Config,
    sample_rx: flume::Receiver<Sample>,
) -> JoinHandle<anyhow::Result<()>> {
    let config = config.clone();

    std::thread::spawn(move || {
        let mut options = MqttOptions::new(&config.device_id, &config.broker, config.port);
        options.set_keep_alive(KEEPALIVE);
        let (client, mut connection) = Client::new(options, 16);

        // The client only makes progress while its connection is polled.
        let poller = std::thread::spawn(move || {
            for event in connection.iter() {
                match event {
                    Ok(event) => trace!("mqtt event: {event:?}"),
                    Err(err) => {
                        warn!("mqtt connection error: {err}");
                        break;
                    }
                }
            }
        });

        for sample in sample_rx.iter() {
            debug!(
                "publishing sample x={:.5} y={:.5} z={:.5}",
                sample.x, sample.y, sample.z
            );

            for (topic, payload) in payloads(&sample) {
                client
                    .publish(topic, QoS::AtMostOnce, false, payload)
                    .context("failed to queue mqtt publish")?;
            }
        }

        let _ = client.disconnect();
        let _ = poller.join();

        Ok(())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_text_message_per_axis() {
        let sample = Sample {
            x: 0.0,
            y: 9.80665,
            z: -0.25,
        };

        let [(xt, xp), (yt, yp), (zt, zp)] = payloads(&sample);
        assert_eq!((xt, xp.as_str()), ("acc/x", "0"));
        assert_eq!((yt, yp.as_str()), ("acc/y", "9.80665"));
        assert_eq!((zt, zp.as_str()), ("acc/z", "-0.25"));
    }
}
