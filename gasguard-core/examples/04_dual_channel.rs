//! Dual Channel Example
//!
//! Drives a VOC and a NOx algorithm from one mock sensor through the
//! `SensorTransport` seam, the way firmware polls a dual-channel MOx sensor
//! once per second. The VOC baseline is resumed from a previous session and
//! the NOx channel runs a custom offset, both set through the pair.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 04_dual_channel
//! ```

use gasguard_core::{
    AlgorithmType, Compensation, ConfigError, EstimatorState, GasIndexPair, RawSignals,
    SensorTransport, TuningParameters,
};

/// Mock sensor with a gas stove switched on after 20 minutes
struct MockSensor {
    second: u32,
    failures: u32,
}

#[derive(Debug)]
enum MockError {
    CrcMismatch,
}

impl SensorTransport for MockSensor {
    type Error = MockError;

    fn read_raw(&mut self, _compensation: Option<Compensation>) -> Result<RawSignals, MockError> {
        self.second += 1;
        // Every 500th read fails its checksum
        if self.second % 500 == 0 {
            self.failures += 1;
            return Err(MockError::CrcMismatch);
        }

        let stove_on = self.second > 20 * 60;
        Ok(RawSignals {
            voc: if stove_on { 29_000 } else { 27_000 },
            nox: if stove_on { 19_000 } else { 15_500 },
        })
    }
}

fn main() -> Result<(), ConfigError> {
    println!("GasGuard Dual Channel Example");
    println!("=============================\n");

    let mut sensor = MockSensor { second: 0, failures: 0 };
    let mut pair = GasIndexPair::new();

    // Baseline saved before the last power-down: 27000 ticks sit 7000 above
    // the VOC window minimum
    pair.voc_mut().set_states(EstimatorState::from_mean_std(7_000.0, 30.0))?;
    pair.nox_mut().set_tuning_parameters(
        TuningParameters::for_algorithm(AlgorithmType::Nox).with_index_offset(10.0),
    )?;

    // 50 %RH, 25 °C in sensor ticks
    let compensation = Some(Compensation {
        humidity_ticks: 0x8000,
        temperature_ticks: 0x6666,
    });

    for _ in 0..40 * 60 {
        match pair.sample(&mut sensor, compensation) {
            Ok(indices) if sensor.second % 120 == 0 => {
                if indices.is_valid() {
                    println!(
                        "  {:>2} min  VOC {:>3}  NOx {:>3}",
                        sensor.second / 60,
                        indices.voc,
                        indices.nox
                    );
                } else {
                    println!("  {:>2} min  warming up", sensor.second / 60);
                }
            }
            Ok(_) => {}
            Err(e) => println!("  read failed: {:?}, sample skipped", e),
        }
    }

    println!("\n{} failed reads", sensor.failures);
    println!(
        "VOC baseline to persist: mean {:.1}, std {:.1}",
        pair.voc().states().mean(),
        pair.voc().states().std
    );
    Ok(())
}
