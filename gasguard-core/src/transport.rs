//! Sensor Transport Seam
//!
//! The algorithm never talks to hardware. Firmware owns the bus, the
//! conditioning sequence and the heater; it only needs to hand over one raw
//! VOC and one raw NOx tick per interval. [`SensorTransport`] is that
//! boundary, and [`GasIndexPair`] drives both algorithms from one read the
//! way dual-channel sensors are normally polled.
//!
//! ```rust
//! use gasguard_core::{Compensation, GasIndexPair, RawSignals, SensorTransport};
//!
//! struct FixedSensor;
//!
//! impl SensorTransport for FixedSensor {
//!     type Error = ();
//!
//!     fn read_raw(&mut self, _: Option<Compensation>) -> Result<RawSignals, ()> {
//!         Ok(RawSignals { voc: 27_000, nox: 15_000 })
//!     }
//! }
//!
//! let mut pair = GasIndexPair::new();
//! let mut sensor = FixedSensor;
//! let indices = pair.sample(&mut sensor, None).unwrap();
//! assert!(!indices.is_valid()); // still in blackout
//! ```

use crate::algorithm::{AlgorithmType, GasIndexAlgorithm};
use crate::constants::algorithm::INDEX_UNINITIALIZED;
use crate::errors::ConfigResult;

/// Raw humidity/temperature compensation ticks.
///
/// Passed through to the transport untouched. Converting physical units to
/// register ticks is the transport's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compensation {
    /// Relative humidity in sensor ticks
    pub humidity_ticks: u16,
    /// Temperature in sensor ticks
    pub temperature_ticks: u16,
}

/// One raw reading of both channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSignals {
    /// Raw VOC tick
    pub voc: u16,
    /// Raw NOx tick
    pub nox: u16,
}

/// Anything that can produce raw gas ticks
pub trait SensorTransport {
    /// Bus or device error
    type Error;

    /// Trigger one measurement and return the raw ticks.
    ///
    /// `None` measures without humidity/temperature compensation.
    fn read_raw(&mut self, compensation: Option<Compensation>) -> Result<RawSignals, Self::Error>;
}

/// VOC and NOx index from the same sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GasIndices {
    /// VOC index, 0 while uninitialized
    pub voc: u16,
    /// NOx index, 0 while uninitialized
    pub nox: u16,
}

impl GasIndices {
    /// Both channels have left their blackout
    pub fn is_valid(&self) -> bool {
        self.voc != INDEX_UNINITIALIZED && self.nox != INDEX_UNINITIALIZED
    }
}

/// A VOC and a NOx algorithm sharing one sampling interval
#[derive(Debug, Clone)]
pub struct GasIndexPair {
    voc: GasIndexAlgorithm,
    nox: GasIndexAlgorithm,
}

impl Default for GasIndexPair {
    fn default() -> Self {
        Self::new()
    }
}

impl GasIndexPair {
    /// Pair sampled once per second
    pub fn new() -> Self {
        Self {
            voc: GasIndexAlgorithm::new(AlgorithmType::Voc),
            nox: GasIndexAlgorithm::new(AlgorithmType::Nox),
        }
    }

    /// Pair for a custom sampling interval in seconds
    pub fn with_sampling_interval(sampling_interval: f32) -> ConfigResult<Self> {
        Ok(Self {
            voc: GasIndexAlgorithm::with_sampling_interval(AlgorithmType::Voc, sampling_interval)?,
            nox: GasIndexAlgorithm::with_sampling_interval(AlgorithmType::Nox, sampling_interval)?,
        })
    }

    /// Feed one raw reading to both algorithms
    pub fn process(&mut self, raw: RawSignals) -> GasIndices {
        GasIndices {
            voc: self.voc.process(raw.voc),
            nox: self.nox.process(raw.nox),
        }
    }

    /// Read the sensor and process the result.
    ///
    /// On a transport error neither algorithm is touched, so a failed read
    /// costs one missing sample rather than a corrupted baseline.
    pub fn sample<T: SensorTransport>(
        &mut self,
        transport: &mut T,
        compensation: Option<Compensation>,
    ) -> Result<GasIndices, T::Error> {
        let raw = transport.read_raw(compensation)?;
        Ok(self.process(raw))
    }

    /// Reset both algorithms
    pub fn reset(&mut self) {
        self.voc.reset();
        self.nox.reset();
    }

    /// VOC algorithm
    pub fn voc(&self) -> &GasIndexAlgorithm {
        &self.voc
    }

    /// VOC algorithm, for tuning or state restore
    pub fn voc_mut(&mut self) -> &mut GasIndexAlgorithm {
        &mut self.voc
    }

    /// NOx algorithm
    pub fn nox(&self) -> &GasIndexAlgorithm {
        &self.nox
    }

    /// NOx algorithm, for tuning or state restore
    pub fn nox_mut(&mut self) -> &mut GasIndexAlgorithm {
        &mut self.nox
    }
}
