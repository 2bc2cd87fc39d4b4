//! I2C driver for the QST QMA7981 accelerometer.
//!
//! The device speaks a plain byte-register protocol: single-byte control
//! registers, and the three axes as signed 16-bit big-endian pairs that
//! must be read in one bus transaction so all axes come from the same
//! sampling instant.

use embedded_hal::blocking::{
    delay::DelayMs,
    i2c::{Write, WriteRead},
};
use thiserror::Error;
use tracing::debug;

pub mod registers;

/// Default 7-bit bus address of the QMA7981.
pub const DEFAULT_ADDRESS: u8 = 0x12;

/// Scale factor that leaves converted samples in units of g.
pub const SF_G: f64 = 1.0;
/// Standard gravity; converts samples to m/s².
pub const SF_M_S2: f64 = 9.80665;

/// Chip ids the WHOAMI register may report for this part.
const CHIP_IDS: [u8; 2] = [0xE7, 0xE8];

/// POWER_CTL values for the wake/reset handshake, in write order.
const POWER_CTL_WAKE: u8 = 0x40;
const POWER_CTL_ACTIVE: u8 = 0x80;
/// Settle time after each POWER_CTL write.
const RESET_SETTLE_MS: u32 = 100;

#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("i2c transport error: {0:?}")]
    Transport(E),
    #[error("no qma7981 on the bus (chip id {0:#04x})")]
    DeviceNotFound(u8),
    #[error("full-scale range {0:?} has no raw-to-g divisor")]
    UnsupportedRange(FullScale),
}

/// Full-scale range selector.
///
/// `G32` is a valid selector bit pattern on the part but the conversion
/// table stops at ±16g, so requesting it fails at construction instead of
/// dividing by an undefined sensitivity later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScale {
    G2,
    G4,
    G8,
    G16,
    G32,
}

impl FullScale {
    /// Selector bit pattern, as encoded by the RANGE register.
    pub const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b0001,
            Self::G4 => 0b0010,
            Self::G8 => 0b0100,
            Self::G16 => 0b1000,
            Self::G32 => 0b1111,
        }
    }

    /// Sensitivity divisor in LSB/g, if one is defined for this range.
    pub const fn lsb_per_g(self) -> Option<f64> {
        match self {
            Self::G2 => Some(16384.0),
            Self::G4 => Some(8192.0),
            Self::G8 => Some(4096.0),
            Self::G16 => Some(2048.0),
            Self::G32 => None,
        }
    }
}

/// Handle to a QMA7981 on an I2C bus.
///
/// The handle owns the bus endpoint and its address for its whole
/// lifetime; the sensitivity divisor and output scale factor are fixed at
/// construction.
pub struct Qma7981<I2C> {
    i2c: I2C,
    address: u8,
    lsb_per_g: f64,
    scale_factor: f64,
}

impl<I2C, E> Qma7981<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
{
    /// Bring up a QMA7981 at `address`.
    ///
    /// Reads WHOAMI and fails with [`Error::DeviceNotFound`] before any
    /// other bus traffic if the id is not one this driver knows. Then runs
    /// the wake/reset handshake (two POWER_CTL writes, 100 ms settle
    /// each) and finally fixes the sensitivity divisor for `range`.
    pub fn new<D>(
        i2c: I2C,
        address: u8,
        range: FullScale,
        scale_factor: f64,
        delay: &mut D,
    ) -> Result<Self, Error<E>>
    where
        D: DelayMs<u32>,
    {
        // The divisor stays unset until the handshake has completed.
        let mut dev = Self {
            i2c,
            address,
            lsb_per_g: 0.0,
            scale_factor,
        };

        let id = dev.whoami()?;
        if !CHIP_IDS.contains(&id) {
            return Err(Error::DeviceNotFound(id));
        }

        dev.write_register(registers::POWER_CTL, POWER_CTL_WAKE)?;
        delay.delay_ms(RESET_SETTLE_MS);
        dev.write_register(registers::POWER_CTL, POWER_CTL_ACTIVE)?;
        delay.delay_ms(RESET_SETTLE_MS);

        dev.lsb_per_g = range.lsb_per_g().ok_or(Error::UnsupportedRange(range))?;

        debug!(
            "qma7981 at {address:#04x} ready, chip id {id:#04x}, {} lsb/g",
            dev.lsb_per_g
        );

        Ok(dev)
    }

    /// Value of the WHOAMI register.
    pub fn whoami(&mut self) -> Result<u8, Error<E>> {
        self.read_register(registers::WHO_AM_I)
    }

    /// One acceleration sample as an `(x, y, z)` triple in the unit
    /// selected by the scale factor (m/s² for [`SF_M_S2`], g for
    /// [`SF_G`]).
    ///
    /// All six axis bytes are fetched in a single bus transaction; three
    /// independent reads could straddle the device's internal sampling
    /// and mix axes from different instants.
    pub fn acceleration(&mut self) -> Result<(f64, f64, f64), Error<E>> {
        let mut buf = [0u8; 6];
        self.read_block(registers::ACCEL_XOUT_L, &mut buf)?;

        let x = i16::from_be_bytes([buf[0], buf[1]]);
        let y = i16::from_be_bytes([buf[2], buf[3]]);
        let z = i16::from_be_bytes([buf[4], buf[5]]);

        Ok((
            f64::from(x) / self.lsb_per_g * self.scale_factor,
            f64::from(y) / self.lsb_per_g * self.scale_factor,
            f64::from(z) / self.lsb_per_g * self.scale_factor,
        ))
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(Error::Transport)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::Transport)
    }

    fn read_block(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[register], buf)
            .map_err(Error::Transport)
    }
}
