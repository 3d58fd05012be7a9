//! `#![no_std]` driver for the AK7451 12-bit magnetic rotary angle sensor.
//!
//! The driver talks to the sensor through any [`embedded_hal::spi::SpiDevice`].
//! When the application owns the bus and the chip-select pin directly,
//! [`ChipSelectDevice`] provides one that keeps the line high between frames.
//!
//! ```rust,no_run
//! use ak7451::{Ak7451, ChipSelectDevice};
//! # use embedded_hal::{digital::OutputPin, spi::SpiBus};
//! #
//! # fn example<BUS: SpiBus, CS: OutputPin>(bus: BUS, cs: CS) {
//! // `bus` is configured with `ak7451::BUS_CONFIG`: 2 MHz, mode 2, MSB first
//! let Ok(device) = ChipSelectDevice::new(bus, cs) else { return };
//! let mut sensor = Ak7451::new(device);
//! if let Ok(_degrees) = sensor.read_angle() {
//!     // 0.0 <= degrees < 360.0
//! }
//! # }
//! ```
#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod config;
mod device;
mod driver;
mod error;
mod register;
mod utils;

pub use config::{BUS_CONFIG, BitOrder, BusConfig};
pub use device::ChipSelectDevice;
pub use driver::{Ak7451, Angle};
pub use error::{DeviceError, Error};
pub use register::{AngleRegister, Command, Opcode, Register};
pub use utils::ANGLE_RESOLUTION;
