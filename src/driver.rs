//! Synchronous driver for the AK7451 magnetic angle sensor

use embedded_hal::spi::{Operation, SpiDevice};

use crate::{
    error::Error,
    register::{Command, Opcode, Register},
    utils,
};

const DUMMY_BYTE: u8 = 0x00;

/// One masked angle reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle {
    raw: u16,
}

impl Angle {
    /// Create an angle from a raw register value, discarding bits 12-15
    #[must_use]
    pub fn from_raw(raw: u16) -> Self {
        Self {
            raw: utils::mask_angle(raw),
        }
    }

    /// 12-bit angle count (0-4095)
    #[must_use]
    pub const fn raw(&self) -> u16 {
        self.raw
    }

    /// Angle in degrees, `0.0 <= degrees < 360.0`
    #[must_use]
    pub fn degrees(&self) -> f32 {
        utils::counts_to_degrees(self.raw)
    }
}

/// AK7451 driver instance
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ak7451<SPI> {
    spi: SPI,
    last_angle: Option<Angle>,
}

impl<SPI, E> Ak7451<SPI>
where
    SPI: SpiDevice<u8, Error = E>,
{
    /// Create a new AK7451 driver instance
    ///
    /// `spi` must already be configured with [`BUS_CONFIG`](crate::BUS_CONFIG) and own the
    /// sensor's chip-select line.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            last_angle: None,
        }
    }

    /// Release the SPI device, consuming the driver
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Issue one command frame and return the 16-bit response
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails
    pub fn read_data(&mut self, opcode: Opcode, register: Register) -> Result<u16, Error<E>> {
        self.exchange(Command::from_parts(opcode, register))
    }

    /// Issue a prebuilt command frame and return the 16-bit response
    ///
    /// The byte clocked in alongside the command is discarded. The response
    /// is not checked, so a missing sensor reads back as whatever the idle
    /// MISO line produces.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails
    pub fn exchange(&mut self, command: Command) -> Result<u16, Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Sending command 0x{:02X}", command.bits());

        let mut frame = [command.into(), DUMMY_BYTE, DUMMY_BYTE];
        self.spi
            .transaction(&mut [Operation::TransferInPlace(&mut frame)])
            .map_err(Error::Communication)?;

        let response = utils::assemble_response(frame[1], frame[2]);

        #[cfg(feature = "defmt")]
        defmt::trace!("Received response: 0x{:04X}", response);

        Ok(response)
    }

    /// Read the 12-bit angle
    ///
    /// The reading is kept and available from [`Self::last_angle`].
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails
    pub fn angle(&mut self) -> Result<Angle, Error<E>> {
        let raw = self.read_data(Opcode::ReadAngle, Register::Ang)?;
        let angle = Angle::from_raw(raw);

        #[cfg(feature = "defmt")]
        defmt::debug!("Angle count: {}", angle.raw());

        self.last_angle = Some(angle);
        Ok(angle)
    }

    /// Read the angle in degrees (`0.0 <= degrees < 360.0`)
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails
    pub fn read_angle(&mut self) -> Result<f32, Error<E>> {
        self.angle().map(|angle| angle.degrees())
    }

    /// Most recent angle reading, if any
    #[must_use]
    pub const fn last_angle(&self) -> Option<Angle> {
        self.last_angle
    }

    /// Masked count of the most recent angle reading, if any
    #[must_use]
    pub fn raw_angle(&self) -> Option<u16> {
        self.last_angle.map(|angle| angle.raw())
    }
}
