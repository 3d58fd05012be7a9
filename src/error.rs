use embedded_hal::spi::{self, ErrorKind};

/// Error type for AK7451 operations
///
/// Response bytes are not validated, so only failures reported by the bus
/// itself show up here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the sensor
    Communication(E),
}

/// Error type for [`ChipSelectDevice`](crate::ChipSelectDevice)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError<BUS, CS> {
    /// Error from the SPI bus
    Spi(BUS),
    /// The chip-select line could not be driven
    ChipSelect(CS),
    /// A delay operation was requested but the device owns no delay provider
    DelayNotSupported,
}

impl<BUS, CS> spi::Error for DeviceError<BUS, CS>
where
    BUS: spi::Error,
    CS: core::fmt::Debug,
{
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Spi(e) => e.kind(),
            Self::ChipSelect(_) => ErrorKind::ChipSelectFault,
            Self::DelayNotSupported => ErrorKind::Other,
        }
    }
}
