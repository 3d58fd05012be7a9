//! SPI bus settings required by the AK7451.

use embedded_hal::spi::{MODE_2, Mode};

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// SPI bus configuration
///
/// `embedded-hal` buses cannot be reconfigured at runtime, so these values
/// are applied by the application when it sets up its HAL SPI peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Bit order
    pub bit_order: BitOrder,
}

/// Settings the AK7451 expects: 2 MHz, MSB first, mode 2 (CPOL=1, CPHA=0)
pub const BUS_CONFIG: BusConfig = BusConfig {
    frequency_hz: 2_000_000,
    mode: MODE_2,
    bit_order: BitOrder::MsbFirst,
};

impl Default for BusConfig {
    fn default() -> Self {
        BUS_CONFIG
    }
}
