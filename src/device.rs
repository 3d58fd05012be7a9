//! Chip-select-gated SPI device
//!
//! Wraps an exclusively owned [`SpiBus`] and its chip-select [`OutputPin`]
//! into an [`SpiDevice`]. The chip-select line idles high and is only held
//! low inside [`SpiDevice::transaction`].

use embedded_hal::{
    digital::OutputPin,
    spi::{ErrorType, Operation, SpiBus, SpiDevice},
};

use crate::error::DeviceError;

/// [`SpiDevice`] over an exclusively owned bus and chip-select pin
///
/// The device owns no delay provider, so [`Operation::DelayNs`] fails the
/// transaction with [`DeviceError::DelayNotSupported`]. Chip-select is still
/// released in that case.
#[derive(Debug)]
pub struct ChipSelectDevice<BUS, CS> {
    bus: BUS,
    cs: CS,
}

impl<BUS, CS> ChipSelectDevice<BUS, CS>
where
    BUS: SpiBus<u8>,
    CS: OutputPin,
{
    /// Take ownership of the bus and chip-select line
    ///
    /// The line is driven high before this returns, so other devices on the
    /// same wires never see a spurious select.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ChipSelect`] if the line cannot be driven high
    pub fn new(bus: BUS, mut cs: CS) -> Result<Self, DeviceError<BUS::Error, CS::Error>> {
        cs.set_high().map_err(DeviceError::ChipSelect)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Chip select idle high");

        Ok(Self { bus, cs })
    }

    /// Release the bus and chip-select line, consuming the device
    pub fn release(self) -> (BUS, CS) {
        (self.bus, self.cs)
    }
}

impl<BUS, CS> ErrorType for ChipSelectDevice<BUS, CS>
where
    BUS: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = DeviceError<BUS::Error, CS::Error>;
}

impl<BUS, CS> SpiDevice<u8> for ChipSelectDevice<BUS, CS>
where
    BUS: SpiBus<u8>,
    CS: OutputPin,
{
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let selected = Selected::assert(&mut self.cs).map_err(DeviceError::ChipSelect)?;

        let op_result: Result<(), Self::Error> = run_operations(&mut self.bus, operations);
        let flush_result = self.bus.flush().map_err(DeviceError::Spi);
        let cs_result = selected.deassert().map_err(DeviceError::ChipSelect);

        op_result?;
        flush_result?;
        cs_result
    }
}

fn run_operations<BUS, PinE>(
    bus: &mut BUS,
    operations: &mut [Operation<'_, u8>],
) -> Result<(), DeviceError<BUS::Error, PinE>>
where
    BUS: SpiBus<u8>,
{
    for op in operations {
        match op {
            Operation::Read(buf) => bus.read(buf),
            Operation::Write(buf) => bus.write(buf),
            Operation::Transfer(read, write) => bus.transfer(read, write),
            Operation::TransferInPlace(buf) => bus.transfer_in_place(buf),
            Operation::DelayNs(_) => return Err(DeviceError::DelayNotSupported),
        }
        .map_err(DeviceError::Spi)?;
    }
    Ok(())
}

/// Held while chip-select is low; dropping it drives the line high again
struct Selected<'a, CS: OutputPin> {
    cs: &'a mut CS,
    active: bool,
}

impl<'a, CS: OutputPin> Selected<'a, CS> {
    fn assert(cs: &'a mut CS) -> Result<Self, CS::Error> {
        cs.set_low()?;
        Ok(Self { cs, active: true })
    }

    fn deassert(mut self) -> Result<(), CS::Error> {
        self.active = false;
        self.cs.set_high()
    }
}

impl<CS: OutputPin> Drop for Selected<'_, CS> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.cs.set_high();
        }
    }
}
