//! Register map, opcode set and frame layouts for the AK7451 sensor.

/// Register addresses for AK7451
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// 12-bit angle data
    Ang = 0x00,
    /// Magnetic flux density strength, roughly 1 LSB/mT
    Mag = 0x01,
    /// Mode state
    ChMod = 0x02,
    /// Error monitor
    ErrMon = 0x03,
    /// Angle zero point
    Zp = 0x06,
    /// Rotation direction and ABZ output setup
    RdAbz = 0x07,
    /// Memory lock
    Mlk = 0x08,
    /// Abnormal detection disable
    EbDis = 0x09,
    /// UVW output setup
    Uvw = 0x0A,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

/// Command opcodes for AK7451
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Opcode {
    /// Write EEPROM (user mode only)
    WriteEeprom = 0x01,
    /// Read EEPROM (user mode only)
    ReadEeprom = 0x02,
    /// Write register (user mode only)
    WriteRegister = 0x03,
    /// Read register (user mode only)
    ReadRegister = 0x04,
    /// Change between normal and user mode
    ChangeMode = 0x05,
    /// Latch a fresh angle sample
    AngleDataRenew = 0x08,
    /// Read angle (normal mode)
    ReadAngle = 0x09,
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}

const OPCODE_MASK: u8 = 0x0F;
const ADDRESS_MASK: u8 = 0x7F;

bitfield::bitfield! {
    /// Command byte sent at the start of every frame
    ///
    /// The register address is 7 bits wide and shifted left by one on the
    /// wire, so only its upper four bits land in the first byte.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Command(u8);
    impl Debug;
    u8;
    /// Command opcode
    pub opcode, set_opcode: 7, 4;
    /// Upper four bits of the shifted register address
    pub address_bits, set_address_bits: 3, 0;
}

impl Command {
    /// Build a command from a raw opcode and register address
    ///
    /// The opcode is truncated to 4 bits and the address to 7 bits.
    #[must_use]
    pub fn new(opcode: u8, address: u8) -> Self {
        let shifted = (address & ADDRESS_MASK) << 1;
        let mut command = Self(0);
        command.set_opcode(opcode & OPCODE_MASK);
        command.set_address_bits(shifted >> 4);
        command
    }

    /// Build a command from a known opcode and register
    #[must_use]
    pub fn from_parts(opcode: Opcode, register: Register) -> Self {
        Self::new(opcode.into(), register.into())
    }

    /// Byte as clocked out on the bus
    #[must_use]
    pub const fn bits(&self) -> u8 {
        self.0
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.0
    }
}

bitfield::bitfield! {
    /// ANG
    ///
    /// Only the low 12 bits carry the angle. The upper nibble is not
    /// interpreted by this driver.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct AngleRegister(u16);
    impl Debug;
    u16;
    /// 12-bit angle, 0..=4095 over one revolution
    pub angle, _: 11, 0;
}

impl AngleRegister {
    /// Wrap a raw 16-bit reading
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_angle_command_byte() {
        assert_eq!(
            Command::from_parts(Opcode::ReadAngle, Register::Ang).bits(),
            0x90
        );
    }

    #[test]
    fn command_byte_for_every_opcode_and_address() {
        for opcode in 0u8..16 {
            for address in 0u8..128 {
                let expected = (opcode << 4) | (((address << 1) >> 4) & 0x0F);
                let command = Command::new(opcode, address);
                assert_eq!(u8::from(command), expected, "o={opcode} r={address}");
                assert_eq!(command.opcode(), opcode);
            }
        }
    }

    #[test]
    fn command_truncates_out_of_range_inputs() {
        assert_eq!(Command::new(0x19, 0x80).bits(), 0x90);
        assert_eq!(Command::new(0x04, 0xFF).bits(), 0x4F);
    }

    #[test]
    fn register_addresses_fold_into_low_nibble() {
        // Registers below 0x08 share the zero nibble
        assert_eq!(Command::from_parts(Opcode::ReadRegister, Register::RdAbz).bits(), 0x40);
        assert_eq!(Command::from_parts(Opcode::ReadRegister, Register::Mlk).bits(), 0x41);
        assert_eq!(Command::from_parts(Opcode::ReadRegister, Register::Uvw).bits(), 0x41);
    }

    #[test]
    fn angle_register_ignores_upper_nibble() {
        assert_eq!(AngleRegister::new(0xF123).angle(), 0x0123);
        assert_eq!(AngleRegister::new(0x0FFF).angle(), 0x0FFF);
        assert_eq!(AngleRegister::new(0xA000).angle(), 0);
    }
}
