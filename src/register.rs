#![allow(clippy::module_name_repetitions)]

//! Register addresses of the INA226 and the traits the driver reads and
//! writes registers through
//!
//! Every register transaction starts with a one byte register pointer. Reads
//! then transfer two bytes, most significant byte first.

/// Addresses of the internal registers of the INA226 used by this driver
#[repr(u8)]
#[derive(Debug, Copy, Clone)]
pub enum RegisterName {
    /// Configuration register, see [`crate::configuration::Configuration`]
    Configuration = 0x00,
    /// Shunt voltage register, see [`crate::measurements::ShuntVoltage`]
    ShuntVoltage = 0x01,
    /// Bus voltage register, see [`crate::measurements::BusVoltage`]
    BusVoltage = 0x02,
    /// Manufacturer ID register, see [`ManufacturerId`]
    ManufacturerId = 0xFE,
    /// Die ID register, see [`DieId`]
    DieId = 0xFF,
}

/// A register of the INA226
pub trait Register {
    /// Value of the register pointer selecting this register
    const ADDRESS: u8;
}

/// A register the driver can read
pub trait ReadRegister: Register {
    /// Interpret the 16 bits read from the register
    fn from_bits(bits: u16) -> Self;
}

/// A register the driver can write
pub trait WriteRegister: Register {
    /// The 16 bits to write to the register
    fn as_bits(&self) -> u16;
}

/// Contents of the manufacturer ID register
///
/// The driver performs no validation, compare against
/// [`ManufacturerId::TEXAS_INSTRUMENTS`] to check that the expected device
/// answered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ManufacturerId(pub u16);

impl ManufacturerId {
    /// The value the INA226 reports: "TI" in ASCII
    pub const TEXAS_INSTRUMENTS: Self = Self(0x5449);
}

impl Register for ManufacturerId {
    const ADDRESS: u8 = 0xFE;
}

impl ReadRegister for ManufacturerId {
    fn from_bits(bits: u16) -> Self {
        Self(bits)
    }
}

/// Contents of the die ID register
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DieId(pub u16);

impl DieId {
    /// The value an INA226 reports
    pub const INA226: Self = Self(0x2260);

    /// Device identification, bits 15:4
    #[must_use]
    pub const fn device_id(self) -> u16 {
        self.0 >> 4
    }

    /// Die revision, bits 3:0
    #[must_use]
    pub const fn revision(self) -> u8 {
        (self.0 & 0xF) as u8
    }
}

impl Register for DieId {
    const ADDRESS: u8 = 0xFF;
}

impl ReadRegister for DieId {
    fn from_bits(bits: u16) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::measurements::{BusVoltage, ShuntVoltage};

    #[test]
    fn register_names_match() {
        assert_eq!(RegisterName::Configuration as u8, Configuration::ADDRESS);
        assert_eq!(RegisterName::ShuntVoltage as u8, ShuntVoltage::ADDRESS);
        assert_eq!(RegisterName::BusVoltage as u8, BusVoltage::ADDRESS);
        assert_eq!(RegisterName::ManufacturerId as u8, ManufacturerId::ADDRESS);
        assert_eq!(RegisterName::DieId as u8, DieId::ADDRESS);
    }

    #[test]
    fn die_id_fields() {
        assert_eq!(DieId::INA226.device_id(), 0x226);
        assert_eq!(DieId::INA226.revision(), 0);
    }
}
