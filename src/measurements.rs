//! Raw measurement values as read from the data registers
//!
//! Both data registers hold a 16 bit two's-complement value, transferred most
//! significant byte first. The newtypes here only preserve the sign, scaling
//! into physical units is done by [`crate::scale::Scale`].

use crate::register::{ReadRegister, Register};

/// A shunt voltage measurement as read from the shunt voltage register
///
/// The LSB weight depends on the shunt resistor installed in front of the
/// chip, so this driver hands the raw value to [`crate::scale::Scale`]
/// instead of interpreting it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShuntVoltage(i16);

impl ShuntVoltage {
    /// Reinterpret the register bits as a signed value
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(i16::from_ne_bytes(bits.to_ne_bytes()))
    }

    /// The raw signed register value, no scaling applied
    #[must_use]
    pub const fn raw(self) -> i16 {
        self.0
    }
}

impl Register for ShuntVoltage {
    const ADDRESS: u8 = 0x01;
}

impl ReadRegister for ShuntVoltage {
    fn from_bits(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

/// A bus voltage measurement as read from the bus voltage register
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BusVoltage(i16);

impl BusVoltage {
    /// Reinterpret the register bits as a signed value
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(i16::from_ne_bytes(bits.to_ne_bytes()))
    }

    /// The raw signed register value, no scaling applied
    #[must_use]
    pub const fn raw(self) -> i16 {
        self.0
    }
}

impl Register for BusVoltage {
    const ADDRESS: u8 = 0x02;
}

impl ReadRegister for BusVoltage {
    fn from_bits(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_preserved() {
        assert_eq!(ShuntVoltage::from_bits(0x1234).raw(), 4660);
        assert_eq!(ShuntVoltage::from_bits(0xFFF6).raw(), -10);
        assert_eq!(ShuntVoltage::from_bits(0x8000).raw(), i16::MIN);
        assert_eq!(ShuntVoltage::from_bits(0x7FFF).raw(), i16::MAX);

        assert_eq!(BusVoltage::from_bits(0xFFFF).raw(), -1);
        assert_eq!(BusVoltage::from_bits(0x0FA0).raw(), 4000);
    }
}
