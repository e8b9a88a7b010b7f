//! I2C address of the INA226 on the bus
//!
//! The address is selected by strapping the pins A0 and A1 to one of four
//! signals, giving 16 possible addresses in the range `0x40..=0x4F`. See
//! table 2 of the datasheet. An [`Address`] can be built either from the two
//! [pins](Pin) or from a raw byte.

use core::fmt::Formatter;
use core::ops::RangeInclusive;

/// Signal one of the address pins is strapped to
///
/// The values match the bits used for addressing the INA226.
///
/// # Example
/// ```rust
/// use ina226::address::Pin;
///
/// assert_eq!(Pin::Gnd.as_byte(), 0b00);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Pin {
    /// The pin is connected to GND
    Gnd = 0,
    /// The pin is connected to VS
    Vs = 1,
    /// The pin is connected to SDA
    Sda = 2,
    /// The pin is connected to SCL
    Scl = 3,
}

impl Pin {
    /// Value of the two address bits contributed by a pin strapped to this signal
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    const fn from_lowest_bits(byte: u8) -> Self {
        match byte & 0b11 {
            0 => Self::Gnd,
            1 => Self::Vs,
            2 => Self::Sda,
            3 => Self::Scl,
            _ => panic!("Masking of only the lowest bits guarantees that the values lie in 0..=3"),
        }
    }

    #[cfg(test)]
    const fn all_values() -> [Self; 4] {
        [Self::Gnd, Self::Vs, Self::Sda, Self::Scl]
    }
}

/// I2C address of the INA226 on the bus
///
/// # Example
/// ```rust
/// use ina226::address::{Address, Pin};
///
/// let address = Address::from_pins(Pin::Sda, Pin::Scl);
/// assert_eq!(address.as_byte(), 0b100_1110);
///
/// let address = Address::from_byte(0b100_1011).unwrap();
/// assert_eq!(address.as_byte(), 0b100_1011);
///
/// assert!(Address::from_byte(42).is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Address {
    byte: u8,
}

impl Address {
    const VALID_ADDRESS: RangeInclusive<u8> = 0b100_0000..=0b100_1111;
    const MIN_ADDRESS: u8 = *Self::VALID_ADDRESS.start();
    const MAX_ADDRESS: u8 = *Self::VALID_ADDRESS.end();

    /// Create an address from the two pins A0 and A1
    #[must_use]
    pub const fn from_pins(a0: Pin, a1: Pin) -> Self {
        let mut byte = 0b100_0000;

        byte |= a0.as_byte();
        byte |= a1.as_byte() << 2;

        Self { byte }
    }

    /// Create an address from a raw byte
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if the byte is not a valid INA226 address.
    pub const fn from_byte(byte: u8) -> Result<Self, OutOfRange> {
        match byte {
            Self::MIN_ADDRESS..=Self::MAX_ADDRESS => Ok(Self { byte }),
            which => Err(OutOfRange { which }),
        }
    }

    /// Get the address as a byte
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.byte
    }

    /// Get the pin strapping corresponding to this address, as (A0, A1)
    #[must_use]
    pub const fn as_pins(self) -> (Pin, Pin) {
        (
            Pin::from_lowest_bits(self.byte),
            Pin::from_lowest_bits(self.byte >> 2),
        )
    }
}

impl Default for Address {
    /// Both pins strapped to GND, i.e. 0x40
    fn default() -> Self {
        Self::from_pins(Pin::Gnd, Pin::Gnd)
    }
}

/// The given byte is not a valid INA226 address
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OutOfRange {
    which: u8,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "AddressOutOfRange: {:x}, should be in range: {:x}..={:x}",
            self.which,
            Address::MIN_ADDRESS,
            Address::MAX_ADDRESS,
        )
    }
}

impl TryFrom<u8> for Address {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Address::from_byte(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_pin_reversible() {
        let mut bytes = vec![];

        for a0 in Pin::all_values() {
            for a1 in Pin::all_values() {
                let address = Address::from_pins(a0, a1);
                let (a0_, a1_) = address.as_pins();

                assert_eq!(a0, a0_);
                assert_eq!(a1, a1_);

                bytes.push(address.as_byte());
            }
        }

        bytes.sort_unstable();
        assert_eq!(bytes, (0b100_0000..=0b100_1111).collect::<Vec<u8>>());
    }

    #[test]
    fn is_byte_reversible() {
        for byte in 0b100_0000..=0b100_1111 {
            let address = Address::from_byte(byte).unwrap();
            let byte_ = address.as_byte();

            assert_eq!(byte, byte_);
        }
    }

    #[test]
    fn datasheet_examples() {
        use Pin::{Gnd, Scl, Sda, Vs};

        // Table 2 of the datasheet
        let values = [
            // A1, A0, ADDRESS
            (Gnd, Gnd, 0b100_0000),
            (Gnd, Vs, 0b100_0001),
            (Gnd, Sda, 0b100_0010),
            (Gnd, Scl, 0b100_0011),
            (Vs, Gnd, 0b100_0100),
            (Vs, Vs, 0b100_0101),
            (Vs, Sda, 0b100_0110),
            (Vs, Scl, 0b100_0111),
            (Sda, Gnd, 0b100_1000),
            (Sda, Vs, 0b100_1001),
            (Sda, Sda, 0b100_1010),
            (Sda, Scl, 0b100_1011),
            (Scl, Gnd, 0b100_1100),
            (Scl, Vs, 0b100_1101),
            (Scl, Sda, 0b100_1110),
            (Scl, Scl, 0b100_1111),
        ];

        for (a1, a0, byte) in values.iter().copied() {
            let address = Address::from_pins(a0, a1);
            assert_eq!(address.as_byte(), byte);

            let (a0_, a1_) = Address::from_byte(byte).unwrap().as_pins();
            assert_eq!(a0, a0_);
            assert_eq!(a1, a1_);
        }
    }
}
