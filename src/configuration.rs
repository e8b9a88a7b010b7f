//! Types used to set the configuration for the INA226
//!
//! [`Configuration`] combines all the fields of the configuration register.
//!
//! # Example
//! The `..` completion can be used to set specific values to change. For example:
//! ```rust
//! use ina226::configuration::{AverageCount, Configuration};
//! let conf = Configuration {
//!     average: AverageCount::Avg128,
//!     .. Default::default()
//! };
//! ```

use crate::register::{ReadRegister, Register, WriteRegister};
use core::time::Duration;

/// Perform a system reset or continue work as normal
///
/// If set to `Reset` all registers are set to their defaults. The flag clears
/// itself after the reset was performed. So this should always read as `Run`.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Reset {
    /// Continue normal operation
    #[default]
    Run = 0,
    /// Perform system reset
    Reset = 1,
}

impl Reset {
    const SHIFT: u8 = 15;
    const MASK: u16 = 1;

    #[must_use]
    const fn from_register(reg: u16) -> Self {
        match (reg >> Self::SHIFT) & Self::MASK {
            0 => Self::Run,
            1 => Self::Reset,
            _ => unreachable!(),
        }
    }

    #[must_use]
    const fn apply_to_reg(self, mut reg: u16) -> u16 {
        reg &= !(Self::MASK << Self::SHIFT);
        reg |= (self as u16) << Self::SHIFT;
        reg
    }
}

/// Number of samples the INA226 averages before updating the data registers
///
/// Set via the AVG bits (11:9) of the configuration register.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
#[repr(u8)]
pub enum AverageCount {
    /// No averaging, every conversion updates the registers
    Avg1 = 0b000,
    /// 4 averaged samples
    Avg4 = 0b001,
    /// 16 averaged samples
    Avg16 = 0b010,
    /// 64 averaged samples
    Avg64 = 0b011,
    /// 128 averaged samples
    Avg128 = 0b100,
    /// 256 averaged samples
    Avg256 = 0b101,
    /// 512 averaged samples
    Avg512 = 0b110,
    /// 1024 averaged samples
    Avg1024 = 0b111,
}

impl AverageCount {
    const SHIFT: u8 = 9;
    const MASK: u16 = 0b111;

    /// The number of samples this selector averages over
    #[must_use]
    pub const fn factor(self) -> u16 {
        match self {
            Self::Avg1 => 1,
            Self::Avg4 => 4,
            Self::Avg16 => 16,
            Self::Avg64 => 64,
            Self::Avg128 => 128,
            Self::Avg256 => 256,
            Self::Avg512 => 512,
            Self::Avg1024 => 1024,
        }
    }

    #[must_use]
    const fn from_register(reg: u16) -> Self {
        match (reg >> Self::SHIFT) & Self::MASK {
            0b000 => Self::Avg1,
            0b001 => Self::Avg4,
            0b010 => Self::Avg16,
            0b011 => Self::Avg64,
            0b100 => Self::Avg128,
            0b101 => Self::Avg256,
            0b110 => Self::Avg512,
            0b111 => Self::Avg1024,
            0b1000..=u16::MAX => unreachable!(), // The mask makes sure we will never get these values
        }
    }

    #[must_use]
    const fn apply_to_reg(self, mut reg: u16) -> u16 {
        reg &= !(Self::MASK << Self::SHIFT);
        reg |= (self as u16) << Self::SHIFT;
        reg
    }
}

/// Time the ADC spends on a single bus or shunt voltage conversion
///
/// Set via the VBUSCT bits (8:6) and the VSHCT bits (5:3) of the
/// configuration register.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
#[repr(u8)]
pub enum ConversionTime {
    /// 140 µs
    T140Us = 0b000,
    /// 204 µs
    T204Us = 0b001,
    /// 332 µs
    T332Us = 0b010,
    /// 588 µs
    T588Us = 0b011,
    /// 1.1 ms
    T1100Us = 0b100,
    /// 2.116 ms
    T2116Us = 0b101,
    /// 4.156 ms
    T4156Us = 0b110,
    /// 8.244 ms
    T8244Us = 0b111,
}

impl ConversionTime {
    const SHIFT_BUS: u8 = 6;
    const SHIFT_SHUNT: u8 = 3;
    const MASK: u16 = 0b111;

    /// Duration of one conversion in µs
    ///
    /// Values according to the CT tables in the datasheet.
    #[must_use]
    pub const fn as_us(self) -> u32 {
        match self {
            Self::T140Us => 140,
            Self::T204Us => 204,
            Self::T332Us => 332,
            Self::T588Us => 588,
            Self::T1100Us => 1_100,
            Self::T2116Us => 2_116,
            Self::T4156Us => 4_156,
            Self::T8244Us => 8_244,
        }
    }

    #[must_use]
    const fn from_register<const SHIFT: u8>(reg: u16) -> Self {
        match (reg >> SHIFT) & Self::MASK {
            0b000 => Self::T140Us,
            0b001 => Self::T204Us,
            0b010 => Self::T332Us,
            0b011 => Self::T588Us,
            0b100 => Self::T1100Us,
            0b101 => Self::T2116Us,
            0b110 => Self::T4156Us,
            0b111 => Self::T8244Us,
            0b1000..=u16::MAX => unreachable!(), // The mask makes sure we will never get these values
        }
    }

    #[must_use]
    const fn apply_to_reg<const SHIFT: u8>(self, mut reg: u16) -> u16 {
        reg &= !(Self::MASK << SHIFT);
        reg |= (self as u16) << SHIFT;
        reg
    }

    #[must_use]
    const fn from_bus_register(reg: u16) -> Self {
        Self::from_register::<{ Self::SHIFT_BUS }>(reg)
    }

    #[must_use]
    const fn apply_to_bus_reg(self, reg: u16) -> u16 {
        self.apply_to_reg::<{ Self::SHIFT_BUS }>(reg)
    }

    #[must_use]
    const fn from_shunt_register(reg: u16) -> Self {
        Self::from_register::<{ Self::SHIFT_SHUNT }>(reg)
    }

    #[must_use]
    const fn apply_to_shunt_reg(self, reg: u16) -> u16 {
        self.apply_to_reg::<{ Self::SHIFT_SHUNT }>(reg)
    }
}

/// Which signals are measured during a conversion
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum MeasuredSignals {
    /// Only the shunt voltage is measured
    ShuntVoltage = 1,
    /// Only the bus voltage is measured
    BusVoltage = 2,
    /// Both voltages are measured
    #[default]
    ShuntAndBusVoltage = 3,
}

impl MeasuredSignals {
    #[must_use]
    const fn from_bits_wrapping(bits: u16) -> Self {
        match bits & 0b11 {
            0 => panic!("Got passed 0 for signals to measure which should be caught by previous check!"),
            1 => Self::ShuntVoltage,
            2 => Self::BusVoltage,
            3 => Self::ShuntAndBusVoltage,
            4..=u16::MAX => unreachable!(), // The mask removes all other bits
        }
    }

    #[must_use]
    const fn measures_shunt(self) -> bool {
        self as u8 & 0b01 != 0
    }

    #[must_use]
    const fn measures_bus(self) -> bool {
        self as u8 & 0b10 != 0
    }
}

/// Operation mode of the INA226
///
/// Set via the MODE bits (2:0) of the configuration register.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum OperatingMode {
    /// Shut the ADC down and reduce power usage
    ///
    /// Both MODE codes `0b000` and `0b100` select this state, reads
    /// canonicalize to this variant.
    PowerDown = 0,
    /// Trigger a single conversion of the given signals
    Triggered(MeasuredSignals),
    /// Continuously measure the given signals
    Continuous(MeasuredSignals),
}

impl OperatingMode {
    const SHIFT: u8 = 0;
    const MASK: u16 = 0b111;

    #[must_use]
    const fn from_register(reg: u16) -> Self {
        match (reg >> Self::SHIFT) & Self::MASK {
            0 | 0b100 => Self::PowerDown,
            x @ 1..=3 => Self::Triggered(MeasuredSignals::from_bits_wrapping(x)),
            x @ 5..=7 => Self::Continuous(MeasuredSignals::from_bits_wrapping(x)),
            0b1000..=u16::MAX => unreachable!(),
        }
    }

    #[must_use]
    const fn apply_to_reg(self, mut reg: u16) -> u16 {
        reg &= !(Self::MASK << Self::SHIFT);
        reg |= (self.as_bits()) << Self::SHIFT;
        reg
    }

    /// Return the bits representing this mode
    #[must_use]
    pub const fn as_bits(self) -> u16 {
        match self {
            OperatingMode::PowerDown => 0,
            OperatingMode::Triggered(signals) => signals as u16,
            OperatingMode::Continuous(signals) => signals as u16 | 0b100,
        }
    }

    #[must_use]
    const fn signals(self) -> Option<MeasuredSignals> {
        match self {
            OperatingMode::PowerDown => None,
            OperatingMode::Triggered(signals) | OperatingMode::Continuous(signals) => Some(signals),
        }
    }
}

impl Default for OperatingMode {
    fn default() -> Self {
        OperatingMode::Continuous(MeasuredSignals::ShuntAndBusVoltage)
    }
}

/// Configuration register
///
/// Configures the way the INA226 performs its measurements. The driver writes
/// this register once when it is opened, see [`crate::SyncIna226::new`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Configuration {
    /// Indicate to perform a reset or continue to run normally
    pub reset: Reset,
    /// Number of samples averaged into one register update
    pub average: AverageCount,
    /// Conversion time for the bus voltage measurement
    pub bus_conversion_time: ConversionTime,
    /// Conversion time for the shunt voltage measurement
    pub shunt_conversion_time: ConversionTime,
    /// Which signals to measure and if continuous or triggered operation is set up
    pub operating_mode: OperatingMode,
}

impl Default for Configuration {
    /// The configuration the driver writes when it is opened
    ///
    /// 4 averaged samples, 588 µs conversion time for both signals and
    /// continuous shunt and bus measurement. As bits this is `0x05DF`.
    ///
    /// Note that this differs from the power-on state of the chip, which is
    /// `Avg1` / 1.1 ms / 1.1 ms.
    fn default() -> Self {
        Self {
            reset: Reset::Run,
            average: AverageCount::Avg4,
            bus_conversion_time: ConversionTime::T588Us,
            shunt_conversion_time: ConversionTime::T588Us,
            operating_mode: OperatingMode::default(),
        }
    }
}

impl Configuration {
    /// Interpret the bits of the configuration register
    ///
    /// The reserved bits 14:12 are ignored, so this also accepts the power-on
    /// value `0x4127` which has one of them set.
    #[must_use]
    pub const fn from_bits(reg: u16) -> Self {
        let reset = Reset::from_register(reg);
        let average = AverageCount::from_register(reg);
        let bus_conversion_time = ConversionTime::from_bus_register(reg);
        let shunt_conversion_time = ConversionTime::from_shunt_register(reg);
        let operating_mode = OperatingMode::from_register(reg);

        Self {
            reset,
            average,
            bus_conversion_time,
            shunt_conversion_time,
            operating_mode,
        }
    }

    /// Turn this `Configuration` into the bits it describes
    #[must_use]
    pub const fn as_bits(self) -> u16 {
        let Self {
            reset,
            average,
            bus_conversion_time,
            shunt_conversion_time,
            operating_mode,
        } = self;

        let mut bits = 0;
        bits = reset.apply_to_reg(bits);
        bits = average.apply_to_reg(bits);
        bits = bus_conversion_time.apply_to_bus_reg(bits);
        bits = shunt_conversion_time.apply_to_shunt_reg(bits);
        bits = operating_mode.apply_to_reg(bits);
        bits
    }

    /// Time until the data registers are updated with a new measurement
    ///
    /// This is the sum of the conversion times of all measured signals times
    /// the averaging count. Returns `None` when the ADC is powered down.
    #[must_use]
    pub const fn conversion_time(&self) -> Option<Duration> {
        let signals = match self.operating_mode.signals() {
            None => return None,
            Some(signals) => signals,
        };

        let mut us: u64 = 0;
        if signals.measures_shunt() {
            us += self.shunt_conversion_time.as_us() as u64;
        }
        if signals.measures_bus() {
            us += self.bus_conversion_time.as_us() as u64;
        }

        Some(Duration::from_micros(us * self.average.factor() as u64))
    }
}

impl Register for Configuration {
    const ADDRESS: u8 = 0x00;
}

impl ReadRegister for Configuration {
    fn from_bits(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl WriteRegister for Configuration {
    fn as_bits(&self) -> u16 {
        Self::as_bits(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_word_matches_contract() {
        // [AVG:3][VBUSCT:3][VSHCT:3][MODE:3] = 001 011 011 111
        assert_eq!(Configuration::default().as_bits(), 0x05DF);
        assert_eq!(Configuration::default().as_bits().to_be_bytes(), [0x05, 0xDF]);
        assert_eq!(Configuration::from_bits(0x05DF), Configuration::default());
    }

    #[test]
    fn power_on_value_decodes() {
        // Register value after power on, with the reserved always-set bit 14
        let conf = Configuration::from_bits(0x4127);

        assert_eq!(conf.reset, Reset::Run);
        assert_eq!(conf.average, AverageCount::Avg1);
        assert_eq!(conf.bus_conversion_time, ConversionTime::T1100Us);
        assert_eq!(conf.shunt_conversion_time, ConversionTime::T1100Us);
        assert_eq!(
            conf.operating_mode,
            OperatingMode::Continuous(MeasuredSignals::ShuntAndBusVoltage)
        );
    }

    #[test]
    fn is_inverse() {
        // Some MODE patterns have redundant representations (0b000 and 0b100
        // both power down) and the reserved bits are dropped. So we first turn
        // the bits into a full description and then test if we can invert it.
        for val in 0..=u16::MAX {
            let conf = Configuration::from_bits(val);
            let bits_cleaned = Configuration::as_bits(conf);
            assert_eq!(conf, Configuration::from_bits(bits_cleaned));

            if (val & 0b111) != 0b100 {
                // Ignore the reserved bits 14:12 which from_bits drops
                let bits_to_ignore = 0b0111_0000_0000_0000;

                assert_eq!(val & !bits_to_ignore, bits_cleaned);
            }
        }
    }

    #[test]
    fn conversion_time_scales_with_averaging() {
        assert_eq!(
            Configuration::default().conversion_time(),
            Some(Duration::from_micros((588 + 588) * 4))
        );

        let conf = Configuration {
            average: AverageCount::Avg1024,
            bus_conversion_time: ConversionTime::T140Us,
            shunt_conversion_time: ConversionTime::T8244Us,
            operating_mode: OperatingMode::Triggered(MeasuredSignals::ShuntVoltage),
            ..Default::default()
        };
        assert_eq!(
            conf.conversion_time(),
            Some(Duration::from_micros(8_244 * 1024))
        );

        let off = Configuration {
            operating_mode: OperatingMode::PowerDown,
            ..Default::default()
        };
        assert_eq!(off.conversion_time(), None);
    }
}
