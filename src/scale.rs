//! LSB weights used to turn raw register values into physical units
//!
//! This driver does not program the calibration register. Current is derived
//! directly from the shunt voltage register by multiplying with a fixed LSB
//! weight that is tied to the shunt resistor installed on the board. Boards
//! with a different shunt need a different weight, see [`Scale::new`].

use crate::measurements::{BusVoltage, ShuntVoltage};

/// LSB weights for the two data registers
///
/// Held by the driver and applied on demand, the raw register values stay
/// available through [`crate::SyncIna226::shunt_voltage`] and
/// [`crate::SyncIna226::bus_voltage`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scale {
    /// Weight of one bit of the shunt voltage register in mA
    current_lsb_ma: f32,
    /// Weight of one bit of the bus voltage register in mV
    bus_lsb_mv: f32,
}

impl Scale {
    /// Bus voltage LSB weight in mV, fixed by the chip
    pub const BUS_LSB_MV: f32 = 1.25;

    /// Create a scale from explicit LSB weights
    #[must_use]
    pub const fn new(current_lsb_ma: f32, bus_lsb_mv: f32) -> Self {
        Self {
            current_lsb_ma,
            bus_lsb_mv,
        }
    }

    /// Scale for the 3.2 A board variant: 0.1 mA per bit
    #[must_use]
    pub const fn model_3a2() -> Self {
        Self::new(0.1, Self::BUS_LSB_MV)
    }

    /// Scale for the 20 A board variant: 1.25 mA per bit
    #[must_use]
    pub const fn model_20a() -> Self {
        Self::new(1.25, Self::BUS_LSB_MV)
    }

    /// Current in mA represented by a raw shunt voltage reading
    #[must_use]
    pub fn current_ma(self, shunt: ShuntVoltage) -> f32 {
        f32::from(shunt.raw()) * self.current_lsb_ma
    }

    /// Bus voltage in mV represented by a raw bus voltage reading
    #[must_use]
    pub fn bus_mv(self, bus: BusVoltage) -> f32 {
        f32::from(bus.raw()) * self.bus_lsb_mv
    }
}

impl Default for Scale {
    /// The 3.2 A variant, 0.1 mA and 1.25 mV per bit
    fn default() -> Self {
        Self::model_3a2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let scale = Scale::default();

        assert_eq!(scale.current_ma(ShuntVoltage::from_bits(0xFFF6)), -1.0);
        assert_eq!(scale.bus_mv(BusVoltage::from_bits(0x0FA0)), 5000.0);
    }

    #[test]
    fn conversion_is_linear_in_the_raw_value() {
        let scale = Scale::default();

        for raw in [i16::MIN, -10, -1, 0, 1, 0x1234, i16::MAX] {
            let bits = u16::from_ne_bytes(raw.to_ne_bytes());

            assert_eq!(
                scale.current_ma(ShuntVoltage::from_bits(bits)),
                f32::from(raw) * 0.1
            );
            assert_eq!(
                scale.bus_mv(BusVoltage::from_bits(bits)),
                f32::from(raw) * 1.25
            );
        }
    }

    #[test]
    fn larger_shunt_variant() {
        let scale = Scale::model_20a();

        assert_eq!(scale.current_ma(ShuntVoltage::from_bits(100)), 125.0);
        assert_eq!(scale.bus_mv(BusVoltage::from_bits(100)), 125.0);
    }
}
