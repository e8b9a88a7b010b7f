use crate::address::Address;
use crate::configuration::Configuration;
use crate::measurements::{BusVoltage, ShuntVoltage};
use crate::register::{DieId, ManufacturerId, ReadRegister, WriteRegister};
use crate::scale::Scale;
use embedded_hal_async::i2c::I2c;

/// Embedded HAL compatible driver for the INA226
///
/// The driver borrows the bus for one transaction at a time and caches no
/// register state, every read is a fresh pointer-write/read pair on the bus.
pub struct Ina226<I2C> {
    i2c: I2C,
    address: Address,
    scale: Scale,
}

impl<I2C> Ina226<I2C>
where
    I2C: I2c,
{
    /// Open an INA226 with the default [`Configuration`] and [`Scale`]
    ///
    /// This writes the configuration register, selecting 4-sample averaging,
    /// 588 µs conversion times and continuous shunt and bus measurement.
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn new(i2c: I2C, address: Address) -> Result<Self, I2C::Error> {
        Self::new_configured(i2c, address, Configuration::default(), Scale::default()).await
    }

    /// Open an INA226, writing the given [`Configuration`]
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn new_configured(
        i2c: I2C,
        address: Address,
        config: Configuration,
        scale: Scale,
    ) -> Result<Self, I2C::Error> {
        let mut new = Self::new_unchecked(i2c, address, scale);
        new.set_configuration(config).await?;
        Ok(new)
    }

    /// Create a driver without touching the bus
    ///
    /// Use this when the device was already configured, for example by an
    /// earlier instance of the driver.
    pub const fn new_unchecked(i2c: I2C, address: Address, scale: Scale) -> Self {
        Ina226 {
            i2c,
            address,
            scale,
        }
    }

    /// Destroy the driver returning the underlying I2C device
    ///
    /// This leaves the device in its current state.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// The [`Scale`] this driver applies to raw readings
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Write a new [`Configuration`]
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn set_configuration(&mut self, conf: Configuration) -> Result<(), I2C::Error> {
        self.write(conf).await
    }

    /// Read back the current [`Configuration`]
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn configuration(&mut self) -> Result<Configuration, I2C::Error> {
        self.read().await
    }

    /// Read the manufacturer ID register
    ///
    /// The returned value is not validated, compare against
    /// [`ManufacturerId::TEXAS_INSTRUMENTS`] to check that the expected
    /// device answered.
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn manufacturer_id(&mut self) -> Result<ManufacturerId, I2C::Error> {
        self.read().await
    }

    /// Read the die ID register
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn die_id(&mut self) -> Result<DieId, I2C::Error> {
        self.read().await
    }

    /// Read the raw shunt voltage register
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn shunt_voltage(&mut self) -> Result<ShuntVoltage, I2C::Error> {
        self.read().await
    }

    /// Read the shunt voltage register and scale it to a current in mA
    ///
    /// The scale factor is tied to the shunt resistor installed on the board,
    /// see [`Scale`].
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn current_ma(&mut self) -> Result<f32, I2C::Error> {
        let raw = self.shunt_voltage().await?;
        Ok(self.scale.current_ma(raw))
    }

    /// Read the raw bus voltage register
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn bus_voltage(&mut self) -> Result<BusVoltage, I2C::Error> {
        self.read().await
    }

    /// Read the bus voltage register and scale it to mV
    ///
    /// # Errors
    /// Returns `Err` when the underlying I2C device returns an error.
    pub async fn bus_voltage_mv(&mut self) -> Result<f32, I2C::Error> {
        let raw = self.bus_voltage().await?;
        Ok(self.scale.bus_mv(raw))
    }

    // The INA226 expects the register pointer and the data transfer as two
    // separate bus transactions, a stop condition in between is fine.
    async fn read<Reg: ReadRegister>(&mut self) -> Result<Reg, I2C::Error> {
        let mut buf: [u8; 2] = [0x00; 2];
        self.i2c.write(self.address.as_byte(), &[Reg::ADDRESS]).await?;
        self.i2c.read(self.address.as_byte(), &mut buf).await?;
        Ok(Reg::from_bits(u16::from_be_bytes(buf)))
    }

    /// Write the value contained in the register to the address dictated by its type
    async fn write<Reg: WriteRegister>(&mut self, reg: Reg) -> Result<(), I2C::Error> {
        let [val0, val1] = reg.as_bits().to_be_bytes();
        self.i2c
            .write(self.address.as_byte(), &[Reg::ADDRESS, val0, val1])
            .await
    }
}
