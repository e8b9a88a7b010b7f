//! Driver for the [INA226](https://www.ti.com/product/INA226) current and power monitor
//!
//! The INA226 sits on an I2C bus and measures the voltage drop over a shunt
//! resistor as well as the bus voltage. This crate covers the register
//! protocol (pointer write followed by a 2-byte big-endian read) and the
//! conversion of the raw two's-complement register values into milliamps and
//! millivolts.
//!
//! The driver does not program the calibration register and does not read the
//! current or power registers. Current is derived from the shunt voltage
//! register using a fixed LSB weight, see [`scale::Scale`].
//!
//! # Example
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ina226::address::Address;
//! use ina226::SyncIna226;
//! use linux_embedded_hal::I2cdev;
//!
//! let device = I2cdev::new("/dev/i2c-1")?;
//! let mut ina = SyncIna226::new(device, Address::default())?;
//!
//! println!("Bus voltage: {} mV", ina.bus_voltage_mv()?);
//! println!("Current: {} mA", ina.current_ma()?);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod configuration;
pub mod measurements;
pub mod register;
pub mod scale;

#[cfg(feature = "async")]
#[path = "async.rs"]
mod asynchronous;

#[cfg(feature = "async")]
pub use asynchronous::Ina226 as AsyncIna226;

#[cfg(feature = "sync")]
mod blocking {
    include!(concat!(env!("OUT_DIR"), "/de-asynced.rs"));
}

#[cfg(feature = "sync")]
pub use blocking::Ina226 as SyncIna226;
