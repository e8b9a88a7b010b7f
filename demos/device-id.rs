use ina226::address::Address;
use ina226::register::{DieId, ManufacturerId};
use ina226::SyncIna226;
use linux_embedded_hal::I2cdev;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let device = I2cdev::new("/dev/i2c-1")?;
    let mut ina = SyncIna226::new(device, Address::from_byte(0x40)?)?;

    // The driver does not check who answers, so we do it here
    let manufacturer = ina.manufacturer_id()?;
    if manufacturer != ManufacturerId::TEXAS_INSTRUMENTS {
        return Err(format!("Unexpected manufacturer ID: {:#06x}", manufacturer.0).into());
    }

    let die = ina.die_id()?;
    println!(
        "Found device {:#05x} revision {} (INA226: {:#05x})",
        die.device_id(),
        die.revision(),
        DieId::INA226.device_id()
    );

    Ok(())
}
