use ina226::address::Address;
use ina226::SyncIna226;
use linux_embedded_hal::I2cdev;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let device = I2cdev::new("/dev/i2c-1")?;
    let mut ina = SyncIna226::new(device, Address::from_byte(0x40)?)?;

    // Wait until a result is ready
    std::thread::sleep(ina.configuration()?.conversion_time().unwrap());

    println!("Bus voltage: {} mV", ina.bus_voltage_mv()?);
    println!("Current: {} mA", ina.current_ma()?);

    Ok(())
}
