use ina226::address::Address;
use ina226::configuration::{AverageCount, Configuration};
use ina226::scale::Scale;
use ina226::SyncIna226;
use linux_embedded_hal::I2cdev;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let device = I2cdev::new("/dev/i2c-1")?;

    // The 20 A board variant carries a smaller shunt, so one bit of the shunt
    // voltage register is worth 1.25 mA instead of 0.1 mA
    let mut ina = SyncIna226::new_configured(
        device,
        Address::from_byte(0x40)?,
        Configuration {
            average: AverageCount::Avg128,
            ..Default::default()
        },
        Scale::model_20a(),
    )?;

    std::thread::sleep(ina.configuration()?.conversion_time().unwrap());

    println!("Raw shunt register: {}", ina.shunt_voltage()?.raw());
    println!("Current: {} mA", ina.current_ma()?);
    println!("Bus voltage: {} mV", ina.bus_voltage_mv()?);

    Ok(())
}
