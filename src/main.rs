use log::{error, info};
use rrdecode::{Config, ResourceRecord};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_default();
    let config = Config::parse(&path)?;

    info!("{:?}", config);

    let message = std::fs::read(&config.input.path)?;
    let mut cursor = config.decoder.cursor(&message);
    cursor.set_offset(config.input.offset)?;

    for i in 0..config.input.records {
        match ResourceRecord::parse(&mut cursor) {
            Ok(record) => println!("{}", record),
            Err(e) => {
                error!("record {} at offset {}: {}", i, cursor.offset(), e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
