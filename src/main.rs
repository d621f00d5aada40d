use chrono::Local;
use std::error::Error;

mod icon;

const OUTPUT_PATH: &str = "icon.png";

fn main() -> Result<(), Box<dyn Error>> {
    let image = icon::create_icon();
    image.save(OUTPUT_PATH)?;
    println!(
        "[{}] Icon created: {} (1024x1024)",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        OUTPUT_PATH
    );
    Ok(())
}
