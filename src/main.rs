use mgrs_rs::{Mgrs, MgrsError, MgrsFormat, to_wgs};

fn main() -> Result<(), MgrsError> {
    // Encode a position at full precision
    let mgrs = Mgrs::from_latlon(38.8895, -77.0352, 5)?;
    println!("Encoded: {}", mgrs);
    println!("Spaced:  {}", mgrs.format(&MgrsFormat::new().with_spaces()));

    // Coarser references name larger cells
    for precision in (0..=5).rev() {
        let coarse = Mgrs::from_latlon(38.8895, -77.0352, precision)?;
        println!("Precision {}: {}", precision, coarse);
    }

    // Decode back to the cell centre
    let (lat, lon) = to_wgs("18SUJ2348606483")?;
    println!("Decoded: ({:.6}, {:.6})", lat, lon);

    // Polar references use UPS squares instead of a zone number
    let polar = Mgrs::from_latlon(89.0, 45.0, 5)?;
    println!("Polar:   {}", polar);

    Ok(())
}
