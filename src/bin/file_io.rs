use fractal_bench::round_trip;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    round_trip(&std::env::temp_dir())?;
    println!("OK");
    Ok(())
}
