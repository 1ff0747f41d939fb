//! Binary: load env, generate seed data, write JSON to stdout.

mod generate;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let data = generate::generate()?;
    let json = serde_json::to_string_pretty(&data)?;
    println!("{}", json);
    Ok(())
}
