fn main() -> Result<(), kanye_rest::KanyeError> {
    let quote = kanye_rest::fetch_quote()?;
    println!("\"{quote}\"");
    Ok(())
}
