use std::io::Read;

use miette::*;

fn main() -> Result<()> {
    // stdout carries only the answer
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("Failed to read stdin")?;
            buf
        }
    };

    let result = walled_plane::process(&input)?;
    println!("{}", result);
    Ok(())
}
