use anyhow::Result;

use arbsrc::{prelude::*, rational::continued_fraction};

use colored::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let rates = [
        (8000., 12000.),
        (44100., 48000.),
        (48000., 44100.),
        (11025., 16000.),
        (1., std::f64::consts::SQRT_2),
    ];

    rates.iter().try_for_each(|&(in_rate, out_rate)| -> Result<()> {
        let x: f64 = out_rate / in_rate;
        println!("{}", format!("{in_rate} -> {out_rate} ({x})").green().bold());

        let (terms, bound) = continued_fraction(x, 12)?;
        println!("  terms: {terms:?}, error bound: {bound:e}");

        best_approximations(x, 12).iter().for_each(|r| {
            let err = (r.to_f64() - x).abs();
            let line = format!("  {:>12}  error {err:e}", r.to_string());
            if err < 1e-6 {
                println!("{}", line.cyan());
            } else {
                println!("{line}");
            }
        });

        let ratio = approximate(x, 1e-6, 1000, 10)?;
        println!("  {} {}", "selected:".yellow(), ratio);
        Ok(())
    })
}
