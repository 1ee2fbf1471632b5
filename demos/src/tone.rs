use std::f64::consts::PI;

use anyhow::Result;

use arbsrc::prelude::*;

use textplots::{Chart, Plot, Shape};

const IN_RATE: f64 = 8000.;
const OUT_RATE: f64 = 12000.;
const FREQ: f64 = 440.;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let input = (0..2000)
        .map(|m| Complex::from_polar(1.0, 2.0 * PI * FREQ / IN_RATE * m as f64))
        .collect::<Vec<_>>();

    // double precision
    {
        let mut stream = Stream::new(FloatResampler::new(IN_RATE, OUT_RATE)?);
        let mut output = Vec::new();
        input.chunks(256).for_each(|chunk| {
            stream.process(chunk, &mut output);
        });
        tracing::info!(
            "{} input samples -> {} output samples (ratio {})",
            input.len(),
            output.len(),
            stream.resampler().ratio()
        );

        println!("{FREQ}Hz tone resampled from {IN_RATE}Hz to {OUT_RATE}Hz (real part)");
        Chart::new(180, 40, 0.0, 10.0)
            .lineplot(&Shape::Lines(
                &output
                    .iter()
                    .enumerate()
                    .map(|(n, y)| ((n as f64 / OUT_RATE * 1000.) as f32, y.re as f32))
                    .take_while(|(t, _)| *t <= 10.0)
                    .collect::<Vec<_>>(),
            ))
            .display();
    }

    // 16-bit fixed point
    {
        let quantized = input
            .iter()
            .map(|x| Complex::new((x.re * 16000.).round() as i16, (x.im * 16000.).round() as i16))
            .collect::<Vec<_>>();
        let mut stream = Stream::new(FixedPointResampler::new(IN_RATE, OUT_RATE)?);
        let mut output = Vec::new();
        stream.process(&quantized, &mut output);
        tracing::info!("alpha = {}", stream.resampler().alpha());

        let omega = 2.0 * PI * FREQ / OUT_RATE;
        let start = (stream.resampler().core().delta() * stream.resampler().core().window_width())
            .ceil() as usize
            + 1;
        let worst = output
            .iter()
            .enumerate()
            .skip(start)
            .map(|(n, y)| {
                let expect = Complex::from_polar(16000.0, omega * n as f64);
                (Complex::new(y.re as f64, y.im as f64) - expect).norm()
            })
            .fold(0.0, f64::max);
        println!("fixed point: {} outputs, worst error {worst:.2} LSB", output.len());
    }

    Ok(())
}
