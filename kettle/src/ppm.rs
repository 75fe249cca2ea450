use std::io::Write;

use crate::film::Film;

/// Output encoding for [write_ppm].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PpmFormat {
    /// Plain `P3` with one ASCII triplet per line.
    Ascii,
    /// Raw `P6` with packed binary samples.
    Binary,
}

/// Writes `film` to `out` as a PPM image.
///
/// Each channel sum is divided by `samples_per_pixel`, gamma corrected with
/// `sqrt`, clamped to `[0, 1]` and quantized to `[0, 255]`. Scanlines are
/// written top to bottom, matching the film's row order.
pub fn write_ppm<W: Write>(
    out: &mut W,
    film: &Film,
    samples_per_pixel: u32,
    format: PpmFormat,
) -> std::io::Result<()> {
    assert!(samples_per_pixel > 0, "Zero samples per pixel");

    let res = film.res();
    let inv_spp = 1.0 / (samples_per_pixel as f32);

    let magic = match format {
        PpmFormat::Ascii => "P3",
        PpmFormat::Binary => "P6",
    };
    write!(out, "{}\n{} {}\n255\n", magic, res.x, res.y)?;

    match format {
        PpmFormat::Ascii => {
            for p in film.pixels() {
                let (r, g, b) = quantize(p.r, p.g, p.b, inv_spp);
                writeln!(out, "{} {} {}", r, g, b)?;
            }
        }
        PpmFormat::Binary => {
            let mut bytes = Vec::with_capacity(film.pixels().len() * 3);
            for p in film.pixels() {
                let (r, g, b) = quantize(p.r, p.g, p.b, inv_spp);
                bytes.push(r);
                bytes.push(g);
                bytes.push(b);
            }
            out.write_all(&bytes)?;
        }
    }

    out.flush()
}

fn quantize(r: f32, g: f32, b: f32, inv_spp: f32) -> (u8, u8, u8) {
    let q = |c: f32| ((c * inv_spp).sqrt().clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    (q(r), q(g), q(b))
}
