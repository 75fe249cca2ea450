use std::{path::PathBuf, process::ExitCode};

use kettle::{
    bvh::SplitMethod,
    camera::Camera,
    error::Error,
    ppm::{write_ppm, PpmFormat},
    renderer::{render, RenderOptions},
    scene::{RenderDesc, Scene},
    shapes::Mesh,
};

/// Unwraps `$result` or panics with `$msg` and the error's debug form.
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => panic!("{}: {why:?}", $msg),
        }
    };
}

const USAGE: &str = "\
Usage: kettle [OPTIONS] <scene.yaml>

Options:
  -o <FILE>        Write the image to FILE instead of stdout
  --spp <N>        Override the description's samples per pixel
  --threads <N>    Number of render threads (default: logical cores)
  --binary         Write binary P6 instead of plain P3
  -h, --help       Print this help
";

struct Args {
    scene: PathBuf,
    output: Option<PathBuf>,
    spp: Option<u32>,
    threads: Option<usize>,
    binary: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut scene = None;
    let mut output = None;
    let mut spp = None;
    let mut threads = None;
    let mut binary = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(String::new()),
            "-o" => {
                let value = args.next().ok_or("-o requires a file argument")?;
                output = Some(PathBuf::from(value));
            }
            "--spp" => {
                let value = args.next().ok_or("--spp requires a count argument")?;
                spp = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid sample count '{value}'"))?,
                );
            }
            "--threads" => {
                let value = args.next().ok_or("--threads requires a count argument")?;
                threads = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid thread count '{value}'"))?,
                );
            }
            "--binary" => binary = true,
            _ if arg.starts_with('-') => return Err(format!("Unknown option '{arg}'")),
            _ => {
                if scene.replace(PathBuf::from(&arg)).is_some() {
                    return Err(format!("Unexpected extra argument '{arg}'"));
                }
            }
        }
    }

    Ok(Args {
        scene: scene.ok_or("Missing scene description argument")?,
        output,
        spp,
        threads,
        binary,
    })
}

// Logs go to stderr so the image can stream to stdout
fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn run(args: &Args) -> Result<(), Error> {
    let desc = RenderDesc::load(&args.scene)?;

    let mesh = Mesh::load(&desc.mesh)?;
    log::info!(
        "Loaded {} with {} triangles",
        desc.mesh.display(),
        mesh.triangle_count()
    );

    let scene = Scene::new(
        &mesh,
        &desc.instances()?,
        desc.materials(),
        desc.background(),
        4,
        SplitMethod::Middle,
    )?;

    let film_settings = desc.film_settings();
    let camera = Camera::new(desc.camera_parameters(), film_settings.res);

    let samples_per_pixel = args.spp.unwrap_or(desc.samples_per_pixel);
    let (film, _stats) = render(
        &scene,
        &camera,
        film_settings,
        RenderOptions {
            samples_per_pixel,
            max_depth: desc.max_depth,
            seed: desc.seed,
            threads: args.threads,
        },
    );

    let format = if args.binary {
        PpmFormat::Binary
    } else {
        PpmFormat::Ascii
    };
    match &args.output {
        Some(path) => {
            let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
            write_ppm(&mut file, &film, samples_per_pixel, format)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            write_ppm(&mut out, &film, samples_per_pixel, format)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(why) => {
            if !why.is_empty() {
                eprintln!("{why}");
            }
            eprint!("{USAGE}");
            return if why.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    expect!(setup_logger(), "Failed to set up logging");

    if let Err(why) = run(&args) {
        log::error!("{}", why);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
