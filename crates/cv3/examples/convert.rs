use argh::FromArgs;
use cv3::{
    color_spaces::{self, NAMED_CONVERSIONS},
    image::{DynImage, Image, ImageSize},
    imgproc::parallel::ExecutionStrategy,
};

/// Runs a named color conversion on a synthetic gradient image
#[derive(Debug, FromArgs)]
struct Args {
    /// name of the conversion, e.g. rgb2hsv
    #[argh(option, short = 'c', default = "String::from(\"rgb2gray\")")]
    conversion: String,

    /// width of the generated image
    #[argh(option, default = "64")]
    width: usize,

    /// height of the generated image
    #[argh(option, default = "48")]
    height: usize,

    /// use float pixels in [0, 1] instead of 8-bit pixels
    #[argh(switch, short = 'f')]
    float: bool,

    /// number of threads, runs on the global pool when not set
    #[argh(option, short = 'j')]
    threads: Option<usize>,
}

/// A horizontal ramp on the first channel and a vertical one on the others.
fn gradient(size: ImageSize, channels: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(size.width * size.height * channels);
    for y in 0..size.height {
        for x in 0..size.width {
            for c in 0..channels {
                let v = match c {
                    0 => x as f32 / size.width.max(1) as f32,
                    _ => y as f32 / size.height.max(1) as f32,
                };
                data.push(v);
            }
        }
    }
    data
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let Some(code) = color_spaces::named_code(&args.conversion) else {
        let names = NAMED_CONVERSIONS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(format!(
            "unknown conversion {}, expected one of: {names}",
            args.conversion
        )
        .into());
    };

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let channels = code.src_channels();
    let data = gradient(size, channels);

    let image = if args.float {
        DynImage::from(Image::<f32>::from_shape_vec(&shape(size, channels), data)?)
    } else {
        let data = data.into_iter().map(|v| (v * 255.0).round() as u8).collect();
        DynImage::from(Image::<u8>::from_shape_vec(&shape(size, channels), data)?)
    };

    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::ParallelRows,
    };

    log::info!(
        "{} ({code}) on a {} image of shape {:?}",
        args.conversion,
        image.dtype(),
        image.shape()
    );

    let output = color_spaces::cvt_color_with(&image, code, strategy)?;

    println!(
        "{}: {:?} {} -> {:?} {}",
        args.conversion,
        image.shape(),
        image.dtype(),
        output.shape(),
        output.dtype()
    );

    Ok(())
}

fn shape(size: ImageSize, channels: usize) -> Vec<usize> {
    match channels {
        1 => vec![size.height, size.width],
        _ => vec![size.height, size.width, channels],
    }
}
