//! CLI application: annotate detected faces on a JPEG image.
//!
//! Usage:
//!   face-annotate <image>             # Annotate + human-readable report
//!   face-annotate <image> --json      # JSON report
//!
//! The annotated image is written to out.jpeg in the working directory.

use clap::Parser;
use face_annotate::{
    draw_rect_outline, format_detection, set_message_sink, EngineConfig, FaceEngine, GrayFrame,
    Rect, RustfaceEngine,
};
use serde::Serialize;
use std::path::PathBuf;

/// Fixed output filename, written to the working directory.
const OUT_IMG: &str = "out.jpeg";

#[derive(Parser, Debug)]
#[command(name = "face-annotate")]
#[command(author, version, about = "Annotate detected faces and report per-face attributes", long_about = None)]
struct Args {
    /// Input JPEG file
    #[arg(required = true)]
    image: PathBuf,

    /// Face detector model path
    #[arg(long, default_value = "seeta_fd_frontal_v1.0.bin")]
    detector: PathBuf,

    /// Minimum face size for detection
    #[arg(long, default_value = "96")]
    min_face_size: u32,

    /// Output report as JSON
    #[arg(short, long)]
    json: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    engine: String,
    image: String,
    width: u32,
    height: u32,
    faces_detected: usize,
    faces: Vec<FaceOutput>,
}

#[derive(Serialize)]
struct FaceOutput {
    index: usize,
    region: Rect,
    gender: Option<String>,
    age: Option<f32>,
    happy: Option<f32>,
    sad: Option<f32>,
    angry: Option<f32>,
    surprised: Option<f32>,
}

fn main() {
    // Missing-argument usage goes to stdout; other parse errors keep
    // clap's stderr reporting.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == clap::error::ErrorKind::MissingRequiredArgument => {
            let mut cmd = <Args as clap::CommandFactory>::command();
            println!("{}", cmd.render_usage());
            std::process::exit(2);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Engine-internal log lines go to stdout, ahead of the report.
    set_message_sink(Box::new(|msg| println!("{}", msg)));

    if args.verbose {
        eprintln!("Loading image {:?}...", args.image);
    }
    let mut img = image::open(&args.image)
        .map_err(|e| {
            face_annotate::Error::Decode(format!("{}: {}", args.image.display(), e))
        })?
        .to_rgb8();
    let (width, height) = img.dimensions();

    let gray = GrayFrame::from_rgb(&img);

    let config = EngineConfig {
        min_face_size: args.min_face_size,
        ..EngineConfig::default()
    };
    let mut engine = RustfaceEngine::open(&args.detector, &config)?;
    println!("Engine version: {}", engine.version());

    let detections = engine.process(gray.raw_frame(), 0)?;
    if args.verbose {
        eprintln!("Found {} face(s)", detections.len());
    }

    for detection in &detections {
        draw_rect_outline(&mut img, detection.region);
    }

    if args.json {
        let faces = detections
            .iter()
            .enumerate()
            .map(|(i, det)| FaceOutput {
                index: i,
                region: det.region,
                gender: det.attribute("Gender").map(String::from),
                age: det.rating("Age"),
                happy: det.rating("Happy"),
                sad: det.rating("Sad"),
                angry: det.rating("Angry"),
                surprised: det.rating("Surprised"),
            })
            .collect();
        let output = Output {
            engine: engine.version(),
            image: args.image.display().to_string(),
            width,
            height,
            faces_detected: detections.len(),
            faces,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (i, detection) in detections.iter().enumerate() {
            println!("{}", format_detection(i, detection));
        }
    }

    img.save(OUT_IMG)
        .map_err(|e| face_annotate::Error::Encode(format!("{}: {}", OUT_IMG, e)))?;
    println!("Results are written to {}", OUT_IMG);

    Ok(())
}
