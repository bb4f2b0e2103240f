//! Fill an A4 frame with a pattern and report what came out.
//!
//! Usage: cargo run --example frame_fill --features tracing -- [family] [rotation-degrees]

use penframe::pattern::{PatternPrimitive, PatternSpec};
use penframe::{Angle, Orientation, PageSize, PaperSize, PatternFamily};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let family: PatternFamily = args.next().as_deref().unwrap_or("chevron").parse()?;
    let rotation = args.next().and_then(|r| r.parse::<f64>().ok()).unwrap_or(0.0);

    let page = PageSize::from_paper(PaperSize::A4, Orientation::Portrait);
    let spec = PatternSpec::for_page(family, page).with_rotation(Angle(rotation));
    spec.validate()?;

    let group = spec.generate();
    let (mut lines, mut dots, mut squares) = (0, 0, 0);
    for primitive in &group.primitives {
        match primitive {
            PatternPrimitive::Line(_) => lines += 1,
            PatternPrimitive::Dot { .. } => dots += 1,
            PatternPrimitive::Square { .. } => squares += 1,
        }
    }

    println!("{family} on {}x{} at {rotation} deg", page.width, page.height);
    println!("  lines: {lines}, dots: {dots}, squares: {squares}");
    if let Some(extent) = group.extent() {
        println!(
            "  extent: ({:.1}, {:.1}) to ({:.1}, {:.1}) px",
            extent.left,
            extent.top,
            extent.right(),
            extent.bottom()
        );
    }
    // Rotated output can overhang the paper; only the safe-area clip goes to the plotter.
    let safe = page.default_safe_area(&group.scaler);
    let plottable = group.clip_to_safe_area(&safe);
    println!("  ready to plot (clipped to safe area): {}", plottable.len());
    Ok(())
}
