use aurora::{AuroraConfig, EventScript, FrameIndex, PageSpec, Viewport, render_frame, save_png};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AuroraConfig {
        viewport: Viewport::new(640, 360),
        seed: 7,
        ..AuroraConfig::default()
    };
    let frame = render_frame(
        &config,
        &PageSpec::demo(),
        FrameIndex(120),
        &EventScript::page_lifecycle(),
    )?;

    let out_path = std::path::Path::new("target").join("render_one_frame.png");
    save_png(&out_path, &frame, [10, 12, 20, 255])?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
