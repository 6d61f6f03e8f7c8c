use aurora::{AuroraConfig, EventScript, PageSpec, simulate};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AuroraConfig::from_json_str(include_str!("config.json"))?;
    let script = EventScript::from_json_str(include_str!("script.json"))?;
    let page = PageSpec::demo();

    for frames in [1u64, 30, 60, 120] {
        let doc = simulate(&config, &page, frames, &script)?;
        let preloader = doc.get_element_by_id("preloader").is_some();
        println!(
            "frame {frames}: scroll_y={:.1} preloader={preloader} user_tab={}",
            doc.scroll_y(),
            doc.has_body_class("user-tab"),
        );
    }

    Ok(())
}
