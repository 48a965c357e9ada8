use std::fs::File;

use foldout::{find_element_mut, Element, ExpandAxis, ExpandState, Style};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("expand.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = Element::container().id("root").child(
        Element::container()
            .id("panel")
            .style(
                Style::new()
                    .transition("height 0.3s ease")
                    .overflow("visible")
                    .height("120px"),
            )
            .child(Element::text("Details live here").id("body")),
    );

    let mut state = ExpandState::new();

    // Remember how the panel looked before collapsing it.
    state.capture(&root, "panel", ExpandAxis::Vertical);

    {
        let panel = find_element_mut(&mut root, "panel").expect("panel exists");
        panel.style.transition = Some("none".to_string());
        panel.style.overflow = Some("hidden".to_string());
        panel.style.height = Some("0px".to_string());
        println!("collapsed: height={}", panel.style.effective_height());
    }

    if let Some(parent) = state.resolve_parent(&root, "panel") {
        println!("panel sits under #{}", parent.id);
    }

    // Transition finished: put the captured declarations back.
    let panel = find_element_mut(&mut root, "panel").expect("panel exists");
    state.restore(panel);
    println!(
        "restored: height={} overflow={} transition={}",
        panel.style.effective_height(),
        panel.style.effective_overflow(),
        panel.style.effective_transition(),
    );
    assert!(!state.has_pending());

    Ok(())
}
