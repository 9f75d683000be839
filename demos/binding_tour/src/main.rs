use anyhow::{Context, bail};
use tether_core::{CollectionChange, ObservableState, PropertyName};
use tether_models::{GreetingState, SelectionState};
use web_time::{Duration, Instant};

const DEFAULT_TICKS: u32 = 3;

fn parse_ticks(mut args: impl Iterator<Item = String>) -> anyhow::Result<u32> {
    let mut ticks = DEFAULT_TICKS;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ticks" => {
                let v = args.next().context("--ticks needs a value")?;
                ticks = v
                    .parse()
                    .with_context(|| format!("--ticks expects a number, got {v:?}"))?;
            }
            other => bail!("unknown argument {other:?} (usage: binding_tour [--ticks N])"),
        }
    }
    Ok(ticks)
}

/// Re-reads exactly the property that was named, the way a bound view would.
fn render_colors(s: &SelectionState, prop: PropertyName) -> String {
    match prop {
        SelectionState::SELECTED_COLOR => s.selected_color().to_string(),
        SelectionState::SELECTED_FAVORITE => s
            .selected_favorite()
            .map_or_else(|| "<none>".to_string(), ToString::to_string),
        SelectionState::IS_REMOVE_FAVORITE_VISIBLE => s.is_remove_favorite_visible().to_string(),
        SelectionState::FAVORITES => format!("{} item(s)", s.favorites().len()),
        other => format!("<unbound {other}>"),
    }
}

fn render_greeting(g: &GreetingState, prop: PropertyName) -> String {
    match prop {
        GreetingState::USER_NAME => format!("{:?}", g.user_name()),
        GreetingState::IS_SUBMIT_ALLOWED => g.is_submit_allowed().to_string(),
        GreetingState::IS_NAME_NEEDED => g.is_name_needed().to_string(),
        GreetingState::GREETING_VISIBILITY => {
            format!("{:?} (Hello, {}!)", g.greeting_visibility(), g.user_name())
        }
        GreetingState::CURRENT_TIME => g.current_time(),
        other => format!("<unbound {other}>"),
    }
}

fn tour_colors() {
    let mut colors = SelectionState::new();
    colors.subscribe(|s, prop| println!("[colors] {prop} = {}", render_colors(s, prop)));
    colors.subscribe_favorites(|change| match change {
        CollectionChange::Added { index, item } => println!("[colors] favorites[{index}] += {item}"),
        CollectionChange::Removed { index, item } => {
            println!("[colors] favorites[{index}] -= {item}")
        }
        other => println!("[colors] favorites: {other:?}"),
    });

    let Some(blue) = colors.entry("blue").cloned() else {
        log::warn!("catalog has no blue entry; skipping color tour");
        return;
    };
    colors.select_color(blue.clone());
    colors.add_selected_to_favorites();
    colors.select_favorite(Some(blue));
    colors.remove_favorite();
    colors.select_favorite(None);
}

fn tour_greeting(ticks: u32) {
    let mut greeting = GreetingState::new();
    greeting.subscribe(|g, prop| println!("[greeting] {prop} = {}", render_greeting(g, prop)));

    greeting.submit();
    greeting.set_user_name("Ad");
    greeting.set_user_name("Ada");
    greeting.set_user_name("Ada");
    greeting.submit();

    // stand-in for the page's one-second timer
    let period = Duration::from_secs(1);
    let mut next = Instant::now() + period;
    for _ in 0..ticks {
        let now = Instant::now();
        if next > now {
            std::thread::sleep(next - now);
        }
        greeting.tick();
        next += period;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let ticks = parse_ticks(std::env::args().skip(1))?;
    log::info!("binding tour, {ticks} clock tick(s)");

    tour_colors();
    tour_greeting(ticks);
    Ok(())
}
