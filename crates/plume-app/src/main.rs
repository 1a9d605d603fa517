use std::io::{self, BufRead, Write};

use anyhow::Result;
use plume_app::config::Config;
use plume_app::pages::Page;
use plume_app::routes;
use plume_nav::{Navigation, NavigationController, NavigationEvent, ScrollPosition};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e:#}, using defaults");
        Config::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .init();

    println!("plume starting...");
    info!(app = %config.app.name, start_path = %config.routing.start_path, "booting shell");

    let router = routes::router(config.routing.case_insensitive);
    println!("Registered {} routes", router.routes().len());
    for route in router.routes() {
        println!("  {} -> {}", route.pattern, route.page);
    }

    let mut nav = NavigationController::new(router);

    // The "mount": resolve the configured start path as the initial load.
    match nav.navigate(NavigationEvent::initial(config.routing.start_path.clone())) {
        Ok(outcome) => print_outcome(&outcome),
        Err(err) => println!("no page resolved: {err}"),
    }

    run_shell(&mut nav)
}

/// Line-oriented navigation shell standing in for a browser host.
///
/// `go`/`push` emit link and programmatic events, `back`/`forward` emit
/// traversals against the history stack, `scroll` reports the current
/// offset the way a real host would before the user leaves a page.
fn run_shell(nav: &mut NavigationController<Page>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("plume> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "go" => match words.next() {
                Some(path) => dispatch(nav, NavigationEvent::link(path)),
                None => println!("usage: go <path>"),
            },
            "push" => match words.next() {
                Some(path) => dispatch(nav, NavigationEvent::programmatic(path)),
                None => println!("usage: push <path>"),
            },
            "back" => {
                let target = nav
                    .history()
                    .peek_back()
                    .or_else(|| nav.history().current())
                    .map(|entry| entry.path.clone());
                match target {
                    Some(path) => dispatch(nav, NavigationEvent::back(path)),
                    None => println!("history is empty"),
                }
            }
            "forward" => {
                let target = nav
                    .history()
                    .peek_forward()
                    .or_else(|| nav.history().current())
                    .map(|entry| entry.path.clone());
                match target {
                    Some(path) => dispatch(nav, NavigationEvent::forward(path)),
                    None => println!("history is empty"),
                }
            }
            "scroll" => {
                let parsed = words
                    .next()
                    .zip(words.next())
                    .and_then(|(x, y)| Some((x.parse().ok()?, y.parse().ok()?)));
                match parsed {
                    Some((x, y)) => {
                        nav.record_scroll(ScrollPosition::new(x, y));
                        println!("recorded scroll x={x} y={y}");
                    }
                    None => println!("usage: scroll <x> <y>"),
                }
            }
            "url" => match words.next() {
                Some(name) => {
                    let params: Vec<(&str, &str)> =
                        words.filter_map(|pair| pair.split_once('=')).collect();
                    match nav.router().url_for_params(name, &params) {
                        Some(url) => println!("{url}"),
                        None => println!("no url for `{name}` with those params"),
                    }
                }
                None => println!("usage: url <route-name> [key=value ...]"),
            },
            "routes" => {
                for route in nav.router().routes() {
                    println!("  {} -> {}", route.pattern, route.page);
                }
            }
            "history" => {
                let current = nav.history().current().map(|entry| entry.id);
                for entry in nav.history().entries() {
                    let marker = if Some(entry.id) == current { "*" } else { " " };
                    println!(" {marker} {}", entry.path);
                }
            }
            "help" => {
                println!("commands: go <path> | push <path> | back | forward");
                println!("          scroll <x> <y> | url <name> [k=v ...] | routes | history | quit");
            }
            "quit" | "exit" => break,
            other => println!("unknown command `{other}` (try `help`)"),
        }
    }

    Ok(())
}

fn dispatch(nav: &mut NavigationController<Page>, event: NavigationEvent) {
    match nav.navigate(event) {
        Ok(outcome) => print_outcome(&outcome),
        Err(err) => println!("no page resolved: {err}"),
    }
}

fn print_outcome(outcome: &Navigation<Page>) {
    let mut params: Vec<_> = outcome.route.params.iter().collect();
    params.sort();
    let params = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ");

    if params.is_empty() {
        println!(
            "active page: {} (scroll x={} y={})",
            outcome.route.page, outcome.scroll.x, outcome.scroll.y
        );
    } else {
        println!(
            "active page: {} [{}] (scroll x={} y={})",
            outcome.route.page, params, outcome.scroll.x, outcome.scroll.y
        );
    }
}
