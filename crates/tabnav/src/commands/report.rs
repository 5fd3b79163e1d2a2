use std::fmt::Debug;

use serde::Serialize;

use tabnav_core::{Area, NavigationEvent, RouterSnapshot, StackEvent, StackSnapshot};

use super::helpers::RunOutcome;
use crate::color;

#[derive(Serialize)]
struct RunReport<'a> {
    source: &'a str,
    steps: usize,
    state: &'a RouterSnapshot,
    events: &'a [NavigationEvent],
}

pub fn print_outcome(
    source: &str,
    outcome: &RunOutcome,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        let report = RunReport {
            source,
            steps: outcome.steps,
            state: &outcome.snapshot,
            events: &outcome.events,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        color::bold("Ran"),
        color::route(source),
        color::muted(&format!("({} steps)", outcome.steps))
    );
    println!();
    print_state(&outcome.snapshot);
    println!();
    print_events(&outcome.events);
    Ok(())
}

fn print_state(state: &RouterSnapshot) {
    println!("{}", color::bold("State"));
    println!("  Flow        {}", color::flow(&state.flow.to_string()));
    println!("  Tab         {}", color::flow(&state.selected_tab.to_string()));
    println!("  Onboarding  {}", stack_line(&state.onboarding));
    println!("  Home        {}", stack_line(&state.home));
    println!("  Profile     {}", stack_line(&state.profile));

    match &state.paywall {
        Some(paywall) => println!(
            "  Paywall     {} {}",
            color::overlay(&paywall.offer_title),
            color::muted(&format!("(source: {})", paywall.source))
        ),
        None => println!("  Paywall     {}", color::muted("none")),
    }
    match &state.success {
        Some(success) => println!(
            "  Success     {} {}",
            color::overlay(&success.title),
            color::muted(&format!(
                "({}, {})",
                success.presentation_style, success.primary_action
            ))
        ),
        None => println!("  Success     {}", color::muted("none")),
    }
}

fn print_events(events: &[NavigationEvent]) {
    let header = color::bold(&format!("Events ({})", events.len()));
    let summary = area_summary(events);
    if summary.is_empty() {
        println!("{header}");
    } else {
        println!("{header}  {}", color::muted(&summary));
    }
    for (index, nav_event) in events.iter().enumerate() {
        let detail = event_detail(nav_event);
        if detail.is_empty() {
            println!("  {:>3}  {}", index + 1, nav_event.kind());
        } else {
            println!(
                "  {:>3}  {}  {}",
                index + 1,
                nav_event.kind(),
                color::muted(&detail)
            );
        }
    }
}

/// Stack event counts per area, e.g. `home 2, profile 1`. Areas without events are left out.
fn area_summary(events: &[NavigationEvent]) -> String {
    Area::ALL
        .iter()
        .filter_map(|area| {
            let count = events
                .iter()
                .filter(|nav_event| nav_event.area() == Some(*area))
                .count();
            (count > 0).then(|| format!("{area} {count}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn stack_line<R: Debug>(stack: &StackSnapshot<R>) -> String {
    if stack.entries.is_empty() {
        return color::muted("root");
    }
    let path = std::iter::once("root".to_string())
        .chain(stack.entries.iter().map(|route| format!("{route:?}")))
        .collect::<Vec<_>>()
        .join(" > ");
    format!(
        "{}  {}",
        color::route(&path),
        color::muted(&format!("({} deep)", stack.depth))
    )
}

fn stack_detail<R: Debug>(change: &StackEvent<R>) -> String {
    match change {
        StackEvent::Pushed { route } | StackEvent::PoppedTo { route } => format!("{route:?}"),
        StackEvent::Popped { count } => format!("count={count}"),
        StackEvent::PoppedToRoot => String::new(),
    }
}

fn event_detail(nav_event: &NavigationEvent) -> String {
    match nav_event {
        NavigationEvent::Onboarding(change) => stack_detail(change),
        NavigationEvent::Home(change) => stack_detail(change),
        NavigationEvent::Profile(change) => stack_detail(change),
        NavigationEvent::TabSelected { tab } => tab.to_string(),
        NavigationEvent::PaywallPresented { source } => format!("source={source}"),
        NavigationEvent::PaywallDismissed | NavigationEvent::SuccessDismissed => String::new(),
        NavigationEvent::SuccessPresented { style } => style.to_string(),
        NavigationEvent::SuccessPrimaryHandled { action } => action.to_string(),
        NavigationEvent::CommandHandled { command } => command.to_string(),
    }
}
