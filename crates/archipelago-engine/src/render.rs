//! Plain-text rendering of a [`View`].

use archipelago_types::{GameOverView, MeterReading, OnboardingView, PlayingView, View};

/// Number of cells in a meter bar.
const BAR_WIDTH: u32 = 20;

/// Render a view as terminal text, ending with a newline.
pub fn render(view: &View) -> String {
    let lines = match view {
        View::Onboarding(view) => onboarding_lines(view),
        View::Playing(view) => playing_lines(view),
        View::GameOver(view) => game_over_lines(view),
    };
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn onboarding_lines(view: &OnboardingView) -> Vec<String> {
    let name = if view.player_name.is_empty() {
        "Character Name: (type `name <your name>`)".to_owned()
    } else {
        format!("Character Name: {}", view.player_name)
    };
    let start = if view.can_start {
        "Type `start` to confirm & start."
    } else {
        "Enter a name to enable start."
    };
    vec![
        format!("== {} ==", view.title),
        format!(
            "Avatar {} / {}  {}   (left / right to change)",
            view.avatar_position, view.avatar_count, view.avatar_image
        ),
        name,
        start.to_owned(),
    ]
}

fn playing_lines(view: &PlayingView) -> Vec<String> {
    let mut lines = vec![
        format!("== {} ==", view.title),
        format!("DAY {}  {}  Money: {}", view.day, view.clock, view.money),
        format!("{}  [{}]", view.greeting, view.avatar_image),
    ];
    lines.extend(view.meters.iter().map(meter_line));
    lines.push("Activities: eat | sleep | clean | play".to_owned());
    lines
}

fn game_over_lines(view: &GameOverView) -> Vec<String> {
    let mut lines = vec![
        "GAME OVER".to_owned(),
        format!("You survived {} days", view.days_survived),
    ];
    if let Some(meter) = view.cause {
        lines.push(format!("{} ran out.", meter.label()));
    }
    lines.push("Type `restart` to play again.".to_owned());
    lines
}

/// One meter as `Label      [#####---------------]  25%`.
fn meter_line(reading: &MeterReading) -> String {
    format!(
        "{:<10} [{}] {:>3}%",
        reading.meter.label(),
        bar(reading.percent),
        reading.percent
    )
}

fn bar(percent: u32) -> String {
    let filled = percent
        .min(100)
        .saturating_mul(BAR_WIDTH)
        .checked_div(100)
        .unwrap_or(0);
    let empty = BAR_WIDTH.saturating_sub(filled);
    let mut bar = "#".repeat(usize::try_from(filled).unwrap_or(0));
    bar.push_str(&"-".repeat(usize::try_from(empty).unwrap_or(0)));
    bar
}
