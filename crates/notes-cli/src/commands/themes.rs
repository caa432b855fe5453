use notes_core::{Theme, ThemeState};

pub fn run_themes(state: &ThemeState, selection: Option<Theme>) {
    if let Some(theme) = selection {
        state.set_theme(theme);
    }

    for line in format_theme_lines(state.current()) {
        println!("{line}");
    }
}

pub fn format_theme_lines(current: Theme) -> Vec<String> {
    Theme::ALL
        .iter()
        .map(|theme| {
            let marker = if *theme == current { '*' } else { ' ' };
            format!("{marker} {theme}")
        })
        .collect()
}
