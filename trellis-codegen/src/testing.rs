//! Sample projects and assertions shared by unit and integration tests.

use trellis_ir::{DimensionUnit, Element, Instance, Project, State, StateCategory, Variable};

/// A screen with one text instance sized to half the screen width.
pub fn button_screen() -> Project {
    Project::with_standards().with(play_screen())
}

/// [`button_screen`] with the screen marked as a forms control.
pub fn button_screen_forms() -> Project {
    let mut screen = play_screen();
    screen
        .default_state
        .variables
        .insert(0, Variable::new("IsFormsControl", true));
    Project::with_standards().with(screen)
}

/// A button component with an `Enabled`/`Disabled` state category.
pub fn button_state() -> Project {
    let category = StateCategory::new("ButtonState")
        .with_state(State::new("Enabled").with(Variable::new("Visible", true)))
        .with_state(
            State::new("Disabled")
                .with(Variable::new("Visible", false))
                .with(Variable::new("Label.Alpha", 128.0)),
        );

    Project::with_standards().with(
        Element::component("Controls/Button")
            .with_base("Container")
            .with_instance(Instance::new("Label", "Text"))
            .with_variable(Variable::new("Label.Text", "OK"))
            .with_category(category),
    )
}

fn play_screen() -> Element {
    Element::screen("ButtonScreen")
        .with_instance(Instance::new("PlayButton", "Text"))
        .with_variable(Variable::new("PlayButton.Width", 50.0))
        .with_variable(Variable::new("PlayButton.Width Units", DimensionUnit::Percentage))
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }
        if diff.is_empty() {
            diff.push_str("  (line endings differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
