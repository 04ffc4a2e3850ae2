//! Snapshot tests for element code generation.
//!
//! These tests verify that the generated code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use trellis_codegen::{
    ElementOutputSettings, Generator, GeneratorSettings, ProjectOutputSettings, VisualApi, testing,
};
use trellis_ir::{
    DimensionUnit, Element, HorizontalAlignment, Instance, PositionUnit, Project, State,
    Variable, VerticalAlignment,
};

fn generate(project: &Project, element: &str) -> String {
    let element = project.element(element).expect("element not found");
    Generator::new(project)
        .generate_element(
            element,
            &ElementOutputSettings::default(),
            &ProjectOutputSettings::default(),
        )
        .expect("generation failed")
}

fn instance_fragment(project: &Project, element: &str, instance: &str, api: VisualApi) -> String {
    let element = project.element(element).expect("element not found");
    let instance = element.instance(instance).expect("instance not found");
    Generator::new(project)
        .generate_instance(instance, element, api)
        .expect("generation failed")
}

#[test]
fn test_button_screen_native() {
    let code = generate(&testing::button_screen(), "ButtonScreen");
    insta::assert_snapshot!("button_screen_native", code);
}

#[test]
fn test_button_screen_forms() {
    let code = generate(&testing::button_screen_forms(), "ButtonScreen");
    insta::assert_snapshot!("button_screen_forms", code);
}

#[test]
fn test_button_state_category() {
    let code = generate(&testing::button_state(), "Controls/Button");
    insta::assert_snapshot!("button_state_category", code);
}

#[test]
fn test_button_state_has_one_enum_field_and_switch() {
    let code = generate(&testing::button_state(), "Controls/Button");

    assert_eq!(code.matches("public enum ButtonState").count(), 1);
    assert_eq!(code.matches("ButtonState mButtonStateState;").count(), 1);
    assert_eq!(code.matches("switch (value)").count(), 1);
    assert_eq!(code.matches("case ButtonState.").count(), 2);
    assert!(code.contains("        Enabled,\n        Disabled,\n"));
}

#[test]
fn test_generation_is_deterministic() {
    let project = testing::button_screen_forms();
    let first = generate(&project, "ButtonScreen");
    let second = generate(&project, "ButtonScreen");

    testing::assert_content_eq(&first, &second);
}

#[test]
fn test_unscoped_orphan_is_suppressed() {
    let project = Project::with_standards().with(
        Element::component("Panel")
            .with_base("Container")
            .with_variable(Variable::new("Text", "not mine"))
            .with_variable(Variable::new("Visible", false)),
    );

    let code = generate(&project, "Panel");

    assert!(code.contains("this.Visible = false;"));
    assert!(!code.contains("not mine"));
}

#[test]
fn test_grouping_is_exclusive() {
    let project = Project::with_standards().with(
        Element::screen("Main")
            .with_variable(Variable::new("IsFormsControl", true))
            .with_instance(Instance::new("Title", "Text"))
            .with_variable(Variable::new("Title.X", 10.0))
            .with_variable(Variable::new("Title.Width", 200.0))
            .with_variable(Variable::new("Title.Red", 0.0))
            .with_variable(Variable::new("Title.X Origin", HorizontalAlignment::Left)),
    );

    let code = instance_fragment(&project, "Main", "Title", VisualApi::Forms);

    assert_eq!(code.matches("SetLayoutBounds").count(), 1);
    assert_eq!(code.matches("TextColor").count(), 1);
    for individual in ["PixelX", "WidthRequest", "Title.Red", "XOrigin"] {
        assert!(!code.contains(individual), "{individual} emitted individually");
    }
}

#[test]
fn test_centered_position_canonicalizes() {
    let project = Project::with_standards().with(
        Element::screen("Main")
            .with_instance(Instance::new("Centered", "Container"))
            .with_instance(Instance::new("Offset", "Container"))
            .with_variable(Variable::new("Centered.X Units", PositionUnit::PixelsFromCenterX))
            .with_variable(Variable::new("Centered.X Origin", HorizontalAlignment::Center))
            .with_variable(Variable::new("Offset.X", 12.0))
            .with_variable(Variable::new("Offset.X Units", PositionUnit::PixelsFromCenterX))
            .with_variable(Variable::new("Offset.X Origin", HorizontalAlignment::Center)),
    );
    let settings = GeneratorSettings {
        adjust_for_density: false,
        ..Default::default()
    };
    let main = project.element("Main").unwrap();
    let generator = Generator::new(&project).with_settings(settings);

    let centered = generator
        .generate_instance(main.instance("Centered").unwrap(), main, VisualApi::Forms)
        .unwrap();
    let offset = generator
        .generate_instance(main.instance("Offset").unwrap(), main, VisualApi::Forms)
        .unwrap();

    assert!(centered.contains("new Rectangle(0.5f, 0f, 150f, 150f)"));
    assert!(centered.contains("AbsoluteLayoutFlags.XProportional"));
    assert!(offset.contains("new Rectangle(12f, 0f, 150f, 150f)"));
    assert!(!offset.contains("SetLayoutFlags"));
}

#[test]
fn test_percentage_sizes() {
    let project = Project::with_standards().with(
        Element::screen("Main")
            .with_instance(Instance::new("Half", "Container"))
            .with_instance(Instance::new("Full", "Container"))
            .with_variable(Variable::new("Half.Width", 50.0))
            .with_variable(Variable::new("Half.Width Units", DimensionUnit::Percentage))
            .with_variable(Variable::new("Full.Height", 100.0))
            .with_variable(Variable::new("Full.Height Units", DimensionUnit::Percentage)),
    );

    let half = instance_fragment(&project, "Main", "Half", VisualApi::Forms);
    let full = instance_fragment(&project, "Main", "Full", VisualApi::Forms);

    insta::assert_snapshot!(half, @r#"
    public Container Half { get; private set; }
    Half = new Container();
    Half.AutomationId = "Half";
    AbsoluteLayout.SetLayoutBounds(Half, new Rectangle(0f/DeviceDisplay.MainDisplayInfo.Density, 0f/DeviceDisplay.MainDisplayInfo.Density, 0.5f, 150f/DeviceDisplay.MainDisplayInfo.Density));
    AbsoluteLayout.SetLayoutFlags(Half, AbsoluteLayoutFlags.WidthProportional);
    MainLayout.Children.Add(Half);
    "#);
    assert!(full.contains(", 1f));"));
    assert!(full.contains("AbsoluteLayoutFlags.HeightProportional"));
}

#[test]
fn test_suppressed_variables_leave_one_blank_line() {
    let project = Project::with_standards().with(
        Element::screen("Main")
            .with_instance(Instance::new("Title", "Text"))
            .with_variable(Variable::new("Title.HasEvents", false))
            .with_variable(Variable::new("Title.ExposeChildrenEvents", false))
            .with_variable(Variable::new("Title.Text", "Hi")),
    );

    let code = instance_fragment(&project, "Main", "Title", VisualApi::Native);

    insta::assert_snapshot!(code, @r#"
    public TextRuntime Title { get; private set; }
    Title = new TextRuntime();
    Title.Name = "Title";


    Title.Text = "Hi";
    this.Children.Add(Title);
    "#);
}

#[test]
fn test_forms_alignment_and_visibility() {
    let project = Project::with_standards().with(
        Element::screen("Main")
            .with_instance(Instance::new("Title", "Text"))
            .with_variable(Variable::new("Title.HorizontalAlignment", HorizontalAlignment::Right))
            .with_variable(Variable::new("Title.VerticalAlignment", VerticalAlignment::Center))
            .with_variable(Variable::new("Title.Visible", false))
            .with_variable(Variable::new("Title.Font Size", 12.0)),
    );

    let code = instance_fragment(&project, "Main", "Title", VisualApi::Forms);

    assert!(code.contains("Title.HorizontalTextAlignment = TextAlignment.End;"));
    assert!(code.contains("Title.VerticalTextAlignment = TextAlignment.Center;"));
    assert!(code.contains("Title.IsVisible = false;"));
    assert!(code.contains("Title.FontSize = 12f / DeviceDisplay.MainDisplayInfo.Density;"));
}

#[test]
fn test_state_fragment() {
    let project = testing::button_state();
    let button = project.element("Controls/Button").unwrap();
    let disabled = button
        .category("ButtonState")
        .and_then(|c| c.state("Disabled"))
        .unwrap();

    let code = Generator::new(&project)
        .generate_state(button, disabled, VisualApi::Native)
        .unwrap();

    insta::assert_snapshot!(code, @r"
    this.Visible = false;
    Label.Alpha = 128f;
    ");
}

#[test]
fn test_forms_state_case_merges_text_color() {
    let mut project = testing::button_state();
    let mut button = project.element("Controls/Button").unwrap().clone();
    button
        .default_state
        .variables
        .insert(0, Variable::new("IsFormsControl", true));
    project.insert(button);

    let code = generate(&project, "Controls/Button");
    let start = code.find("case ButtonState.Disabled:").unwrap();
    let end = start + code[start..].find("break;").unwrap();
    let disabled = &code[start..end];

    assert_eq!(disabled.matches("TextColor").count(), 1);
    assert!(disabled.contains("Label.TextColor = Color.FromRgba(255, 255, 255, 128);"));
    for channel in ["Red", "Green", "Blue", "Alpha"] {
        assert!(!disabled.contains(&format!("Label.{} ", channel)), "{channel} leaked");
    }
}

#[test]
fn test_state_fragment_skips_parent() {
    let project = testing::button_screen();
    let screen = project.element("ButtonScreen").unwrap();
    let state = State::new("Moved")
        .with(Variable::new("PlayButton.Parent", "Elsewhere"))
        .with(Variable::new("PlayButton.X", 4.0));

    let code = Generator::new(&project)
        .generate_state(screen, &state, VisualApi::Native)
        .unwrap();

    assert_eq!(code, "PlayButton.X = 4f;\n");
}
