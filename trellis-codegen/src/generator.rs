//! Element, state and instance code generation.

use indexmap::IndexMap;
use tracing::{debug, trace};
use trellis_ir::{Element, Instance, Project, State, Variable, VariableValue};

use crate::{
    ElementOutputSettings, GeneratorSettings, ProjectOutputSettings, Result,
    builder::CodeBuilder,
    emit::{self, Context},
    resolve::{Resolver, Scope},
    target::{self, TargetProfile, VisualApi},
};

/// Generates initialization code for the elements of a [`Project`].
///
/// The project is only read; every call returns a fresh string.
///
/// # Example
///
/// ```
/// use trellis_codegen::{Generator, testing};
///
/// let project = testing::button_screen();
/// let screen = project.element("ButtonScreen").unwrap();
/// let code = Generator::new(&project)
///     .generate_element(screen, &Default::default(), &Default::default())
///     .unwrap();
///
/// assert!(code.contains("partial class ButtonScreenRuntime"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    project: &'a Project,
    settings: GeneratorSettings,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            settings: GeneratorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// Target an element generates for, from its resolved `IsFormsControl`.
    pub fn element_api(&self, element: &Element) -> Result<VisualApi> {
        let is_forms = Resolver::new(self.project).resolve_as(
            Scope::container(element),
            &element.default_state,
            "IsFormsControl",
            "a bool",
            VariableValue::as_bool,
        )?;
        Ok(VisualApi::from_forms_flag(is_forms.unwrap_or(false)))
    }

    /// Target an instance generates for, falling back to its container's.
    pub fn instance_api(
        &self,
        container: &Element,
        instance: &Instance,
        fallback: VisualApi,
    ) -> Result<VisualApi> {
        let is_forms = Resolver::new(self.project).resolve_as(
            Scope::instance(container, instance),
            &container.default_state,
            "IsFormsControl",
            "a bool",
            VariableValue::as_bool,
        )?;
        Ok(is_forms.map_or(fallback, VisualApi::from_forms_flag))
    }

    /// Generate the complete partial class for an element.
    pub fn generate_element(
        &self,
        element: &Element,
        element_settings: &ElementOutputSettings,
        project_settings: &ProjectOutputSettings,
    ) -> Result<String> {
        let api = self.element_api(element)?;
        trace!(element = %element.name, %api, "generating element");

        let profile = target::profile(api);
        let mut out = CodeBuilder::default();

        let usings = [
            project_settings.common_usings.as_deref(),
            element_settings.usings.as_deref(),
        ];
        for block in usings.into_iter().flatten() {
            if !block.trim().is_empty() {
                out.push_lines(block);
            }
        }

        let namespace = element_settings
            .namespace
            .as_deref()
            .filter(|ns| !ns.trim().is_empty());
        if let Some(namespace) = namespace {
            out.push_line(&format!("namespace {}", namespace)).push_open();
        }

        out.push_line(&format!("partial class {}", profile.class_name(&element.name)))
            .push_open();

        write_state_enums(element, &mut out);
        self.write_state_properties(element, api, &mut out)?;

        for instance in element.declared_instances() {
            let instance_profile = target::profile(self.instance_api(element, instance, api)?);
            out.push_line(&declaration(instance_profile, instance));
        }
        for field in profile.extra_fields(element) {
            out.push_line(&field);
        }
        out.push_blank();

        self.write_exposed_accessors(element, api, &mut out)?;
        self.write_constructor(element, api, &mut out)?;

        out.push_line("partial void CustomInitialize();").push_close();
        if namespace.is_some() {
            out.push_close();
        }

        Ok(out.build())
    }

    /// Generate the assignments that apply `state` to an element.
    ///
    /// `api` is used for the element's own variables and for instances that
    /// do not pick a target themselves.
    pub fn generate_state(&self, element: &Element, state: &State, api: VisualApi) -> Result<String> {
        let mut out = CodeBuilder::default();
        self.write_state(element, state, api, &mut out)?;
        Ok(out.build())
    }

    /// Generate the declaration, instantiation and assignments of one instance.
    pub fn generate_instance(
        &self,
        instance: &Instance,
        element: &Element,
        api: VisualApi,
    ) -> Result<String> {
        let profile = target::profile(api);
        let mut out = CodeBuilder::default();
        out.push_line(&declaration(profile, instance))
            .push_line(&instantiation(profile, instance));
        self.write_instance_block(element, instance, api, &mut out)?;
        Ok(out.build())
    }

    fn write_state_properties(
        &self,
        element: &Element,
        api: VisualApi,
        out: &mut CodeBuilder,
    ) -> Result<()> {
        for category in &element.categories {
            let name = &category.name;
            let property = category.state_type_name();

            out.push_blank()
                .push_line(&format!("{} m{};", name, property))
                .push_line(&format!("public {} {}", name, property))
                .push_open()
                .push_line(&format!("get => m{};", property))
                .push_line("set")
                .push_open()
                .push_line(&format!("m{} = value;", property))
                .push_line("switch (value)")
                .push_open();

            for state in &category.states {
                out.push_line(&format!("case {}.{}:", name, state.name))
                    .push_indent();
                self.write_state(element, state, api, out)?;
                out.push_line("break;").push_dedent();
            }

            out.push_close().push_close().push_close();
        }
        Ok(())
    }

    fn write_exposed_accessors(
        &self,
        element: &Element,
        api: VisualApi,
        out: &mut CodeBuilder,
    ) -> Result<()> {
        let resolver = Resolver::new(self.project);

        for variable in &element.default_state.variables {
            let Some(exposed_as) = variable.exposed_as.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            let Some(instance) = variable.source_object().and_then(|s| element.instance(s)) else {
                debug!(variable = %variable.name, "exposed variable does not belong to an instance");
                continue;
            };

            let profile = target::profile(self.instance_api(element, instance, api)?);
            let ctx = Context::new(
                resolver,
                &self.settings,
                Scope::instance(element, instance),
                &element.default_state,
            )?;
            let type_name = match ctx.state_category(variable)? {
                Some((owner, category)) => {
                    format!("{}.{}", profile.class_name(&owner.name), category.name)
                }
                None => variable.type_name.clone(),
            };
            let property = format!(
                "{}.{}",
                instance.name,
                profile.property_name(variable.root_name())
            );

            out.push_line(&format!("public {} {}", type_name, exposed_as))
                .push_open()
                .push_line(&format!("get => {};", property))
                .push_line(&format!("set => {} = value;", property))
                .push_close()
                .push_blank();
        }
        Ok(())
    }

    fn write_constructor(&self, element: &Element, api: VisualApi, out: &mut CodeBuilder) -> Result<()> {
        let profile = target::profile(api);
        profile.constructor_preamble(element, out);

        self.write_container_assignments(element, profile, out)?;
        out.push_blank();

        for instance in element.declared_instances() {
            let instance_profile = target::profile(self.instance_api(element, instance, api)?);
            out.push_line(&instantiation(instance_profile, instance));
        }
        out.push_blank();

        for instance in &element.instances {
            let instance_api = self.instance_api(element, instance, api)?;
            self.write_instance_block(element, instance, instance_api, out)?;
            out.push_blank();
        }

        out.push_line("CustomInitialize();");
        profile.constructor_postamble(out);
        out.push_close();
        Ok(())
    }

    /// Default-state assignments to the element itself.
    fn write_container_assignments(
        &self,
        element: &Element,
        profile: &dyn TargetProfile,
        out: &mut CodeBuilder,
    ) -> Result<()> {
        let resolver = Resolver::new(self.project);
        let state = &element.default_state;
        let ctx = Context::new(resolver, &self.settings, Scope::container(element), state)?;
        let base = self.project.base_of(element);

        let mut variables = Vec::new();
        for variable in state.variables.iter().filter(|v| v.source_object().is_none() && v.is_set()) {
            let keep = match base {
                Some(base) => resolver.defines(base, variable.root_name())?,
                // Without a base, only state selections can be checked.
                None => !variable.name.ends_with("State") || ctx.state_category(variable)?.is_some(),
            };
            if keep {
                variables.push(variable);
            } else {
                debug!(element = %element.name, variable = %variable.name, "skipping orphaned variable");
            }
        }

        for line in profile.group(&ctx, &mut variables)? {
            out.push_line(&line);
        }
        emit::emit_all(&ctx, profile, &variables, out)
    }

    /// Name line, grouped statements, assignments and parenting for one instance.
    fn write_instance_block(
        &self,
        element: &Element,
        instance: &Instance,
        api: VisualApi,
        out: &mut CodeBuilder,
    ) -> Result<()> {
        let profile = target::profile(api);
        let resolver = Resolver::new(self.project);
        let state = &element.default_state;

        if let Some(line) = profile.name_line(instance) {
            out.push_line(&line);
        }

        let mut variables = match resolver.instance_base(instance) {
            Some(base) => included_variables(resolver, state, Some(&instance.name), base)?,
            None => {
                debug!(
                    instance = %instance.name,
                    base = %instance.base_type,
                    "base type not found, skipping instance variables"
                );
                Vec::new()
            }
        };
        // Parent last so scroll containers see their child's final bounds.
        variables.sort_by_key(|v| v.root_name() == "Parent");
        let has_parent = variables.iter().any(|v| emit::is_parent_assignment(v));

        let ctx = Context::new(resolver, &self.settings, Scope::instance(element, instance), state)?;
        for line in profile.group(&ctx, &mut variables)? {
            out.push_line(&line);
        }
        emit::emit_all(&ctx, profile, &variables, out)?;

        if !has_parent && !instance.defined_by_base {
            for line in profile.default_parent_lines(instance) {
                out.push_line(&line);
            }
        }
        Ok(())
    }

    /// One pass over a state's variables, grouped by the scope they belong to.
    fn write_state(
        &self,
        element: &Element,
        state: &State,
        api: VisualApi,
        out: &mut CodeBuilder,
    ) -> Result<()> {
        let resolver = Resolver::new(self.project);

        let mut groups: IndexMap<Option<&str>, Vec<&Variable>> = IndexMap::new();
        for variable in state.variables.iter().filter(|v| v.root_name() != "Parent") {
            groups.entry(variable.source_object()).or_default().push(variable);
        }

        for (source, variables) in groups {
            let (scope, base, scope_api) = match source {
                None => (
                    Scope::container(element),
                    Some(self.project.base_of(element).unwrap_or(element)),
                    api,
                ),
                Some(name) => match element.instance(name) {
                    Some(instance) => (
                        Scope::instance(element, instance),
                        resolver.instance_base(instance),
                        self.instance_api(element, instance, api)?,
                    ),
                    None => {
                        debug!(element = %element.name, instance = name, "skipping variables of unknown instance");
                        continue;
                    }
                },
            };
            let Some(base) = base else {
                debug!(scope = scope.target(), "base type not found, skipping state variables");
                continue;
            };

            let mut kept = Vec::new();
            for variable in variables.into_iter().filter(|v| v.is_set()) {
                if resolver.defines(base, variable.root_name())? {
                    kept.push(variable);
                } else {
                    debug!(variable = %variable.name, base = %base.name, "skipping orphaned variable");
                }
            }

            let profile = target::profile(scope_api);
            let ctx = Context::new(resolver, &self.settings, scope, state)?;
            for line in profile.group(&ctx, &mut kept)? {
                out.push_line(&line);
            }
            emit::emit_all(&ctx, profile, &kept, out)?;
        }
        Ok(())
    }
}

fn write_state_enums(element: &Element, out: &mut CodeBuilder) {
    for category in &element.categories {
        out.push_line(&format!("public enum {}", category.name)).push_open();
        for state in &category.states {
            out.push_line(&format!("{},", state.name));
        }
        out.push_close();
    }
}

fn declaration(profile: &dyn TargetProfile, instance: &Instance) -> String {
    format!(
        "public {} {} {{ get; private set; }}",
        profile.class_name(&instance.base_type),
        instance.name
    )
}

fn instantiation(profile: &dyn TargetProfile, instance: &Instance) -> String {
    format!("{} = new {}();", instance.name, profile.class_name(&instance.base_type))
}

/// Set variables of one scope whose property exists on `base`.
fn included_variables<'s>(
    resolver: Resolver<'_>,
    state: &'s State,
    scope: Option<&str>,
    base: &Element,
) -> Result<Vec<&'s Variable>> {
    let mut variables = Vec::new();
    for variable in state
        .variables
        .iter()
        .filter(|v| v.source_object() == scope && v.is_set())
    {
        if resolver.defines(base, variable.root_name())? {
            variables.push(variable);
        } else {
            debug!(variable = %variable.name, base = %base.name, "skipping orphaned variable");
        }
    }
    Ok(variables)
}
