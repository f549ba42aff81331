//! PlantUML renderer for class descriptors
//!
//! Produces one `@startuml … @enduml` document per script. The output format
//! is consumed by PlantUML directly, so every line is emitted exactly.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::database::{ClassDescriptor, Method, Parameter, Signal};
use crate::core::{RenderConfig, Renderer};

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

pub const START_UML: &str = "@startuml";
pub const END_UML: &str = "@enduml";

/// Replace every run of non-word characters with a single underscore
pub fn sanitize_identifier(name: &str) -> String {
    NON_WORD.replace_all(name, "_").into_owned()
}

fn join_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(Parameter::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders one script's descriptor as a PlantUML class diagram
pub struct PlantUmlRenderer {
    file_name: String,
    config: RenderConfig,
}

impl PlantUmlRenderer {
    /// Renderer for the script with the given file name
    pub fn new(file_name: impl Into<String>) -> Self {
        Self::with_config(file_name, RenderConfig::default())
    }

    pub fn with_config(file_name: impl Into<String>, config: RenderConfig) -> Self {
        Self {
            file_name: file_name.into(),
            config,
        }
    }

    /// Name the class is rendered under
    ///
    /// The declared `class_name` if present, otherwise the sanitized file
    /// name behind the synthetic prefix.
    pub fn class_name(&self, descriptor: &ClassDescriptor) -> String {
        match descriptor.declared_name() {
            Some(name) => name.to_string(),
            None => format!(
                "{}{}",
                self.config.synthetic_prefix,
                sanitize_identifier(&self.file_name)
            ),
        }
    }

    fn property_line(&self, property: &Parameter) -> String {
        format!("{}+{}", self.config.member_indent, property)
    }

    fn method_line(&self, method: &Method) -> String {
        let args = join_parameters(&method.parameters);
        match method.return_type.as_deref() {
            Some(ret) if ret != self.config.void_type => {
                format!("{}+{}({}): {}", self.config.member_indent, method.name, args, ret)
            }
            _ => format!("{}+{}({})", self.config.member_indent, method.name, args),
        }
    }

    fn signal_line(&self, signal: &Signal) -> String {
        let args = join_parameters(&signal.parameters);
        format!("{}+{}({}) <<signal>>", self.config.member_indent, signal.name, args)
    }

    fn class_block(&self, class_name: &str, descriptor: &ClassDescriptor) -> String {
        let mut lines = vec![format!("class {} {{", class_name)];
        lines.extend(descriptor.properties().iter().map(|p| self.property_line(p)));
        lines.extend(descriptor.methods().iter().map(|m| self.method_line(m)));
        lines.extend(descriptor.signals().iter().map(|s| self.signal_line(s)));
        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl Renderer<ClassDescriptor> for PlantUmlRenderer {
    type Output = String;

    fn render(&self, descriptor: &ClassDescriptor) -> Result<String> {
        let class_name = self.class_name(descriptor);
        let mut uml = vec![START_UML.to_string()];

        let namespace = descriptor.namespace();
        if let Some(namespace) = namespace {
            uml.push(format!(
                "package \"{}\" {} {{",
                namespace, self.config.package_color
            ));
        }

        uml.push(self.class_block(&class_name, descriptor));

        if namespace.is_some() {
            uml.push("}".to_string());
        }

        if let Some(parent) = descriptor.parent_class() {
            uml.push(format!("{} <|-- {}", parent, class_name));
        }

        for association in descriptor.associations() {
            uml.push(format!("{} --> {} : 1", class_name, association));
        }

        uml.push(END_UML.to_string());
        Ok(uml.join("\n"))
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "puml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("player.gd"), "player_gd");
        assert_eq!(sanitize_identifier("my - script.gd"), "my_script_gd");
        assert_eq!(sanitize_identifier("already_fine"), "already_fine");
    }

    #[test]
    fn test_empty_descriptor_renders_bare_block() {
        let renderer = PlantUmlRenderer::new("empty.gd");
        let output = renderer.render(&ClassDescriptor::new()).unwrap();
        assert_eq!(output, "@startuml\nclass __GD__empty_gd {\n}\n@enduml");
    }

    #[test]
    fn test_declared_name_is_used() {
        let mut descriptor = ClassDescriptor::new();
        descriptor.set_declared_name("Slime");
        let renderer = PlantUmlRenderer::new("slime.gd");
        assert_eq!(renderer.class_name(&descriptor), "Slime");
    }

    #[test]
    fn test_member_lines() {
        let mut descriptor = ClassDescriptor::new();
        descriptor.set_declared_name("Turret");
        descriptor.add_property(Parameter::new("range").with_type("float"));
        descriptor.add_property(Parameter::new("target"));
        descriptor.add_method(Method::new("aim").with_parameters(vec![
            Parameter::new("at").with_type("Vector3"),
            Parameter::new("snap"),
        ]));
        descriptor.add_method(Method::new("reset").with_return_type("void"));
        descriptor.add_method(Method::new("ready").with_return_type("bool"));
        descriptor.add_signal(
            Signal::new("fired").with_parameters(vec![Parameter::new("count").with_type("int")]),
        );

        let output = PlantUmlRenderer::new("turret.gd").render(&descriptor).unwrap();
        let expected = "@startuml\n\
class Turret {\n  \
+range: float\n  \
+target\n  \
+aim(at: Vector3, snap)\n  \
+reset()\n  \
+ready(): bool\n  \
+fired(count: int) <<signal>>\n\
}\n\
@enduml";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_namespace_wraps_class_only() {
        let mut descriptor = ClassDescriptor::new();
        descriptor.set_namespace("Combat");
        descriptor.set_declared_name("Sword");
        descriptor.set_parent_class("Weapon");

        let output = PlantUmlRenderer::new("sword.gd").render(&descriptor).unwrap();
        let expected = "@startuml\n\
package \"Combat\" #DDDDDD {\n\
class Sword {\n\
}\n\
}\n\
Weapon <|-- Sword\n\
@enduml";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_association_lines_follow_inheritance() {
        let mut descriptor = ClassDescriptor::new();
        descriptor.set_declared_name("Player");
        descriptor.set_parent_class("Node3D");
        descriptor.add_association("Weapon");
        descriptor.add_association("Enemy");

        let output = PlantUmlRenderer::new("player.gd").render(&descriptor).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            &lines[3..],
            &[
                "Node3D <|-- Player",
                "Player --> Enemy : 1",
                "Player --> Weapon : 1",
                "@enduml"
            ]
        );
    }

    #[test]
    fn test_custom_config() {
        let config = RenderConfig::new()
            .with_synthetic_prefix("Script_")
            .with_package_color("#FFEECC");
        let mut descriptor = ClassDescriptor::new();
        descriptor.set_namespace("Ui");

        let output = PlantUmlRenderer::with_config("hud.gd", config)
            .render(&descriptor)
            .unwrap();
        assert!(output.contains("package \"Ui\" #FFEECC {"));
        assert!(output.contains("class Script_hud_gd {"));
    }

    #[test]
    fn test_renderer_identity() {
        let renderer = PlantUmlRenderer::new("a.gd");
        assert_eq!(renderer.name(), "plantuml");
        assert_eq!(renderer.format(), "puml");
        assert_eq!(renderer.version(), "0.1.0");
    }
}
