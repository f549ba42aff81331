//! GDScript class parser
//!
//! Extracts class metadata from script text with a handful of line-anchored
//! patterns. Each construct is matched independently over the whole text;
//! anything that does not match is simply absent from the descriptor.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::{debug, span, trace, Level};

use super::database::{ClassDescriptor, Method, Parameter, Signal};
use crate::core::Parser;

/// `### namespace <name>` as the very first thing in the file
static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s*namespace\s+(\w+)").unwrap());

static EXTENDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"extends (\w+)").unwrap());

static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"class_name (\w+)").unwrap());

static SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^signal\s+(\w+)\s*(?:\(([^)]*)\))?").unwrap());

static FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^func\s+(\w+)\s*\(([^)]*)\)\s*(?:->\s*(\w+))?").unwrap()
});

/// Property declarations stop at `=` so default values are not read as types
static VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^var\s+([^\n=]+)").unwrap());

/// GDScript parser
pub struct GdScriptParser;

impl GdScriptParser {
    pub fn new() -> Self {
        Self
    }

    /// Every `class_name` declared anywhere in the text
    ///
    /// Used by the project scan to build the known-class set. A file may
    /// declare several; only the first one names the file's own class.
    pub fn declared_class_names(input: &str) -> impl Iterator<Item = &str> {
        CLASS_NAME
            .captures_iter(input)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn parse_namespace(&self, input: &str, descriptor: &mut ClassDescriptor) {
        if let Some(caps) = NAMESPACE.captures(input) {
            descriptor.set_namespace(&caps[1]);
        }
    }

    fn parse_extends(&self, input: &str, descriptor: &mut ClassDescriptor) {
        if let Some(caps) = EXTENDS.captures(input) {
            descriptor.set_parent_class(&caps[1]);
        }
    }

    fn parse_class_name(&self, input: &str, descriptor: &mut ClassDescriptor) {
        if let Some(name) = Self::declared_class_names(input).next() {
            descriptor.set_declared_name(name);
        }
    }

    fn parse_signals(&self, input: &str, descriptor: &mut ClassDescriptor) {
        for caps in SIGNAL.captures_iter(input) {
            let args = caps.get(2).map_or("", |m| m.as_str());
            let signal = Signal::new(&caps[1]).with_parameters(Parameter::parse_list(args));
            trace!(signal = %signal.name, params = signal.parameters.len(), "Parsed signal");
            descriptor.add_signal(signal);
        }
    }

    fn parse_methods(&self, input: &str, descriptor: &mut ClassDescriptor) {
        for caps in FUNC.captures_iter(input) {
            let mut method = Method::new(&caps[1]).with_parameters(Parameter::parse_list(&caps[2]));
            if let Some(ret) = caps.get(3) {
                method = method.with_return_type(ret.as_str());
            }
            trace!(method = %method.name, params = method.parameters.len(), "Parsed method");
            descriptor.add_method(method);
        }
    }

    fn parse_properties(&self, input: &str, descriptor: &mut ClassDescriptor) {
        for caps in VAR.captures_iter(input) {
            for property in Parameter::parse_list(&caps[1]) {
                trace!(property = %property.name, "Parsed property");
                descriptor.add_property(property);
            }
        }
    }
}

impl Default for GdScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ClassDescriptor> for GdScriptParser {
    fn parse(&self, input: &str, descriptor: &mut ClassDescriptor) -> Result<()> {
        let parse_span = span!(Level::DEBUG, "parse_gdscript", input_len = input.len());
        let _enter = parse_span.enter();

        self.parse_namespace(input, descriptor);
        self.parse_extends(input, descriptor);
        self.parse_class_name(input, descriptor);
        self.parse_signals(input, descriptor);
        self.parse_methods(input, descriptor);
        self.parse_properties(input, descriptor);

        debug!(
            class_name = ?descriptor.declared_name(),
            extends = ?descriptor.parent_class(),
            signals = descriptor.signals().len(),
            methods = descriptor.methods().len(),
            properties = descriptor.properties().len(),
            "Parsed script"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gdscript"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        NAMESPACE.is_match(input)
            || EXTENDS.is_match(input)
            || CLASS_NAME.is_match(input)
            || SIGNAL.is_match(input)
            || FUNC.is_match(input)
            || VAR.is_match(input)
    }
}
