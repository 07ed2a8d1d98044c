use std::collections::BTreeMap;
use std::path::Path;

use super::coerce::{parse_index, ScalarValue};
use super::definition::FilterDefinition;
use super::directive::{self, Directive};
use super::error::{DirectiveError, FilterError};
use super::key::Key;
use super::parameter::{
    Action, ActionType, ModificationType, Parameter, ParameterData, ParameterKind,
    TextureParameter, ValueKind,
};
use super::tokenizer::{split_fields, split_setting};

/// Accumulates a filter definition one line at a time.
pub struct FilterLoader {
    name: String,
    description: String,
    is_separable: bool,
    is_single_invocation: bool,
    parameters: Vec<Parameter>,
    textures: Vec<TextureParameter>,
    source: String,
}

impl FilterLoader {
    /// `name` is the display name until a `#setting title` replaces it.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            is_separable: false,
            is_single_invocation: true,
            parameters: Vec::new(),
            textures: Vec::new(),
            source: String::new(),
        }
    }

    pub fn process_line(&mut self, line: &str) -> Result<(), DirectiveError> {
        let Some((directive, args)) = directive::classify(line) else {
            self.source.push_str(line);
            self.source.push('\n');
            return Ok(());
        };

        match directive {
            Directive::Param => self.handle_param(&split_fields(args))?,
            Directive::ParamProp => self.handle_paramprop(&split_fields(args))?,
            Directive::Texture => self.handle_texture(&split_fields(args))?,
            Directive::Keybinding => self.handle_keybinding(&split_fields(args))?,
            Directive::Setting => {
                let (fields, rest) = split_setting(args);
                self.handle_setting(&fields, rest)?
            }
        }
        // keep the line so compiler diagnostics point at the right place
        self.source.push('\n');
        Ok(())
    }

    pub fn finish(self) -> FilterDefinition {
        log::info!(
            "Loaded filter '{}' ({} parameters, {} textures)",
            self.name,
            self.parameters.len(),
            self.textures.len()
        );
        FilterDefinition {
            name: self.name,
            description: self.description,
            is_separable: self.is_separable,
            is_single_invocation: self.is_single_invocation,
            parameters: self.parameters,
            textures: self.textures,
            source: self.source,
        }
    }

    fn handle_param(&mut self, fields: &[&str]) -> Result<(), DirectiveError> {
        require(Directive::Param, fields, 3)?;
        let name = fields[0];
        let location = parse_index("location", fields[1])?;
        let kind: ValueKind = fields[2]
            .parse()
            .map_err(|_| unknown("parameter type", fields[2]))?;

        if self.parameters.iter().any(|p| p.name == name) {
            log::warn!(
                "parameter '{}' declared more than once; references resolve to the first declaration",
                name
            );
        }

        let param = match kind {
            ValueKind::Float => Parameter::float(name, location, bounded(fields)?),
            ValueKind::Int => Parameter::int(name, location, bounded(fields)?),
            ValueKind::Bool => {
                Parameter::bool(name, location, optional(fields, 3)?.unwrap_or(false))
            }
        };
        log::debug!("#param {} ({}) at location {}", name, kind, location);
        self.parameters.push(param);
        Ok(())
    }

    fn handle_texture(&mut self, fields: &[&str]) -> Result<(), DirectiveError> {
        require(Directive::Texture, fields, 2)?;
        let binding = parse_index("binding", fields[1])?;
        if binding == 0 {
            return Err(DirectiveError::ReservedBinding);
        }
        if self.textures.iter().any(|t| t.binding == binding) {
            return Err(DirectiveError::DuplicateBinding(binding));
        }

        log::debug!("#texture {} at binding {}", fields[0], binding);
        self.textures.push(TextureParameter {
            name: fields[0].to_string(),
            binding,
        });
        Ok(())
    }

    fn handle_setting(&mut self, fields: &[&str], rest: &str) -> Result<(), DirectiveError> {
        require(Directive::Setting, fields, 2)?;
        match fields[0].to_ascii_lowercase().as_str() {
            "sepa" => self.is_separable = fields[1].eq_ignore_ascii_case("true"),
            "singleinvocation" => {
                self.is_single_invocation = fields[1].eq_ignore_ascii_case("true")
            }
            "title" => self.name = rest.to_string(),
            "description" => self.description = rest.to_string(),
            _ => return Err(unknown("setting", fields[0])),
        }
        Ok(())
    }

    fn handle_paramprop(&mut self, fields: &[&str]) -> Result<(), DirectiveError> {
        require(Directive::ParamProp, fields, 2)?;
        let idx = self.find_parameter(fields[0])?;
        let slot: ActionType = fields[1]
            .parse()
            .map_err(|_| unknown("paramprop action", fields[1]))?;
        require(Directive::ParamProp, fields, 4)?;
        let modification = parse_modification(fields[3])?;

        let (value, param) = (fields[2], &mut self.parameters[idx]);
        match &mut param.kind {
            ParameterKind::Float(d) => insert(&mut d.actions, slot, value, modification)?,
            ParameterKind::Int(d) => insert(&mut d.actions, slot, value, modification)?,
            ParameterKind::Bool(d) => insert(&mut d.actions, slot, value, modification)?,
        }
        log::debug!("#paramprop {} {:?} {} {:?}", param.name, slot, value, modification);
        Ok(())
    }

    fn handle_keybinding(&mut self, fields: &[&str]) -> Result<(), DirectiveError> {
        require(Directive::Keybinding, fields, 4)?;
        let idx = self.find_parameter(fields[0])?;
        let modification = parse_modification(fields[3])?;
        let key: Key = fields[1]
            .parse()
            .map_err(|_| DirectiveError::InvalidKey(fields[1].to_string()))?;

        let (value, param) = (fields[2], &mut self.parameters[idx]);
        match &mut param.kind {
            ParameterKind::Float(d) => insert(&mut d.keybindings, key, value, modification)?,
            ParameterKind::Int(d) => insert(&mut d.keybindings, key, value, modification)?,
            ParameterKind::Bool(d) => insert(&mut d.keybindings, key, value, modification)?,
        }
        log::debug!("#keybinding {} {} {} {:?}", param.name, key, value, modification);
        Ok(())
    }

    fn find_parameter(&self, name: &str) -> Result<usize, DirectiveError> {
        self.parameters
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| DirectiveError::UnresolvedParameter(name.to_string()))
    }
}

fn require(directive: Directive, fields: &[&str], expected: usize) -> Result<(), DirectiveError> {
    if fields.len() < expected {
        return Err(DirectiveError::NotEnoughArguments {
            directive: directive.prefix(),
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn unknown(what: &'static str, value: &str) -> DirectiveError {
    DirectiveError::UnknownKeyword {
        what,
        value: value.to_string(),
    }
}

fn parse_modification(field: &str) -> Result<ModificationType, DirectiveError> {
    field.parse().map_err(|_| unknown("modification", field))
}

fn optional<T: ScalarValue>(fields: &[&str], idx: usize) -> Result<Option<T>, DirectiveError> {
    fields.get(idx).map(|f| T::coerce(f)).transpose()
}

/// `default, min, max` from fields 3..6, each falling back to the type's zero or extrema.
fn bounded<T: ScalarValue>(fields: &[&str]) -> Result<ParameterData<T>, DirectiveError> {
    let default = optional(fields, 3)?.unwrap_or(T::ZERO);
    let min = optional(fields, 4)?.unwrap_or(T::MIN);
    let max = optional(fields, 5)?.unwrap_or(T::MAX);
    Ok(ParameterData::new(min, max, default))
}

/// Store an action, replacing whatever was bound to `key` before.
fn insert<K: Ord, T: ScalarValue>(
    map: &mut BTreeMap<K, Action<T>>,
    key: K,
    value: &str,
    modification: ModificationType,
) -> Result<(), DirectiveError> {
    map.insert(key, Action::new(T::coerce(value)?, modification));
    Ok(())
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// start another line.
fn lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &rest[..idx];
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

fn parse_lines<'a>(
    name: &str,
    lines: impl Iterator<Item = &'a str>,
) -> Result<FilterDefinition, FilterError> {
    let mut loader = FilterLoader::new(name);
    for (idx, line) in lines.enumerate() {
        loader
            .process_line(line)
            .map_err(|source| FilterError::Directive {
                line: idx + 1,
                source,
            })?;
    }
    Ok(loader.finish())
}

/// Parse filter script text. `name` is used as the title unless the script sets one.
pub fn parse_str(name: &str, text: &str) -> Result<FilterDefinition, FilterError> {
    parse_lines(name, lines(text))
}

/// Read and parse a filter script. The default title is the file name.
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn load_file(path: &Path) -> Result<FilterDefinition, FilterError> {
    let bytes = std::fs::read(path).map_err(|source| FilterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_lines(&name, lines(&text))
}
