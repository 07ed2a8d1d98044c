use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::coerce::ScalarValue;
use super::key::Key;

/// Scalar type of a parameter, as written in `#param`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Float,
    Int,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
        })
    }
}

impl FromStr for ValueKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "float" => Ok(ValueKind::Float),
            "int" => Ok(ValueKind::Int),
            "bool" => Ok(ValueKind::Bool),
            _ => Err(()),
        }
    }
}

/// A parameter value of any kind, used where the kind is only known at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Int(i32),
    Bool(bool),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Float(v) => write!(f, "{v}"),
            ParameterValue::Int(v) => write!(f, "{v}"),
            ParameterValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// How an action combines its value with the parameter's current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationType {
    Add,
    Multiply,
    Set,
}

impl FromStr for ModificationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(ModificationType::Add),
            "multiply" => Ok(ModificationType::Multiply),
            "set" => Ok(ModificationType::Set),
            _ => Err(()),
        }
    }
}

/// Named action slots, triggered by UI controls rather than keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ActionType {
    OnAdd,
    OnSubtract,
}

impl FromStr for ActionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "onadd" => Ok(ActionType::OnAdd),
            "onsubtract" => Ok(ActionType::OnSubtract),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Action<T> {
    pub value: T,
    pub modification: ModificationType,
}

impl<T: ScalarValue> Action<T> {
    pub fn new(value: T, modification: ModificationType) -> Self {
        Self {
            value,
            modification,
        }
    }

    /// Unclamped result of applying this action to `current`.
    pub fn apply(&self, current: T) -> T {
        T::modify(current, self.value, self.modification)
    }
}

/// Bounds, default and bound actions of one parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParameterData<T> {
    pub min: T,
    pub max: T,
    pub default: T,
    pub actions: BTreeMap<ActionType, Action<T>>,
    pub keybindings: BTreeMap<Key, Action<T>>,
}

impl<T: ScalarValue> ParameterData<T> {
    pub fn new(min: T, max: T, default: T) -> Self {
        Self {
            min,
            max,
            default,
            actions: BTreeMap::new(),
            keybindings: BTreeMap::new(),
        }
    }

    /// Apply `action` and clamp to the parameter's bounds.
    pub fn apply(&self, action: &Action<T>, current: T) -> T {
        action.apply(current).clamp_to(self.min, self.max)
    }
}

/// Tagged payload of a parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    Float(ParameterData<f32>),
    Int(ParameterData<i32>),
    Bool(ParameterData<bool>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    /// Shader uniform slot.
    pub location: i32,
    #[serde(flatten)]
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn float(name: &str, location: i32, data: ParameterData<f32>) -> Self {
        Self::with_kind(name, location, ParameterKind::Float(data))
    }

    pub fn int(name: &str, location: i32, data: ParameterData<i32>) -> Self {
        Self::with_kind(name, location, ParameterKind::Int(data))
    }

    pub fn bool(name: &str, location: i32, default: bool) -> Self {
        Self::with_kind(
            name,
            location,
            ParameterKind::Bool(ParameterData::new(false, true, default)),
        )
    }

    fn with_kind(name: &str, location: i32, kind: ParameterKind) -> Self {
        Self {
            name: name.to_string(),
            location,
            kind,
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self.kind {
            ParameterKind::Float(_) => ValueKind::Float,
            ParameterKind::Int(_) => ValueKind::Int,
            ParameterKind::Bool(_) => ValueKind::Bool,
        }
    }

    pub fn default_value(&self) -> ParameterValue {
        match &self.kind {
            ParameterKind::Float(d) => d.default.into_value(),
            ParameterKind::Int(d) => d.default.into_value(),
            ParameterKind::Bool(d) => d.default.into_value(),
        }
    }

    pub fn bounds(&self) -> (ParameterValue, ParameterValue) {
        match &self.kind {
            ParameterKind::Float(d) => (d.min.into_value(), d.max.into_value()),
            ParameterKind::Int(d) => (d.min.into_value(), d.max.into_value()),
            ParameterKind::Bool(d) => (d.min.into_value(), d.max.into_value()),
        }
    }

    /// New value after invoking the action slot `slot`, or `None` if the slot is empty
    /// or `current` is of the wrong kind.
    pub fn trigger(&self, slot: ActionType, current: ParameterValue) -> Option<ParameterValue> {
        match &self.kind {
            ParameterKind::Float(d) => step(d, d.actions.get(&slot), current),
            ParameterKind::Int(d) => step(d, d.actions.get(&slot), current),
            ParameterKind::Bool(d) => step(d, d.actions.get(&slot), current),
        }
    }

    /// New value after pressing `key`, or `None` if nothing is bound to it.
    pub fn press(&self, key: Key, current: ParameterValue) -> Option<ParameterValue> {
        match &self.kind {
            ParameterKind::Float(d) => step(d, d.keybindings.get(&key), current),
            ParameterKind::Int(d) => step(d, d.keybindings.get(&key), current),
            ParameterKind::Bool(d) => step(d, d.keybindings.get(&key), current),
        }
    }

    pub fn keys(&self) -> Vec<Key> {
        match &self.kind {
            ParameterKind::Float(d) => d.keybindings.keys().copied().collect(),
            ParameterKind::Int(d) => d.keybindings.keys().copied().collect(),
            ParameterKind::Bool(d) => d.keybindings.keys().copied().collect(),
        }
    }
}

fn step<T: ScalarValue>(
    data: &ParameterData<T>,
    action: Option<&Action<T>>,
    current: ParameterValue,
) -> Option<ParameterValue> {
    let action = action?;
    let current = T::from_value(current)?;
    Some(data.apply(action, current).into_value())
}

/// A texture input bound to a shader resource slot. Slot 0 is the source image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextureParameter {
    pub name: String,
    pub binding: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!("FLOAT".parse::<ValueKind>(), Ok(ValueKind::Float));
        assert_eq!("Multiply".parse::<ModificationType>(), Ok(ModificationType::Multiply));
        assert_eq!("onsubtract".parse::<ActionType>(), Ok(ActionType::OnSubtract));
        assert!("double".parse::<ValueKind>().is_err());
        assert!("OnClick".parse::<ActionType>().is_err());
    }

    #[test]
    fn press_applies_and_clamps() {
        let mut data = ParameterData::new(0.0f32, 1.0, 0.5);
        data.keybindings
            .insert(Key::Up, Action::new(0.375, ModificationType::Add));
        let param = Parameter::float("angle", 3, data);

        let once = param.press(Key::Up, ParameterValue::Float(0.5));
        assert_eq!(once, Some(ParameterValue::Float(0.875)));
        let twice = param.press(Key::Up, ParameterValue::Float(0.875));
        assert_eq!(twice, Some(ParameterValue::Float(1.0)));
        assert_eq!(param.press(Key::Down, ParameterValue::Float(0.5)), None);
    }

    #[test]
    fn trigger_ignores_mismatched_value_kind() {
        let mut data = ParameterData::new(0, 10, 5);
        data.actions
            .insert(ActionType::OnSubtract, Action::new(1, ModificationType::Add));
        let param = Parameter::int("steps", 0, data);

        assert_eq!(
            param.trigger(ActionType::OnSubtract, ParameterValue::Int(5)),
            Some(ParameterValue::Int(6))
        );
        assert_eq!(param.trigger(ActionType::OnSubtract, ParameterValue::Bool(true)), None);
        assert_eq!(param.trigger(ActionType::OnAdd, ParameterValue::Int(5)), None);
    }

    #[test]
    fn serializes_with_type_tag_and_plain_values() {
        let mut data = ParameterData::new(0.0f32, 1.0, 0.5);
        data.keybindings
            .insert(Key::OemOpenBrackets, Action::new(-0.25, ModificationType::Add));
        let json = serde_json::to_value(Parameter::float("angle", 3, data)).unwrap();

        assert_eq!(json["type"], "float");
        assert_eq!(json["location"], 3);
        assert_eq!(json["default"], 0.5);
        assert_eq!(json["keybindings"]["OemOpenBrackets"]["modification"], "add");
        assert_eq!(json["keybindings"]["OemOpenBrackets"]["value"], -0.25);
    }

    #[test]
    fn bool_parameters_have_fixed_bounds() {
        let param = Parameter::bool("invert", 1, true);
        assert_eq!(
            param.bounds(),
            (ParameterValue::Bool(false), ParameterValue::Bool(true))
        );
        assert_eq!(param.default_value(), ParameterValue::Bool(true));
        assert_eq!(param.value_kind(), ValueKind::Bool);
    }
}
