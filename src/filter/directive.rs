/// Directive lines recognised in a filter script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    Param,
    ParamProp,
    Texture,
    Setting,
    Keybinding,
}

/// Checked in order; longer prefixes come first so `#paramprop` is never read as `#param`.
const DIRECTIVES: [Directive; 5] = [
    Directive::Keybinding,
    Directive::ParamProp,
    Directive::Texture,
    Directive::Setting,
    Directive::Param,
];

impl Directive {
    pub fn prefix(self) -> &'static str {
        match self {
            Directive::Param => "#param",
            Directive::ParamProp => "#paramprop",
            Directive::Texture => "#texture",
            Directive::Setting => "#setting",
            Directive::Keybinding => "#keybinding",
        }
    }
}

/// Split a line into its directive and the argument text after the prefix.
/// Returns `None` for shader source lines.
pub fn classify(line: &str) -> Option<(Directive, &str)> {
    DIRECTIVES
        .iter()
        .find_map(|&d| line.strip_prefix(d.prefix()).map(|args| (d, args)))
}
