//! Loading filter scripts from disk.

use std::fs;
use std::path::PathBuf;

use filterscript::filter::{
    library, load_file, Action, ActionType, DirectiveError, FilterError, Key, ModificationType,
    ParameterKind, ParameterValue,
};

const GAMMA: &str = "#version 450\r
#setting title, Gamma, contrast and brightness\r
#setting description, Applies a gamma curve\r
#param gamma, 0, float, 2.2, 0.1, 10.0\r
#paramprop gamma, OnAdd, 0.1, add\r
#paramprop gamma, OnSubtract, -0.1, add\r
#keybinding gamma, G, 2, multiply\r
#param invert, 1, bool\r
#keybinding invert, I, true, add\r
#texture lut, 1\r
layout(binding = 0) uniform sampler2D src;\r
void main() {}\r
";

fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn loads_complete_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "gamma.comp", GAMMA);

    let def = load_file(&path).unwrap();
    assert_eq!(def.name, "Gamma, contrast and brightness");
    assert_eq!(def.description, "Applies a gamma curve");
    assert_eq!(def.parameters.len(), 2);
    assert_eq!(def.texture_bindings().get("lut"), Some(&1));

    let gamma = def.parameter("gamma").unwrap();
    let ParameterKind::Float(data) = &gamma.kind else {
        panic!("gamma should be a float parameter");
    };
    assert_eq!(
        data.actions[&ActionType::OnSubtract],
        Action::new(-0.1, ModificationType::Add)
    );
    assert_eq!(
        gamma.press(Key::G, ParameterValue::Float(8.0)),
        Some(ParameterValue::Float(10.0))
    );

    let invert = def.parameter("invert").unwrap();
    assert_eq!(
        invert.press(Key::I, ParameterValue::Bool(false)),
        Some(ParameterValue::Bool(true))
    );

    // CRLF stripped, directives blanked, one source line per file line
    assert_eq!(def.line_count(), GAMMA.lines().count());
    assert!(def.source.starts_with("#version 450\n\n\n"));
    assert!(!def.source.contains('\r'));
    assert!(def.source.ends_with("void main() {}\n"));
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.comp");
    let mut bytes = b"// (c) 2017 M".to_vec();
    bytes.push(0xfc);
    bytes.extend_from_slice(b"ller\n#param x, 0, int\n#texture t, 0\n");
    fs::write(&path, bytes).unwrap();

    // the bad byte does not stop the read; the later directive error still has its line
    let err = load_file(&path).unwrap_err();
    assert_eq!(err.line(), Some(3));

    fs::write(&path, b"// M\xfcller\n#param x, 0, int\n").unwrap();
    let def = load_file(&path).unwrap();
    assert_eq!(def.source, "// M\u{FFFD}ller\n\n");
    assert_eq!(def.parameters.len(), 1);
}

#[test]
fn title_defaults_to_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "plain.comp", "void main() {}\n");
    assert_eq!(load_file(&path).unwrap().name, "plain.comp");
}

#[test]
fn reports_failing_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "broken.comp",
        "#texture mask, 1\n// overlay\n#texture overlay, 1\n",
    );

    let err = load_file(&path).unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.directive_error(), Some(&DirectiveError::DuplicateBinding(1)));
    assert_eq!(err.to_string(), "texture binding 1 was used more than once at line 3");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(&dir.path().join("nope.comp")).unwrap_err();
    assert!(matches!(err, FilterError::Io { .. }));
    assert_eq!(err.line(), None);
}

#[test]
fn library_scans_and_loads_each_file() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "b.comp", "#setting title, Blur\n");
    write(&dir, "a.HLSL", "#texture t, 0\n");
    write(&dir, "readme.md", "# filters\n");

    let files =
        library::list_filters(&[dir.path().to_path_buf()], &["comp".into(), "hlsl".into()]).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.HLSL", "b.comp"]);

    let results = library::load_all(&files);
    assert_eq!(results[0].0, files[0]);
    assert!(matches!(
        results[0].1,
        Err(FilterError::Directive {
            line: 1,
            source: DirectiveError::ReservedBinding
        })
    ));
    assert_eq!(results[1].1.as_ref().unwrap().name, "Blur");
}

#[test]
fn bundled_filters_load() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("filters");
    let files = library::list_filters(&[dir], &["comp".into()]).unwrap();
    assert_eq!(files.len(), 2);

    for (path, result) in library::load_all(&files) {
        let def = result.unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        assert!(!def.parameters.is_empty());
        assert!(def.source.contains("void main()"));
    }
}
