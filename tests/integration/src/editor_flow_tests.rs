//! End-to-end editor flow over the fixture INI
//!
//! Settings resolution -> load -> classify -> edit -> save, checked against
//! the golden file in test-fixtures/expected/.

use ckpe_core::{EditorSession, EditorSettings, LineEndingSetting, SaveStatus, SettingsResolver};
use ckpe_fs::{EXPECTED_FILE_NAME, NormalizedPath};
use ckpe_ini::{ChoiceTable, IniDocument, WidgetKind};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

/// Normalize line endings to LF for cross-platform comparison.
fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n")
}

fn fixture_text() -> String {
    let path = fixtures_dir().join("ini").join(EXPECTED_FILE_NAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {}: {}", path.display(), e));
    normalize_line_endings(&content)
}

/// Copy the fixture into `dir` and return its path.
fn install_fixture(dir: &Path) -> PathBuf {
    let path = dir.join(EXPECTED_FILE_NAME);
    fs::write(&path, fixture_text()).unwrap();
    path
}

fn lf_session() -> EditorSession {
    EditorSession::new(EditorSettings {
        line_ending: LineEndingSetting::Lf,
        ..Default::default()
    })
}

// ==========================================================================
// Fixture parsing
// ==========================================================================

#[test]
fn test_fixture_structure() {
    let document = IniDocument::parse(&fixture_text());
    let names: Vec<_> = document.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["CreationKit", "Log", "Hotkeys", "CreationKit_FaceGen"]);

    let counts: Vec<_> = document.sections().iter().map(|s| s.entries.len()).collect();
    assert_eq!(counts, [7, 3, 2, 2]);
    assert_eq!(document.lines().len(), 32);
}

#[test]
fn test_fixture_tooltips() {
    let document = IniDocument::parse(&fixture_text());

    assert_eq!(
        document.section("CreationKit").unwrap().tooltip.as_deref(),
        Some("Creation Kit Platform Extended\nLines starting with ';' are comments and are kept when saving.")
    );
    assert_eq!(
        document.entry("CreationKit", "nCharset").unwrap().tooltip.as_deref(),
        Some("Font character set for the editor UI\nDEFAULT_CHARSET")
    );
    // A blank line between comment and entry does not break the association.
    assert_eq!(
        document
            .entry("CreationKit", "nGenerationVersion")
            .unwrap()
            .tooltip
            .as_deref(),
        Some("Version of the facegen generator")
    );
    assert!(document.entry("CreationKit", "bDisableAutoSave").unwrap().tooltip.is_none());
}

#[rstest]
#[case("CreationKit", "bUIDarkTheme", "checkbox")]
#[case("CreationKit", "uUIDarkThemeId", "dropdown")]
#[case("CreationKit", "nCharset", "dropdown")]
#[case("CreationKit", "uTintMaskResolution", "text")]
#[case("CreationKit", "nGenerationVersion", "stepper")]
#[case("CreationKit", "fFontSize", "text")]
#[case("Log", "nWidth", "text")]
#[case("Hotkeys", "ToggleRender", "text")]
#[case("CreationKit_FaceGen", "sDefaultNPCPath", "text")]
fn test_fixture_widgets(#[case] section: &str, #[case] key: &str, #[case] expected: &str) {
    let document = IniDocument::parse(&fixture_text());
    assert_eq!(document.widget(section, key).unwrap().label(), expected);
}

#[test]
fn test_fixture_dropdown_selection() {
    let document = IniDocument::parse(&fixture_text());
    match document.widget("CreationKit", "uUIDarkThemeId").unwrap() {
        WidgetKind::Dropdown { table, selected } => {
            assert_eq!(table, ChoiceTable::Theme);
            assert_eq!(selected.map(|c| c.name), Some("Darker"));
        }
        other => panic!("expected dropdown, got {other}"),
    }
}

// ==========================================================================
// Editing and saving
// ==========================================================================

#[test]
fn test_unedited_save_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = install_fixture(dir.path());

    let mut session = lf_session();
    session.load(path.as_path()).unwrap();
    assert!(session.preview().unwrap().is_empty());
    session.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), fixture_text());
}

#[test]
fn test_edits_match_golden_file() {
    let dir = TempDir::new().unwrap();
    let path = install_fixture(dir.path());

    let mut session = lf_session();
    session.load(path.as_path()).unwrap();
    session.set_value("CreationKit", "bUIDarkTheme", "off").unwrap();
    session.set_value("CreationKit", "nCharset", "RUSSIAN_CHARSET").unwrap();
    session
        .set_value("CreationKit_FaceGen", "sDefaultNPCPath", r"Data\Meshes\NPC")
        .unwrap();
    session
        .add_entry("CreationKit_FaceGen", "bNewFeature", "true")
        .unwrap();

    let diff = session.preview().unwrap();
    assert_eq!(diff.changes.len(), 7);

    let status = session.save().unwrap();
    assert_eq!(
        status,
        SaveStatus::Saved {
            path: NormalizedPath::new(&path),
            lines: 33
        }
    );

    let expected_path = fixtures_dir()
        .join("expected")
        .join("CreationKitPlatformExtended.edited.ini");
    let expected = normalize_line_endings(&fs::read_to_string(expected_path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    assert!(!session.is_modified());
}

#[test]
fn test_reload_after_save_sees_new_values() {
    let dir = TempDir::new().unwrap();
    let path = install_fixture(dir.path());

    let mut session = lf_session();
    session.load(path.as_path()).unwrap();
    session.set_value("CreationKit", "uUIDarkThemeId", "Custom").unwrap();
    // Only the last section can take new entries; they land on the last line.
    assert!(session.add_entry("Log", "nHeight", "600").unwrap_err().is_validation());
    session
        .add_entry("CreationKit_FaceGen", "nHeight", "600")
        .unwrap();
    session.save().unwrap();

    let mut fresh = lf_session();
    let document = fresh.load(path.as_path()).unwrap();
    assert_eq!(document.entry("CreationKit", "uUIDarkThemeId").unwrap().value, "2");
    assert!(document.entry("Log", "nHeight").is_none());
    assert_eq!(
        document.entry("CreationKit_FaceGen", "nHeight").unwrap().value,
        "600"
    );
}

#[test]
fn test_crlf_file_saved_with_crlf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(EXPECTED_FILE_NAME);
    fs::write(&path, fixture_text().replace('\n', "\r\n")).unwrap();

    let mut session = EditorSession::new(EditorSettings {
        line_ending: LineEndingSetting::Crlf,
        ..Default::default()
    });
    session.load(path.as_path()).unwrap();
    assert!(session.preview().unwrap().is_empty());
    session.set_value("Log", "nX", "15").unwrap();
    session.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        fixture_text().replace("nX=0", "nX=15").replace('\n', "\r\n")
    );
}

#[test]
fn test_local_settings_drive_session() {
    let dir = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    install_fixture(dir.path());
    fs::write(
        dir.path().join("ckpe-config.toml"),
        format!("line_ending = \"crlf\"\ndefault_file = \"{EXPECTED_FILE_NAME}\"\n"),
    )
    .unwrap();

    let resolver = SettingsResolver::with_global_config_dir(
        NormalizedPath::new(dir.path()),
        global.path().to_path_buf(),
    );
    let settings = resolver.resolve().unwrap();
    let target = settings.default_file.clone().unwrap();

    let mut session = EditorSession::new(settings);
    session.load(target.as_path()).unwrap();
    session.save().unwrap();

    let written = fs::read_to_string(target).unwrap();
    assert!(written.lines().count() > 1);
    assert!(written.contains("\r\n"));
    assert!(!written.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_invalid_edit_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = install_fixture(dir.path());

    let mut session = lf_session();
    session.load(path.as_path()).unwrap();
    assert!(
        session
            .set_value("CreationKit", "nGenerationVersion", "3")
            .is_err()
    );
    assert!(session.set_value("CreationKit", "nCharset", "KLINGON_CHARSET").is_err());
    assert!(session.set_value("Hotkeys", "ToggleRender", "F5 ; F6").is_err());
    assert!(!session.is_modified());

    session.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), fixture_text());
}
