use ckpe_ini::{parse, render};
use proptest::prelude::*;

/// A line already in the form the writer produces.
fn canonical_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_]{1,10}".prop_map(|name| format!("[{name}]")),
        ("[A-Za-z][A-Za-z0-9]{0,10}", "[A-Za-z0-9+.]{0,10}")
            .prop_map(|(key, value)| format!("{key}={value}")),
        ";[a-z ]{0,12}",
        Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn test_canonical_lines_round_trip(lines in prop::collection::vec(canonical_line(), 0..40)) {
        let parsed = parse(lines.clone());
        let rendered = render(&parsed.lines, &parsed.sections);
        prop_assert_eq!(rendered, lines);
    }

    #[test]
    fn test_arbitrary_lines_never_panic(lines in prop::collection::vec("\\PC*", 0..20)) {
        let parsed = parse(lines.clone());
        prop_assert_eq!(&parsed.lines, &lines);

        for entry in parsed.sections.iter().flat_map(|s| &s.entries) {
            let index = entry.line_number.unwrap();
            prop_assert!(lines[index].trim().contains('='));
        }

        // Rendering never changes the number of lines for parsed entries.
        let rendered = render(&parsed.lines, &parsed.sections);
        prop_assert_eq!(rendered.len(), lines.len());
    }
}
