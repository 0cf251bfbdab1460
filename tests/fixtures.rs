use std::{fs, path::Path};

use rockstar::run;
use walkdir::WalkDir;

/// Runs every `.rock` program under `tests/fixtures`.
///
/// A program is fed its sibling `.in` file as input, if there is one. Its
/// output must match the sibling `.out` file, or, when a `.err` file exists,
/// the run must fail with exactly that rendered error.
#[test]
fn fixture_programs_match_their_goldens() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "rock"))
    {
        count += 1;
        let path = entry.path();
        let source = read(path);
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        let mut output = Vec::new();
        let result = run(&source, &mut input.as_bytes(), &mut output);
        let printed = String::from_utf8(output).unwrap_or_else(|e| panic!("{path:?}: {e}"));

        let err_path = path.with_extension("err");
        if err_path.exists() {
            match result {
                Ok(_) => panic!("{path:?} succeeded but was expected to fail"),
                Err(e) => assert_eq!(e.to_string(), read(&err_path).trim_end(), "{path:?}"),
            }
        } else {
            if let Err(e) = result {
                panic!("{path:?} failed: {e}");
            }
            assert_eq!(printed, read(&path.with_extension("out")), "{path:?}");
        }
    }

    assert!(count > 0, "No fixture programs found in tests/fixtures");
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
