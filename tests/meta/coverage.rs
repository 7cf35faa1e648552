//! Checks that `tests/unit` mirrors `src` one file per module

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Harness roots and module declarations carry no logic of their own
    const EXEMPT_FILES: [&str; 3] = ["main.rs", "lib.rs", "mod.rs"];

    fn is_exempt(relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        EXEMPT_FILES.contains(&file_name)
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|error| io::Error::other(error.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative_path);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }
        Ok(paths)
    }

    fn source_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src_dir = Path::new("src");
        let tests_dir = Path::new("tests/unit");
        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_else(|error| {
            unreachable!("failed to read src directory: {error}");
        });
        let test_paths = collect_relative_paths(tests_dir, tests_dir).unwrap_or_default();
        (src_paths, test_paths)
    }

    // Tests every source module has a unit test file at the mirrored path
    // Verified by deleting tests/unit/grid/cell.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, test_paths) = source_and_unit_paths();
        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| !is_exempt(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source modules without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the module it covered
    // Verified by adding tests/unit/grid/hexagon.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, test_paths) = source_and_unit_paths();
        let orphaned: Vec<String> = test_paths
            .iter()
            .filter(|path| !is_exempt(path) && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source module:\n{}",
            orphaned.join("\n")
        );
    }

    fn files_without_tests(dir: &Path, found: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files_without_tests(&path, found)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            let exempt = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| EXEMPT_FILES.contains(&name));
            if !exempt && !fs::read_to_string(&path)?.contains("#[test]") {
                found.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    // Tests every test file declares at least one test
    #[test]
    fn test_all_test_files_contain_tests() {
        let mut found = Vec::new();
        if let Err(error) = files_without_tests(Path::new("tests"), &mut found) {
            unreachable!("failed to scan tests directory: {error}");
        }

        assert!(
            found.is_empty(),
            "Test files without any #[test] functions:\n{}",
            found.join("\n")
        );
    }
}
