//! End-to-end integration tests
//!
//! These tests validate the complete walkthrough pipeline against fixtures:
//! 1. Runs the scripted walkthrough
//! 2. Writes the account, roster and statistics reports
//! 3. Compares the output with tests/fixtures/{fixture}/expected.csv
//!
//! The walkthrough is run once into memory and once into a temporary file
//! to cover both in-memory and file-backed writers.

#[cfg(test)]
mod tests {
    use bank_ledger::walkthrough;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    #[derive(Debug, Clone, Copy)]
    enum Sink {
        Memory,
        TempFile,
    }

    /// Run the walkthrough into the chosen sink and return what was written
    fn run_into(sink: Sink) -> String {
        match sink {
            Sink::Memory => {
                let mut output = Vec::new();
                walkthrough::run(&mut output)
                    .unwrap_or_else(|e| panic!("Walkthrough failed: {}", e));
                String::from_utf8(output).expect("Output is not UTF-8")
            }
            Sink::TempFile => {
                let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
                walkthrough::run(&mut temp_output)
                    .unwrap_or_else(|e| panic!("Walkthrough failed: {}", e));
                temp_output.flush().expect("Failed to flush temp file");
                fs::read_to_string(temp_output.path())
                    .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
            }
        }
    }

    #[rstest]
    fn test_walkthrough_matches_fixture(#[values(Sink::Memory, Sink::TempFile)] sink: Sink) {
        let expected_path = "tests/fixtures/walkthrough/expected.csv";
        assert!(
            Path::new(expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let actual_output = run_into(sink);
        let expected_output = fs::read_to_string(expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch (sink: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            sink, actual_output, expected_output
        );
    }
}
