//! Source checksum capture via the external `sha1sum` utility.
//!
//! The checksum is provenance metadata, not a correctness gate: any failure
//! to obtain one degrades to an empty string and the pipeline carries on.

use crate::exec::CommandExecutor;
use camino::Utf8Path;

/// The checksum utility invoked over the suffix list file.
pub const CHECKSUM_PROGRAM: &str = "sha1sum";

/// Longest checksum prefix that is captured.
pub const MAX_CHECKSUM_LEN: usize = 63;

/// Extracts the leading alphanumeric run from checksum-utility stdout.
///
/// The run ends at the first non-alphanumeric byte and is capped at
/// [`MAX_CHECKSUM_LEN`] characters, so the utility's trailing ` <filename>`
/// column never leaks into the result.
///
/// # Examples
///
/// ```
/// use psl2rs::checksum::leading_checksum;
///
/// let stdout = b"deadbeef  public_suffix_list.dat\n";
/// assert_eq!(leading_checksum(stdout), "deadbeef");
/// ```
#[must_use]
pub fn leading_checksum(stdout: &[u8]) -> String {
    stdout
        .iter()
        .take_while(|byte| byte.is_ascii_alphanumeric())
        .take(MAX_CHECKSUM_LEN)
        .map(|&byte| char::from(byte))
        .collect()
}

/// Captures the hex checksum of the suffix list file.
///
/// The utility's exit status is ignored; only stdout matters. A spawn
/// failure or unusable stdout yields an empty string.
#[must_use]
pub fn source_checksum(executor: &dyn CommandExecutor, input: &Utf8Path) -> String {
    match executor.run(CHECKSUM_PROGRAM, &[input.as_str()]) {
        Ok(output) => leading_checksum(&output.stdout),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrecompileError;
    use crate::test_utils::{ExpectedCall, StubExecutor, stdout_output};
    use rstest::rstest;

    #[rstest]
    #[case::digest_and_filename(
        &b"f713c2a1f7253c53d05be3e8e9e2b113ec9a73c6  list.dat\n"[..],
        "f713c2a1f7253c53d05be3e8e9e2b113ec9a73c6"
    )]
    #[case::empty(&b""[..], "")]
    #[case::leading_space(&b" deadbeef"[..], "")]
    #[case::stops_at_punctuation(&b"dead-beef"[..], "dead")]
    fn leading_checksum_takes_the_alphanumeric_prefix(
        #[case] stdout: &[u8],
        #[case] expected: &str,
    ) {
        assert_eq!(leading_checksum(stdout), expected);
    }

    #[test]
    fn leading_checksum_caps_the_length() {
        let stdout = vec![b'a'; 80];
        assert_eq!(leading_checksum(&stdout).len(), MAX_CHECKSUM_LEN);
    }

    #[test]
    fn source_checksum_captures_the_digest() {
        let executor = StubExecutor::new(vec![ExpectedCall {
            cmd: CHECKSUM_PROGRAM,
            args: vec!["list.dat"],
            result: Ok(stdout_output(
                "f713c2a1f7253c53d05be3e8e9e2b113ec9a73c6  list.dat\n",
            )),
        }]);
        assert_eq!(
            source_checksum(&executor, Utf8Path::new("list.dat")),
            "f713c2a1f7253c53d05be3e8e9e2b113ec9a73c6"
        );
        executor.assert_finished();
    }

    #[test]
    fn source_checksum_degrades_to_empty_when_the_utility_is_missing() {
        let executor = StubExecutor::new(vec![ExpectedCall {
            cmd: CHECKSUM_PROGRAM,
            args: vec!["list.dat"],
            result: Err(PrecompileError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ))),
        }]);
        assert_eq!(source_checksum(&executor, Utf8Path::new("list.dat")), "");
        executor.assert_finished();
    }
}
