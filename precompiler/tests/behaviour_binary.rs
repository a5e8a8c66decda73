//! End-to-end binary-mode behaviour tests for `psl2rs`.
//!
//! Binary mode delegates artefact writing to the minimizer, so these
//! scenarios stub it with scripts that inspect the staged records and either
//! write bytes to the target or fail.

mod support;

#[cfg(unix)]
#[test]
fn binary_mode_lets_the_minimizer_write_the_artefact() {
    use support::{SAMPLE_RECORDS, psl2rs, write_sample_list, write_script};

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = write_sample_list(dir.path());
    let artefact = dir.path().join("psl.dafsa");
    let records_copy = dir.path().join("records-copy.txt");
    let records_log = dir.path().join("records-path.txt");
    let body = format!(
        "#!/bin/sh\n\
         [ \"$1\" = \"--binary\" ] || exit 9\n\
         printf '%s' \"$2\" > \"{log}\"\n\
         cp \"$2\" \"{copy}\"\n\
         printf 'DAFSA' > \"$3\"\n",
        log = records_log.display(),
        copy = records_copy.display(),
    );
    let minimizer = write_script(dir.path(), "fake-dafsa", &body);

    let run = psl2rs()
        .arg("--binary")
        .arg(&input)
        .arg(&artefact)
        .env("PSL_MAKE_DAFSA", &minimizer)
        .output()
        .expect("failed to run psl2rs");
    assert!(
        run.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&run.stderr)
    );

    let bytes = std::fs::read(&artefact).expect("failed to read artefact");
    assert_eq!(bytes, b"DAFSA");

    let records = std::fs::read_to_string(&records_copy).expect("failed to read records copy");
    assert_eq!(records, SAMPLE_RECORDS);

    let staged = std::fs::read_to_string(&records_log).expect("failed to read records path");
    assert!(
        !std::path::Path::new(staged.trim()).exists(),
        "records scratch file should be deleted after the run"
    );
}

#[cfg(unix)]
#[test]
fn binary_mode_fails_when_the_minimizer_fails() {
    use support::{psl2rs, write_sample_list, write_script};

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = write_sample_list(dir.path());
    let artefact = dir.path().join("psl.dafsa");
    let minimizer = write_script(dir.path(), "fake-dafsa", "#!/bin/sh\nexit 3\n");

    let run = psl2rs()
        .arg("--binary")
        .arg(&input)
        .arg(&artefact)
        .env("PSL_MAKE_DAFSA", &minimizer)
        .output()
        .expect("failed to run psl2rs");

    assert_eq!(run.status.code(), Some(2));
    assert!(!artefact.exists());
    let stderr = String::from_utf8_lossy(&run.stderr);
    assert!(
        stderr.contains("failed to execute"),
        "unexpected stderr: {stderr}"
    );
}

#[cfg(unix)]
#[test]
fn binary_mode_fails_when_the_minimizer_is_missing() {
    use support::{psl2rs, write_sample_list};

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = write_sample_list(dir.path());
    let artefact = dir.path().join("psl.dafsa");

    let run = psl2rs()
        .arg("--binary")
        .arg(&input)
        .arg(&artefact)
        .env("PSL_MAKE_DAFSA", dir.path().join("absent-minimizer"))
        .output()
        .expect("failed to run psl2rs");

    assert_eq!(run.status.code(), Some(2));
    assert!(!artefact.exists());
    let stderr = String::from_utf8_lossy(&run.stderr);
    assert!(
        stderr.contains("failed to execute"),
        "unexpected stderr: {stderr}"
    );
}
