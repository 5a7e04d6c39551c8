use super::{CommandOracle, FnOracle, SyntaxOracle, Verdict};

#[test]
fn closure_oracle() {
    let oracle = FnOracle::new(|source: &str| {
        if source.contains(';') {
            Verdict::Accepted
        } else {
            Verdict::Rejected {
                message: "no statement found".to_string(),
            }
        }
    });

    assert!(oracle.check("int x;").is_accepted());
    assert_eq!(oracle.check("int x"), Verdict::Rejected {
        message: "no statement found".to_string()
    });
}

#[cfg(unix)]
#[test]
fn command_oracle_accepts() {
    let oracle = CommandOracle::new("sh").arg("-c").arg("cat > /dev/null");

    assert!(oracle.check("int x;").is_accepted());
}

#[cfg(unix)]
#[test]
fn command_oracle_rejects_with_stderr() {
    let oracle = CommandOracle::new("sh")
        .arg("-c")
        .arg("echo 'unexpected token' >&2; exit 1");

    let verdict = oracle.check("int x");
    assert_eq!(verdict, Verdict::Rejected {
        message: "unexpected token".to_string()
    });
}

#[cfg(unix)]
#[test]
fn command_oracle_rejects_with_status_when_stderr_is_empty() {
    let oracle = CommandOracle::new("sh").arg("-c").arg("exit 3");

    let verdict = oracle.check("int x");
    let message = verdict.as_rejected().unwrap();
    assert!(message.contains("oracle exited with"));
}

#[test]
fn command_oracle_invocation_failure_is_a_rejection() {
    let oracle = CommandOracle::new("sift-nonexistent-oracle-binary");

    let verdict = oracle.check("int x;");
    let message = verdict.as_rejected().unwrap();
    assert!(message.contains("failed to invoke"));
}
