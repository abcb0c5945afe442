use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_all_readable() -> Result<()> {
    let test = CliTest::with_file("src/lang/en-US/greet.ts", "export default { hello: 'Hi' };")?;
    test.write_file("src/lang/zh-CN/greet.ts", r#"export default {"hello": "你好"}"#)?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\u{2713} Checked 2 bundles - all readable\n");

    Ok(())
}

#[test]
fn test_check_verbose_lists_bundles() -> Result<()> {
    let test = CliTest::with_file(
        "src/lang/en-US/greet.ts",
        "export default { hello: 'Hi', bye: 'Bye' };",
    )?;

    let output = test.command().args(["check", "-v"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "  \u{2713} src/lang/en-US/greet.ts (2 entries)\n\
         \u{2713} Checked 1 bundle - all readable\n"
    );

    Ok(())
}

#[test]
fn test_check_reports_unreadable_bundle() -> Result<()> {
    let test = CliTest::with_file("src/lang/en-US/greet.ts", "export default { hello: 'Hi' };")?;
    test.write_file("src/lang/en-US/broken.ts", "export const x = 1;")?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error: no default export\n  \
         --> src/lang/en-US/broken.ts\n\
         \u{2718} 1 of 2 bundles could not be read\n"
    );

    Ok(())
}

#[test]
fn test_check_without_bundles() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No bundles found"));

    Ok(())
}
