use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_prints_mapping() -> Result<()> {
    let test = CliTest::with_file(
        "src/lang/en-US/greet.ts",
        "export default {\n  hello: 'Hi',\n  count: 2,\n  on: true,\n};\n",
    )?;

    let output = test
        .command()
        .args(["extract", "src/lang/en-US/greet.ts"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\n  \"hello\": \"Hi\",\n  \"count\": 2,\n  \"on\": true\n}\n"
    );

    Ok(())
}

#[test]
fn test_extract_json_body() -> Result<()> {
    let test = CliTest::with_file("bundle.js", r#"export default {"a": "A", "b": [1, 2]}"#)?;

    let output = test.command().args(["extract", "bundle.js"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\n  \"a\": \"A\",\n  \"b\": [\n    1,\n    2\n  ]\n}\n"
    );

    Ok(())
}

#[test]
fn test_extract_without_default_export() -> Result<()> {
    let test = CliTest::with_file("named.ts", "export const hello = 'Hi';")?;

    let output = test.command().args(["extract", "named.ts"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output), "\u{2718} named.ts: no default export\n");

    Ok(())
}

#[test]
fn test_extract_default_export_not_a_literal() -> Result<()> {
    let test = CliTest::with_file("call.ts", "export default make();")?;

    let output = test.command().args(["extract", "call.ts"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not a simple object literal"));

    Ok(())
}

#[test]
fn test_extract_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["extract", "missing.ts"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: failed to read missing.ts"));

    Ok(())
}
