use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_set_updates_chinese_bundle() -> Result<()> {
    let test = CliTest::with_file("src/lang/zh-CN/greet.ts", "export default { hello: 'Hi' };")?;
    test.create_dir("src/lang/en-US")?;

    let output = test
        .command()
        .args(["set", "ns.greet.hello", "--en", "Hello", "--cn", "你好", "--lang", "cn"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let expected_path = test.root().join("src/lang/zh-CN/greet.ts");
    assert_eq!(
        stdout(&output),
        format!("\u{2713} Updated \"hello\" in {}\n", expected_path.display())
    );
    assert_eq!(
        test.read_file("src/lang/zh-CN/greet.ts")?,
        "export default {\n  \"hello\": \"你好\"\n}\n"
    );
    assert!(!test.root().join("src/lang/en-US/greet.ts").exists());

    Ok(())
}

#[test]
fn test_set_defaults_to_english() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("src/lang/en-US")?;

    let output = test
        .command()
        .args(["set", "ns.home.title", "--en", "Home", "--cn", "首页"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("\u{2713} Added \"title\""));
    assert_eq!(
        test.read_file("src/lang/en-US/home.ts")?,
        "export default {\n  \"title\": \"Home\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_set_uses_config_locations() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nflowrc.json",
        r#"{ "localesDir": "locales", "extension": "js" }"#,
    )?;
    test.create_dir("locales/en-US")?;
    test.create_dir("app")?;

    let output = test
        .command()
        .args(["set", "ns.home.title", "--en", "Home", "--cn", "首页", "--root", "app"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("locales/en-US/home.js").exists());

    Ok(())
}

#[test]
fn test_set_rejects_short_key() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["set", "ns.greet", "--en", "Hello", "--cn", "你好"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("at least 3 segments"));

    Ok(())
}

#[test]
fn test_set_without_locale_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["set", "ns.greet.hello", "--en", "Hello", "--cn", "你好"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error:"));
    assert!(!test.root().join("src/lang").exists());

    Ok(())
}
