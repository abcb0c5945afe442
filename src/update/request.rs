use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use super::UpdateError;

/// The locale an update is written to.
///
/// Only `cn` is recognized explicitly; every other code, including a missing
/// one, resolves to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(from = "Option<String>")]
pub enum Locale {
    #[default]
    En,
    Cn,
}

impl Locale {
    /// Directory under the locales root that holds this locale's bundles.
    pub fn dir_name(self) -> &'static str {
        match self {
            Locale::Cn => "zh-CN",
            Locale::En => "en-US",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Cn => "cn",
            Locale::En => "en",
        }
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        if code == "cn" { Locale::Cn } else { Locale::En }
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale::from(code.as_str())
    }
}

impl From<Option<String>> for Locale {
    fn from(code: Option<String>) -> Self {
        code.map(Locale::from).unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wire shape of `POST /i18n-flow/update`.
#[derive(Debug, Deserialize)]
struct UpdateRequestBody {
    key: Vec<String>,
    en: String,
    cn: String,
    #[serde(default)]
    lang: Locale,
}

/// A validated translation update.
///
/// The key path is `[namespace, file stem, leaf key, ...]`. Only the file stem
/// and the leaf key decide where the value lands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "UpdateRequestBody")]
pub struct UpdateRequest {
    key_path: Vec<String>,
    text_en: String,
    text_cn: String,
    lang: Locale,
}

impl UpdateRequest {
    pub fn new(
        key_path: Vec<String>,
        text_en: impl Into<String>,
        text_cn: impl Into<String>,
        lang: Locale,
    ) -> Result<Self, UpdateError> {
        validate_key_path(&key_path)?;
        Ok(Self {
            key_path,
            text_en: text_en.into(),
            text_cn: text_cn.into(),
            lang,
        })
    }

    /// Parse and validate a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, UpdateError> {
        let body: UpdateRequestBody =
            serde_json::from_str(body).map_err(|e| UpdateError::RequestParse(e.to_string()))?;
        UpdateRequest::try_from(body)
    }

    pub fn key_path(&self) -> &[String] {
        &self.key_path
    }

    pub fn namespace(&self) -> &str {
        &self.key_path[0]
    }

    pub fn file_stem(&self) -> &str {
        &self.key_path[1]
    }

    pub fn leaf_key(&self) -> &str {
        &self.key_path[2]
    }

    pub fn lang(&self) -> Locale {
        self.lang
    }

    /// The text for the active locale.
    pub fn active_text(&self) -> &str {
        match self.lang {
            Locale::Cn => &self.text_cn,
            Locale::En => &self.text_en,
        }
    }
}

impl TryFrom<UpdateRequestBody> for UpdateRequest {
    type Error = UpdateError;

    fn try_from(body: UpdateRequestBody) -> Result<Self, Self::Error> {
        UpdateRequest::new(body.key, body.en, body.cn, body.lang)
    }
}

fn validate_key_path(key_path: &[String]) -> Result<(), UpdateError> {
    if key_path.len() < 3 {
        return Err(UpdateError::RequestParse(format!(
            "key must have at least 3 segments, got {}",
            key_path.len()
        )));
    }

    // The stem becomes a file name inside the locale directory.
    let stem = &key_path[1];
    if stem.is_empty() || stem == "." || stem == ".." || stem.contains(['/', '\\']) {
        return Err(UpdateError::RequestParse(format!(
            "invalid file name in key: {:?}",
            stem
        )));
    }

    Ok(())
}

impl fmt::Display for UpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key_path.join("."), self.lang)
    }
}
