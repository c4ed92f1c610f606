//! Installation check.
//!
//! Before rendering any page the site must have been installed: the
//! configured installation path has to be set, differ from the shipped
//! placeholder, and exist on disk. When the check fails the only valid
//! response is a fixed 503 setup page, after which the caller terminates
//! request processing. This is the sole fatal path in the crate; nothing
//! here is meant to be recovered from.

use std::path::Path;

use crate::config::SiteConfig;

/// Placeholder value shipped in the default configuration file.
const PLACEHOLDER_PATH: &str = "/path/to/site/";

/// The fixed 503 response returned when the site is not installed yet.
///
/// The caller writes status, content type and body, then stops handling
/// the request.
#[derive(Debug, Clone)]
pub struct SetupRequired {
    html: String,
}

impl SetupRequired {
    /// HTTP status line value: 503 Service Unavailable.
    pub fn status(&self) -> u16 {
        503
    }

    /// Content type of the setup page.
    pub fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    /// The HTML body of the setup page.
    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Whether the site has been installed.
///
/// The installation path must be configured, differ from the placeholder
/// value, and exist on disk.
pub fn is_installed(config: &SiteConfig) -> bool {
    !config.path.as_os_str().is_empty()
        && config.path != Path::new(PLACEHOLDER_PATH)
        && config.path.exists()
}

/// Checks that the site has been installed.
///
/// # Errors
///
/// Returns [`SetupRequired`] carrying the full 503 response when the
/// installation is incomplete. This is a terminal condition: the caller
/// emits the response and halts further processing.
pub fn check_installed(config: &SiteConfig) -> Result<(), SetupRequired> {
    if is_installed(config) {
        return Ok(());
    }

    // When the current directory is not the site root the links need to
    // point one level up; this covers most (though not all) cases.
    let rel = if Path::new("admin/install/index.php").exists() {
        ""
    } else {
        "../"
    };
    let version = htmlescape::encode_minimal(&config.version);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Welcome</title>
  <meta name="robots" content="noindex,nofollow" />
  <style type="text/css">
    html, body {{
      color: #000;
      background-color: #fff;
      font-family: sans-serif;
      text-align: center;
    }}
    .container {{
      max-width: 600px;
      margin: 5px auto;
    }}
  </style>
</head>

<body>
<div class="container">
  <img src="{rel}docs/images/logo.gif" alt="" />
  <h1>Version {version}</h1>
  <p>Please run the <a href="{rel}admin/install/index.php" rel="nofollow">install script</a> first.</p>
  <p>For more information, please refer to the <a href="{rel}docs/english/install.html" rel="nofollow">installation instructions</a>.</p>
</div>
</body>
</html>
"#
    );

    Err(SetupRequired { html })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_path(path: &str) -> SiteConfig {
        SiteConfig {
            path: path.into(),
            version: "2.2.1".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_installed_with_existing_path() {
        let config = config_with_path(env!("CARGO_MANIFEST_DIR"));
        assert!(is_installed(&config));
        assert!(check_installed(&config).is_ok());
    }

    #[test]
    fn test_not_installed_cases() {
        let test_cases = [
            // unset
            "",
            // shipped placeholder
            "/path/to/site/",
            // does not exist
            "/definitely/not/a/real/site/root",
        ];
        for path in test_cases {
            let config = config_with_path(path);
            assert!(!is_installed(&config), "Failed for path: {:?}", path);
            assert!(check_installed(&config).is_err(), "Failed for path: {:?}", path);
        }
    }

    #[test]
    fn test_setup_page_response() {
        let halt = check_installed(&config_with_path("")).unwrap_err();
        assert_eq!(halt.status(), 503);
        assert_eq!(halt.content_type(), "text/html; charset=utf-8");
        assert!(halt.html().contains("install script"));
        assert!(halt.html().contains("2.2.1"));
    }

    #[test]
    fn test_setup_page_escapes_version() {
        let mut config = config_with_path("");
        config.version = "<script>1</script>".to_string();
        let halt = check_installed(&config).unwrap_err();
        assert!(!halt.html().contains("<script>1"));
        assert!(halt.html().contains("&lt;script&gt;"));
    }
}
