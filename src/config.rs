//! Where the data comes from, resolved from the first command-line argument.
//!
//! | Argument                      | Source                                   |
//! |-------------------------------|------------------------------------------|
//! | *(none)*                      | bundled assets in `./assets`             |
//! | `remote`                      | placeholder endpoint `https://fake.api/` |
//! | `http://…` / `https://…`      | remote endpoint at that base address     |
//! | anything else                 | bundled assets in that directory         |

use std::path::PathBuf;

use crate::source::PLACEHOLDER_BASE_URL;

pub const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Bundled(PathBuf),
    Remote(String),
}

impl Config {
    pub fn from_arg(arg: Option<String>) -> Self {
        match arg {
            None => Config::Bundled(PathBuf::from(DEFAULT_ASSET_DIR)),
            Some(a) if a == "remote" => Config::Remote(PLACEHOLDER_BASE_URL.to_string()),
            Some(a) if a.starts_with("http://") || a.starts_with("https://") => Config::Remote(a),
            Some(a) => Config::Bundled(PathBuf::from(a)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Config::Bundled(dir) => format!("assets: {}", dir.display()),
            Config::Remote(url) => format!("remote: {url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_uses_default_assets() {
        assert_eq!(
            Config::from_arg(None),
            Config::Bundled(PathBuf::from("assets"))
        );
    }

    #[test]
    fn remote_keyword_uses_placeholder() {
        assert_eq!(
            Config::from_arg(Some("remote".into())),
            Config::Remote("https://fake.api/".into())
        );
    }

    #[test]
    fn url_argument_selects_remote() {
        assert_eq!(
            Config::from_arg(Some("http://localhost:8080/api".into())),
            Config::Remote("http://localhost:8080/api".into())
        );
        assert!(matches!(
            Config::from_arg(Some("https://jsonplaceholder.typicode.com/".into())),
            Config::Remote(_)
        ));
    }

    #[test]
    fn other_argument_is_asset_directory() {
        assert_eq!(
            Config::from_arg(Some("/opt/uni/data".into())),
            Config::Bundled(PathBuf::from("/opt/uni/data"))
        );
    }
}
