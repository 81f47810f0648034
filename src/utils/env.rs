use std::collections::HashMap;
use std::{env, fmt, io};

use canvas_client::credential::mask_key;
use heck::ToShoutySnakeCase;

/// CanvasEnv reads the environment variables canvas-history respects.
/// Unit tests get a private store instead of the process environment, so
/// they can run in parallel without stepping on each other or on a
/// developer's shell.
#[derive(Debug, Clone)]
pub struct CanvasEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for CanvasEnv {
    fn default() -> CanvasEnv {
        CanvasEnv::new()
    }
}

impl CanvasEnv {
    pub fn new() -> CanvasEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        CanvasEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: CanvasEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => mock_store.get(&key_str).cloned(),
            None => match env::var(&key_str) {
                Ok(data) => Some(data),
                Err(env::VarError::NotPresent) => None,
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "The value of the environment variable \"{}\" is not valid Unicode.",
                            &key_str
                        ),
                    ));
                }
            },
        };

        match &result {
            Some(value) => tracing::debug!("read {}", debug_value(key, value)),
            None => tracing::trace!("could not find ${}", &key_str),
        }

        Ok(result)
    }

    #[cfg(test)]
    pub fn insert(&mut self, key: CanvasEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.to_string());
        }
    }
}

fn debug_value(key: CanvasEnvKey, value: &str) -> String {
    let value = match key {
        CanvasEnvKey::Token => mask_key(value),
        CanvasEnvKey::Endpoint => value.to_string(),
    };
    format!("environment variable ${key} = {value}")
}

/// Every environment variable canvas-history reads. The name is the
/// variant in SHOUTY_SNAKE_CASE behind a `CANVAS_HISTORY_` prefix, so
/// `CanvasEnvKey::Token` is `CANVAS_HISTORY_TOKEN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasEnvKey {
    Token,
    Endpoint,
}

impl fmt::Display for CanvasEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        write!(fmt, "CANVAS_HISTORY_{}", &dbg)
    }
}
