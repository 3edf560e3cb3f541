//! Style strings: ordered `key=value;` tokens, optionally led by bare tokens such as a shape name.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
  Bare(String),
  Pair(String, String),
}

/// Parsed style string. Token order is kept so untouched keys stay where they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
  tokens: Vec<Token>,
}

impl Style {
  /// Splits on `;`, dropping empty tokens. A token's key ends at its first `=`.
  pub fn parse(s: &str) -> Self {
    let tokens = s
      .split(';')
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .map(|t| match t.split_once('=') {
        Some((k, v)) => Token::Pair(k.to_string(), v.to_string()),
        None => Token::Bare(t.to_string()),
      })
      .collect();
    Self { tokens }
  }

  #[cfg(test)]
  pub(crate) fn get(&self, key: &str) -> Option<&str> {
    self.tokens.iter().find_map(|t| match t {
      Token::Pair(k, v) if k == key => Some(v.as_str()),
      _ => None,
    })
  }

  /// Sets `key` in place, or appends it. Later duplicates of `key` are dropped.
  pub fn set(&mut self, key: &str, value: &str) {
    let mut seen = false;
    self.tokens.retain_mut(|t| match t {
      Token::Pair(k, v) if k == key => {
        if seen {
          return false;
        }
        seen = true;
        *v = value.to_string();
        true
      }
      _ => true,
    });
    if !seen {
      self
        .tokens
        .push(Token::Pair(key.to_string(), value.to_string()));
    }
  }
}

impl fmt::Display for Style {
  /// Every token is terminated by `;`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for t in &self.tokens {
      match t {
        Token::Bare(name) => write!(f, "{name};")?,
        Token::Pair(k, v) => write!(f, "{k}={v};")?,
      }
    }
    Ok(())
  }
}

/// Returns `style` with `key` set to `value`, other tokens untouched.
pub fn set_style(style: &str, key: &str, value: &str) -> String {
  let mut parsed = Style::parse(style);
  parsed.set(key, value);
  parsed.to_string()
}
