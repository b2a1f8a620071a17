//! Canonical identifier derivation for page directory names.

/// Convert a directory path segment into its canonical kebab-case identifier.
///
/// Every ASCII uppercase letter gains a hyphen immediately before it, the whole
/// string is lowercased, and a single leading hyphen introduced at position
/// zero is stripped. Path separators pass through untouched so callers can
/// keep nested page paths intact. Applying the transformation to an already
/// canonical identifier returns it unchanged.
pub fn canonical_id(segment: &str) -> String {
  let mut out = String::with_capacity(segment.len() + 4);
  for ch in segment.chars() {
    if ch.is_ascii_uppercase() {
      out.push('-');
    }
    out.extend(ch.to_lowercase());
  }

  match out.strip_prefix('-') {
    Some(stripped) => stripped.to_string(),
    None => out,
  }
}

#[cfg(test)]
mod tests {
  use super::canonical_id;

  #[test]
  fn hyphenates_camel_case_segments() {
    assert_eq!(canonical_id("UserProfile"), "user-profile");
    assert_eq!(canonical_id("orderList"), "order-list");
  }

  #[test]
  fn strips_the_leading_hyphen_from_initial_capitals() {
    assert_eq!(canonical_id("Views"), "views");
  }

  #[test]
  fn is_idempotent_on_canonical_input() {
    assert_eq!(canonical_id("user-profile"), "user-profile");
    assert_eq!(canonical_id(&canonical_id("UserProfile")), "user-profile");
  }

  #[test]
  fn handles_the_empty_segment() {
    assert_eq!(canonical_id(""), "");
  }

  #[test]
  fn preserves_path_separators() {
    assert_eq!(canonical_id("Admin/UserSettings"), "admin/-user-settings");
  }
}
