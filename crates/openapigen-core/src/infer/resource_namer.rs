/// Names derived from a list endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    /// Last path segment of the URL, e.g. `widgets`.
    pub plural_name: String,
    /// `plural_name` with one trailing `s` removed, e.g. `widget`.
    pub singular_name: String,
    /// `singular_name` with its first character uppercased, e.g. `Widget`.
    pub singular_display_name: String,
    /// Title-cased `plural_name`, e.g. `Widgets`.
    pub plural_display_name: String,
    /// The URL with `/{plural_name}` removed.
    pub base_url: String,
}

impl ResourceIdentity {
    /// Component schema key of the array wrapper, e.g. `ListOfWidgets`.
    pub fn list_schema_name(&self) -> String {
        format!("ListOf{}", self.plural_display_name)
    }

    /// Collection path, e.g. `/widgets`.
    pub fn collection_path(&self) -> String {
        format!("/{}", self.plural_name)
    }

    /// Item path, e.g. `/widgets/{widget}`.
    pub fn item_path(&self) -> String {
        format!("/{}/{{{}}}", self.plural_name, self.singular_name)
    }
}

/// Derive the resource names from a list endpoint URL.
///
/// No validation is performed; degenerate input still yields an identity:
/// - `https://example.com/widgets` → `widgets` / `widget` / `Widget`, base `https://example.com`
/// - `widgets` → `widgets`, empty base
/// - `` → empty names, empty base
///
/// The base URL is built by removing the first literal occurrence of
/// `/{plural}`, so `https://x.io/widgets-v1/widgets` loses the earlier match
/// and keeps the trailing `/widgets`.
pub fn derive_identity(url: &str) -> ResourceIdentity {
    let plural_name = url.rsplit('/').next().unwrap_or_default().to_string();
    let base_url = if url.contains('/') {
        url.replacen(&format!("/{plural_name}"), "", 1)
    } else {
        String::new()
    };
    let singular_name = singularize(&plural_name);

    ResourceIdentity {
        singular_display_name: capitalize(&singular_name),
        plural_display_name: title_case(&plural_name),
        singular_name,
        plural_name,
        base_url,
    }
}

/// Naive singularization: strips one trailing 's' if present.
pub fn singularize(word: &str) -> String {
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first letter of every word. Any character other than a
/// letter, digit or `_` separates words.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if at_word_start {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }

    result
}
