//! Field-level patches for partial updates.
//!
//! A partial update never replaces the description wholesale. Each field is
//! independently left alone, overwritten, or cleared, which is what
//! [`FieldPatch`] encodes.

use serde::{Deserialize, Serialize};

use crate::issue::Description;
use crate::types::HttpMethod;

/// Change to a single optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum FieldPatch<T> {
    /// Keep the stored value
    Unchanged,
    /// Overwrite with a new value
    Set(T),
    /// Make the field absent
    Cleared,
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        FieldPatch::Unchanged
    }
}

impl<T> FieldPatch<T> {
    /// Apply to a stored optional value.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            FieldPatch::Unchanged => {}
            FieldPatch::Set(v) => *slot = Some(v),
            FieldPatch::Cleared => *slot = None,
        }
    }

    /// `Set` for `Some`, `Cleared` for `None`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldPatch::Set(v),
            None => FieldPatch::Cleared,
        }
    }

    /// True for [`FieldPatch::Unchanged`].
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldPatch::Unchanged)
    }
}

/// Three-way rule for the image reference.
///
/// The clear flag wins over any co-supplied value; a non-empty value without
/// the flag replaces; otherwise the stored image is kept.
pub fn image_patch(clear: bool, value: Option<String>) -> FieldPatch<String> {
    if clear {
        return FieldPatch::Cleared;
    }
    match value {
        Some(v) if !v.trim().is_empty() => FieldPatch::Set(v),
        _ => FieldPatch::Unchanged,
    }
}

/// Field-by-field merge into a [`Description`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionPatch {
    /// See [`Description::api_name`]
    #[serde(default)]
    pub api_name: FieldPatch<String>,
    /// See [`Description::method`]
    #[serde(default)]
    pub method: FieldPatch<HttpMethod>,
    /// See [`Description::payload`]
    #[serde(default)]
    pub payload: FieldPatch<String>,
    /// See [`Description::response`]
    #[serde(default)]
    pub response: FieldPatch<String>,
    /// See [`Description::response_code`]
    #[serde(default)]
    pub response_code: FieldPatch<i64>,
    /// See [`Description::image_data_uri`]
    #[serde(default)]
    pub image_data_uri: FieldPatch<String>,
    /// See [`Description::general_notes`]
    #[serde(default)]
    pub general_notes: FieldPatch<String>,
}

impl DescriptionPatch {
    /// True when every field is [`FieldPatch::Unchanged`].
    pub fn is_empty(&self) -> bool {
        *self == DescriptionPatch::default()
    }

    /// Merge into `target` in place.
    pub fn apply_to(self, target: &mut Description) {
        self.api_name.apply_to(&mut target.api_name);
        self.method.apply_to(&mut target.method);
        self.payload.apply_to(&mut target.payload);
        self.response.apply_to(&mut target.response);
        self.response_code.apply_to(&mut target.response_code);
        self.image_data_uri.apply_to(&mut target.image_data_uri);
        self.general_notes.apply_to(&mut target.general_notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Description {
        Description {
            api_name: Some("login".to_string()),
            method: Some(HttpMethod::Post),
            payload: Some("{\"user\":1}".to_string()),
            response: None,
            response_code: Some(500),
            image_data_uri: Some("data:image/png;base64,AAAA".to_string()),
            general_notes: Some("flaky".to_string()),
        }
    }

    #[test]
    fn test_empty_patch_leaves_description_untouched() {
        let mut d = stored();
        DescriptionPatch::default().apply_to(&mut d);
        assert_eq!(d, stored());
    }

    #[test]
    fn test_patch_merges_field_by_field() {
        let mut d = stored();
        let patch = DescriptionPatch {
            response_code: FieldPatch::Set(200),
            method: FieldPatch::Cleared,
            ..Default::default()
        };
        patch.apply_to(&mut d);
        assert_eq!(d.response_code, Some(200));
        assert_eq!(d.method, None);
        assert_eq!(d.api_name.as_deref(), Some("login"));
        assert_eq!(d.general_notes.as_deref(), Some("flaky"));
    }

    #[test]
    fn test_image_patch_three_way_rule() {
        assert_eq!(image_patch(false, None), FieldPatch::Unchanged);
        assert_eq!(image_patch(false, Some("  ".to_string())), FieldPatch::Unchanged);
        assert_eq!(
            image_patch(true, Some("data:new".to_string())),
            FieldPatch::Cleared
        );
        assert_eq!(
            image_patch(false, Some("data:new".to_string())),
            FieldPatch::Set("data:new".to_string())
        );
    }

    #[test]
    fn test_image_law_applied_to_description() {
        let mut unchanged = stored();
        FieldPatch::Unchanged.apply_to(&mut unchanged.image_data_uri);
        assert_eq!(unchanged.image_data_uri, stored().image_data_uri);

        let mut cleared = stored();
        image_patch(true, Some("data:other".into())).apply_to(&mut cleared.image_data_uri);
        assert_eq!(cleared.image_data_uri, None);

        let mut replaced = stored();
        image_patch(false, Some("data:other".into())).apply_to(&mut replaced.image_data_uri);
        assert_eq!(replaced.image_data_uri.as_deref(), Some("data:other"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldPatch::from_option(Some(1)), FieldPatch::Set(1));
        assert_eq!(FieldPatch::<i32>::from_option(None), FieldPatch::Cleared);
    }
}
