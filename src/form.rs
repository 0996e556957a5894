// Form fields and the simple-form convenience builder

use serde::{Deserialize, Serialize};

/// One labelled field of a `--form` widget.
///
/// Coordinates are 1-based positions inside the form window. `field_len`
/// controls both display width and editability: positive means editable with
/// that visible width, `0` means read-only sized to the initial value, and
/// negative means read-only with the absolute value as display width.
/// `input_len` caps how many characters may be typed; `0` lets it default to
/// the field length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub label: String,
    pub label_y: u32,
    pub label_x: u32,
    pub value: String,
    pub field_y: u32,
    pub field_x: u32,
    pub field_len: i32,
    pub input_len: i32,
}

impl FormField {
    pub fn new(
        label: impl Into<String>,
        label_y: u32,
        label_x: u32,
        value: impl Into<String>,
        field_y: u32,
        field_x: u32,
        field_len: i32,
        input_len: i32,
    ) -> Self {
        Self {
            label: label.into(),
            label_y,
            label_x,
            value: value.into(),
            field_y,
            field_x,
            field_len,
            input_len,
        }
    }

    /// Read-only fields contribute no line to the form's output.
    pub fn editable(&self) -> bool {
        self.field_len > 0
    }
}

/// Shared sizing knobs for [`build_simple_form`]. Anything left `None` is
/// derived from the field contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleFormOptions {
    /// Common width of the label column. Default: longest label + 1.
    pub label_width: Option<u32>,
    /// Common display width of every input field. Default: longest initial
    /// value + 1.
    pub field_width: Option<u32>,
    /// Common input-length cap. Default: 0, i.e. the field width.
    pub max_length: Option<i32>,
    /// Rows of the scrolling form region; 0 auto-sizes.
    pub form_height: u32,
    /// Box height; 0 auto-sizes.
    pub height: u32,
    /// Box width; 0 auto-sizes.
    pub width: u32,
}

/// Lay out one editable field per (label, initial value) pair, stacked
/// vertically in declaration order: labels in column 1, fields in a second
/// column wide enough for the longest label.
pub fn build_simple_form(items: &[(String, String)], opts: &SimpleFormOptions) -> Vec<FormField> {
    let longest = |it: &mut dyn Iterator<Item = usize>| it.max().unwrap_or(0);

    let label_width = opts.label_width.unwrap_or_else(|| {
        longest(&mut items.iter().map(|(label, _)| label.chars().count())) as u32 + 1
    });
    let field_width = opts.field_width.unwrap_or_else(|| {
        longest(&mut items.iter().map(|(_, value)| value.chars().count())) as u32 + 1
    });
    let max_length = opts.max_length.unwrap_or(0);

    items
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let row = i as u32 + 1;
            FormField::new(
                label.clone(),
                row,
                1,
                value.clone(),
                row,
                label_width,
                field_width as i32,
                max_length,
            )
        })
        .collect()
}
