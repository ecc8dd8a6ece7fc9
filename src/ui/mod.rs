//! UI components and rendering
//!
//! egui widgets for the editor, the picker rows and the copy button. All
//! state they touch lives in the library types; the widgets only draw and
//! report clicks.

pub mod colors;
pub mod copy_button;
pub mod editor_view;
pub mod picker_view;

// Re-exports for convenience
pub use colors::{ToEguiColor, UiColors};
pub use copy_button::CopyButton;
pub use editor_view::{styled_layout_job, EditorView};
pub use picker_view::PickerView;
