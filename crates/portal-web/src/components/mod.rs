mod copy_button;
mod error_box;
mod markdown_view;
mod spinner;

pub use copy_button::CopyButton;
pub use error_box::ErrorBox;
pub use markdown_view::MarkdownView;
pub use spinner::Spinner;
