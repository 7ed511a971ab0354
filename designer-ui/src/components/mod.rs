//! View components. Pure: data in, callbacks out.

mod export_button;
mod layout;
mod select;
mod selectors;

pub use export_button::ExportButton;
pub use layout::{DesignerLayout, NoTemplateFound, SidebarSection};
pub use select::Select;
pub use selectors::{TemplateSelector, ThemeSelector, VariableSelectorView};
